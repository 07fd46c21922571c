//! 司机
//!
//! 司机值对象：位置、速度与空闲标志。司机只负责计算行驶时间和切换自己的状态，
//! 不修改乘客状态。

use std::fmt;

use super::location::{Location, manhattan_distance};
use crate::sim::{Result, SimError};

/// 司机标识符
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriverId(pub String);

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Driver {
    pub id: DriverId,
    pub location: Location,
    speed: u32,
    idle: bool,
}

impl Driver {
    /// 新司机默认空闲；速度必须为正。
    pub fn new(id: impl Into<String>, location: Location, speed: u32) -> Result<Self> {
        let id = DriverId(id.into());
        if speed == 0 {
            return Err(SimError::InvalidSpeed { driver: id });
        }
        Ok(Self {
            id,
            location,
            speed,
            idle: true,
        })
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }

    /// 到达 `to` 所需时间：距离 / 速度，四舍六入五成双。
    pub fn travel_time(&self, to: Location) -> u64 {
        let dist = manhattan_distance(self.location, to) as f64;
        (dist / f64::from(self.speed)).round_ties_even() as u64
    }

    /// 开始驶向 `to`，返回所需时间
    pub fn start_drive(&mut self, to: Location) -> u64 {
        self.idle = false;
        self.travel_time(to)
    }

    /// 到达上一次 `start_drive` 的目的地
    pub fn end_drive(&mut self, arrived_at: Location) {
        self.location = arrived_at;
        self.idle = true;
    }

    /// 载客驶向 `destination`，返回行程时间
    pub fn start_ride(&mut self, destination: Location) -> u64 {
        self.idle = false;
        self.travel_time(destination)
    }

    /// 在 `destination` 放下乘客
    pub fn end_ride(&mut self, destination: Location) {
        self.location = destination;
        self.idle = true;
    }
}

// 身份 + 位置 + 速度都相同才算同一个快照
impl PartialEq for Driver {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.location == other.location && self.speed == other.speed
    }
}

impl Eq for Driver {}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

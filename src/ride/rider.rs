//! 乘客
//!
//! 乘客值对象与它的状态机：waiting → satisfied / cancelled。

use std::fmt;

use super::location::Location;
use crate::sim::{Result, SimError};

/// 乘客标识符
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RiderId(pub String);

impl fmt::Display for RiderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiderStatus {
    Waiting,
    Cancelled,
    Satisfied,
}

#[derive(Debug, Clone)]
pub struct Rider {
    pub id: RiderId,
    pub origin: Location,
    pub destination: Location,
    /// 愿意等待的时间；越小越优先被接
    pub patience: u64,
    status: RiderStatus,
}

impl Rider {
    pub fn new(
        id: impl Into<String>,
        origin: Location,
        destination: Location,
        patience: u64,
    ) -> Self {
        Self {
            id: RiderId(id.into()),
            origin,
            destination,
            patience,
            status: RiderStatus::Waiting,
        }
    }

    pub fn status(&self) -> RiderStatus {
        self.status
    }

    pub fn is_waiting(&self) -> bool {
        self.status == RiderStatus::Waiting
    }

    /// 被司机接上
    pub fn satisfy(&mut self) -> Result<()> {
        self.transition(RiderStatus::Satisfied)
    }

    /// 等待超时，取消请求
    pub fn cancel(&mut self) -> Result<()> {
        self.transition(RiderStatus::Cancelled)
    }

    fn transition(&mut self, to: RiderStatus) -> Result<()> {
        if self.status != RiderStatus::Waiting {
            return Err(SimError::InvalidRiderTransition {
                rider: self.id.clone(),
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

impl PartialEq for Rider {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Rider {}

impl fmt::Display for Rider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

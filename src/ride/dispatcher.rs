//! 调度器
//!
//! 为乘客挑选司机、为司机挑选乘客。调度器只做选择，不修改司机的空闲状态，
//! 也不把选中的一方移出登记表：这些状态变化由事件层在确认匹配后完成。

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use super::driver::{Driver, DriverId};
use super::rider::{Rider, RiderId};
use crate::queue::{Prioritized, StablePriorityQueue};
use tracing::{debug, trace};

/// 等待列表中的条目：按耐心值排序，耐心值越小越先被接。相等只看乘客 id。
#[derive(Debug, Clone)]
struct WaitingRider {
    id: RiderId,
    patience: u64,
}

impl PartialEq for WaitingRider {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for WaitingRider {}

impl Prioritized for WaitingRider {
    type Key = u64;

    fn priority(&self) -> u64 {
        self.patience
    }
}

impl fmt::Display for WaitingRider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[derive(Default)]
pub struct Dispatcher {
    /// 所有请求过乘客的司机，按首次登记顺序
    drivers: Vec<Driver>,
    driver_index: HashMap<DriverId, usize>,
    /// 尚未匹配且未取消的乘客
    waiting: StablePriorityQueue<WaitingRider>,
    /// 所有请求过司机的乘客；乘客状态只保存在这里
    riders: HashMap<RiderId, Rider>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为乘客找到最快能到达其出发地的司机。
    ///
    /// 没有任何已登记司机时，把乘客放进等待列表（已在其中则不重复加入）并返回 `None`。
    /// 行驶时间相同时先登记的司机胜出。
    pub fn request_driver(&mut self, rider: &Rider) -> Option<&Driver> {
        let patience = self.enroll_rider(rider).patience;

        if self.drivers.is_empty() {
            let entry = WaitingRider {
                id: rider.id.clone(),
                patience,
            };
            if !self.waiting.contains(&entry) {
                debug!(rider = %rider.id, "暂无司机，加入等待列表");
                self.waiting.insert(entry);
            }
            return None;
        }

        let best = self
            .drivers
            .iter()
            .min_by_key(|d| d.travel_time(rider.origin))?;
        trace!(rider = %rider.id, driver = %best.id, "选中最近司机");
        Some(best)
    }

    /// 登记司机（若尚未登记），并返回等待列表中优先级最高的乘客。
    ///
    /// 乘客不会被移出等待列表。
    pub fn request_rider(&mut self, driver: &Driver) -> Option<&Rider> {
        match self.driver_index.get(&driver.id) {
            Some(&idx) => {
                // 同一司机的新快照（位置可能已变化）
                if self.drivers[idx] != *driver {
                    self.drivers[idx] = driver.clone();
                }
            }
            None => {
                debug!(driver = %driver.id, "登记新司机");
                self.driver_index
                    .insert(driver.id.clone(), self.drivers.len());
                self.drivers.push(driver.clone());
            }
        }

        let next = self.waiting.peek_min().ok()?;
        self.riders.get(&next.id)
    }

    /// 把乘客移出等待列表；乘客不在其中时什么也不做。
    pub fn cancel_ride(&mut self, rider: &RiderId) {
        let removed = self.waiting.remove_all_equal(&WaitingRider {
            id: rider.clone(),
            patience: 0,
        });
        trace!(rider = %rider, removed, "移出等待列表");
    }

    pub fn driver(&self, id: &DriverId) -> Option<&Driver> {
        self.driver_index.get(id).map(|&idx| &self.drivers[idx])
    }

    pub fn driver_mut(&mut self, id: &DriverId) -> Option<&mut Driver> {
        let idx = *self.driver_index.get(id)?;
        self.drivers.get_mut(idx)
    }

    /// 按登记顺序列出所有已知司机
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn rider(&self, id: &RiderId) -> Option<&Rider> {
        self.riders.get(id)
    }

    pub fn rider_mut(&mut self, id: &RiderId) -> Option<&mut Rider> {
        self.riders.get_mut(id)
    }

    /// 把乘客登记进名册。
    ///
    /// 仍在等待的乘客保留原记录；已取消或已被接走的乘客再次请求时，
    /// 用新的请求替换旧记录，开始新一轮等待。
    pub fn enroll_rider(&mut self, rider: &Rider) -> &mut Rider {
        match self.riders.entry(rider.id.clone()) {
            Entry::Occupied(e) if e.get().is_waiting() => e.into_mut(),
            Entry::Occupied(mut e) => {
                debug!(rider = %rider.id, old = ?e.get().status(), "乘客再次请求");
                e.insert(Rider::new(
                    rider.id.0.clone(),
                    rider.origin,
                    rider.destination,
                    rider.patience,
                ));
                e.into_mut()
            }
            Entry::Vacant(e) => e.insert(rider.clone()),
        }
    }

    /// 按出队顺序列出等待中的乘客
    pub fn waiting_riders(&self) -> Vec<&Rider> {
        self.waiting
            .iter_ordered()
            .into_iter()
            .filter_map(|w| self.riders.get(&w.id))
            .collect()
    }

    pub fn is_waiting(&self, id: &RiderId) -> bool {
        self.waiting.iter().any(|w| &w.id == id)
    }
}

impl fmt::Display for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let drivers = if self.drivers.is_empty() {
            "None".to_string()
        } else {
            let names: Vec<String> = self.drivers.iter().map(|d| d.to_string()).collect();
            format!("[{}]", names.join(", "))
        };
        write!(
            f,
            "List of available drivers: {}\nList of available riders: {}",
            drivers, self.waiting
        )
    }
}

//! 监视器
//!
//! 按类别（司机/乘客）和参与者记录带时间戳的活动，仿真结束时汇总成报告。

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::warn;

use super::location::{Location, manhattan_distance};
use crate::sim::{Result, SimError, SimTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityCategory {
    Driver,
    Rider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityDescription {
    Request,
    Cancel,
    Pickup,
    Dropoff,
}

/// 一条活动记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub time: SimTime,
    pub description: ActivityDescription,
    pub location: Location,
}

/// 仿真统计报告
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub rider_wait_time: f64,
    pub driver_total_distance: f64,
    pub driver_ride_distance: f64,
}

/// 单个类别下的日志：参与者 → 按时间顺序的活动列表。
/// 额外保存首次出现顺序，使汇总的累加顺序可复现。
#[derive(Debug, Default)]
struct CategoryLog {
    order: Vec<String>,
    logs: HashMap<String, Vec<Activity>>,
}

impl CategoryLog {
    fn push(&mut self, identifier: &str, activity: Activity) {
        if !self.logs.contains_key(identifier) {
            self.order.push(identifier.to_string());
        }
        let log = self.logs.entry(identifier.to_string()).or_default();
        if let Some(last) = log.last() {
            if activity.time < last.time {
                warn!(
                    actor = identifier,
                    last = %last.time,
                    got = %activity.time,
                    "活动时间早于该参与者上一条记录"
                );
            }
        }
        log.push(activity);
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &[Activity])> {
        self.order
            .iter()
            .filter_map(|id| self.logs.get(id).map(|l| (id.as_str(), l.as_slice())))
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

#[derive(Debug, Default)]
pub struct Monitor {
    drivers: CategoryLog,
    riders: CategoryLog,
}

impl Monitor {
    pub fn new() -> Self {
        Self::default()
    }

    fn category(&self, category: ActivityCategory) -> &CategoryLog {
        match category {
            ActivityCategory::Driver => &self.drivers,
            ActivityCategory::Rider => &self.riders,
        }
    }

    /// 记录一条活动；参与者第一次出现时创建其日志。
    pub fn notify(
        &mut self,
        time: SimTime,
        category: ActivityCategory,
        description: ActivityDescription,
        identifier: &str,
        location: Location,
    ) {
        let log = match category {
            ActivityCategory::Driver => &mut self.drivers,
            ActivityCategory::Rider => &mut self.riders,
        };
        log.push(
            identifier,
            Activity {
                time,
                description,
                location,
            },
        );
    }

    /// 该类别下出现过的参与者数
    pub fn actor_count(&self, category: ActivityCategory) -> usize {
        self.category(category).len()
    }

    pub fn activities(&self, category: ActivityCategory, identifier: &str) -> &[Activity] {
        self.category(category)
            .logs
            .get(identifier)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn report(&self) -> Result<Report> {
        Ok(Report {
            rider_wait_time: self.average_wait_time()?,
            driver_total_distance: self.average_total_distance()?,
            driver_ride_distance: self.average_ride_distance()?,
        })
    }

    /// 已被接上或已取消的乘客的平均等待时间：第二条记录时间减第一条。
    pub fn average_wait_time(&self) -> Result<f64> {
        let mut total = 0u64;
        let mut count = 0u64;
        for (_, log) in self.riders.iter() {
            // 少于两条记录说明还在等
            if let [first, second, ..] = log {
                total += second.time.since(first.time);
                count += 1;
            }
        }
        if count == 0 {
            return Err(SimError::UndefinedStatistic {
                statistic: "rider_wait_time",
            });
        }
        Ok(total as f64 / count as f64)
    }

    /// 所有司机相邻记录间距离之和的平均值
    pub fn average_total_distance(&self) -> Result<f64> {
        let drivers = self.driver_count("driver_total_distance")?;
        let total: u64 = self
            .drivers
            .iter()
            .map(|(_, log)| {
                log.windows(2)
                    .map(|w| manhattan_distance(w[0].location, w[1].location))
                    .sum::<u64>()
            })
            .sum();
        Ok(total as f64 / drivers)
    }

    /// 所有司机载客距离（每个 dropoff 与其前一条记录之间）之和的平均值
    pub fn average_ride_distance(&self) -> Result<f64> {
        let drivers = self.driver_count("driver_ride_distance")?;
        let mut total = 0u64;
        for (id, log) in self.drivers.iter() {
            if log
                .first()
                .is_some_and(|a| a.description == ActivityDescription::Dropoff)
            {
                return Err(SimError::StructuralLogViolation {
                    driver: id.to_string(),
                });
            }
            for w in log.windows(2) {
                let (prev, cur) = (&w[0], &w[1]);
                if cur.description != ActivityDescription::Dropoff {
                    continue;
                }
                if prev.description != ActivityDescription::Pickup {
                    warn!(
                        driver = id,
                        at = %cur.time,
                        prev = ?prev.description,
                        "dropoff 之前不是 pickup"
                    );
                }
                total += manhattan_distance(prev.location, cur.location);
            }
        }
        Ok(total as f64 / drivers)
    }

    fn driver_count(&self, statistic: &'static str) -> Result<f64> {
        match self.drivers.len() {
            0 => Err(SimError::UndefinedStatistic { statistic }),
            n => Ok(n as f64),
        }
    }
}

impl fmt::Display for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Monitor ({} drivers, {} riders)",
            self.drivers.len(),
            self.riders.len()
        )
    }
}

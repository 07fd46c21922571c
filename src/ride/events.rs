//! 叫车事件
//!
//! 乘客请求、司机请求、取消、接客、送达五类事件。调度器只给出候选，
//! 司机/乘客的状态切换与等待列表的移除都在这里完成。

use std::fmt;

use tracing::debug;

use super::dispatcher::Dispatcher;
use super::driver::{Driver, DriverId};
use super::monitor::{ActivityCategory, ActivityDescription, Monitor};
use super::rider::{Rider, RiderId};
use crate::sim::{Event, Result, SimError, SimTime};

/// 同一时刻的执行顺序：先结束的行程，再接客、取消，最后是新请求。
pub mod rank {
    pub const DROPOFF: u8 = 0;
    pub const PICKUP: u8 = 1;
    pub const CANCEL: u8 = 2;
    pub const DRIVER_REQUEST: u8 = 3;
    pub const RIDER_REQUEST: u8 = 4;
}

fn driver_mut<'a>(dispatcher: &'a mut Dispatcher, id: &DriverId) -> Result<&'a mut Driver> {
    dispatcher
        .driver_mut(id)
        .ok_or_else(|| SimError::UnknownDriver(id.clone()))
}

fn rider_of<'a>(dispatcher: &'a Dispatcher, id: &RiderId) -> Result<&'a Rider> {
    dispatcher
        .rider(id)
        .ok_or_else(|| SimError::UnknownRider(id.clone()))
}

/// 乘客发出叫车请求
#[derive(Debug, Clone)]
pub struct RiderRequest {
    pub at: SimTime,
    pub rider: Rider,
}

impl Event for RiderRequest {
    fn at(&self) -> SimTime {
        self.at
    }

    fn rank(&self) -> u8 {
        rank::RIDER_REQUEST
    }

    fn execute(
        self: Box<Self>,
        dispatcher: &mut Dispatcher,
        monitor: &mut Monitor,
    ) -> Result<Vec<Box<dyn Event>>> {
        let RiderRequest { at, rider } = *self;
        monitor.notify(
            at,
            ActivityCategory::Rider,
            ActivityDescription::Request,
            &rider.id.0,
            rider.origin,
        );

        let mut out: Vec<Box<dyn Event>> = Vec::new();
        let matched = dispatcher.request_driver(&rider).map(|d| d.id.clone());
        if let Some(driver_id) = matched {
            let travel = driver_mut(dispatcher, &driver_id)?.start_drive(rider.origin);
            debug!(rider = %rider.id, driver = %driver_id, travel, "司机出发接客");
            out.push(Box::new(Pickup {
                at: at.after(travel),
                rider: rider.id.clone(),
                driver: driver_id,
            }));
        }
        out.push(Box::new(Cancel {
            at: at.after(rider.patience),
            rider: rider.id,
        }));
        Ok(out)
    }
}

impl fmt::Display for RiderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}: Request a driver", self.at, self.rider)
    }
}

/// 司机请求一位乘客
#[derive(Debug, Clone)]
pub struct DriverRequest {
    pub at: SimTime,
    pub driver: Driver,
}

impl Event for DriverRequest {
    fn at(&self) -> SimTime {
        self.at
    }

    fn rank(&self) -> u8 {
        rank::DRIVER_REQUEST
    }

    fn execute(
        self: Box<Self>,
        dispatcher: &mut Dispatcher,
        monitor: &mut Monitor,
    ) -> Result<Vec<Box<dyn Event>>> {
        let DriverRequest { at, driver } = *self;
        monitor.notify(
            at,
            ActivityCategory::Driver,
            ActivityDescription::Request,
            &driver.id.0,
            driver.location,
        );

        let Some((rider_id, origin)) = dispatcher
            .request_rider(&driver)
            .map(|r| (r.id.clone(), r.origin))
        else {
            return Ok(Vec::new());
        };
        let travel = driver_mut(dispatcher, &driver.id)?.start_drive(origin);
        debug!(rider = %rider_id, driver = %driver.id, travel, "司机出发接客");
        Ok(vec![Box::new(Pickup {
            at: at.after(travel),
            rider: rider_id,
            driver: driver.id,
        })])
    }
}

impl fmt::Display for DriverRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}: Request a rider", self.at, self.driver)
    }
}

/// 乘客耐心耗尽；已被接上的乘客不受影响
#[derive(Debug, Clone)]
pub struct Cancel {
    pub at: SimTime,
    pub rider: RiderId,
}

impl Event for Cancel {
    fn at(&self) -> SimTime {
        self.at
    }

    fn rank(&self) -> u8 {
        rank::CANCEL
    }

    fn execute(
        self: Box<Self>,
        dispatcher: &mut Dispatcher,
        monitor: &mut Monitor,
    ) -> Result<Vec<Box<dyn Event>>> {
        let rider = dispatcher
            .rider_mut(&self.rider)
            .ok_or_else(|| SimError::UnknownRider(self.rider.clone()))?;
        if !rider.is_waiting() {
            return Ok(Vec::new());
        }
        rider.cancel()?;
        let origin = rider.origin;
        dispatcher.cancel_ride(&self.rider);
        monitor.notify(
            self.at,
            ActivityCategory::Rider,
            ActivityDescription::Cancel,
            &self.rider.0,
            origin,
        );
        Ok(Vec::new())
    }
}

impl fmt::Display for Cancel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}: Cancel request", self.at, self.rider)
    }
}

/// 司机到达乘客出发地
#[derive(Debug, Clone)]
pub struct Pickup {
    pub at: SimTime,
    pub rider: RiderId,
    pub driver: DriverId,
}

impl Event for Pickup {
    fn at(&self) -> SimTime {
        self.at
    }

    fn rank(&self) -> u8 {
        rank::PICKUP
    }

    fn execute(
        self: Box<Self>,
        dispatcher: &mut Dispatcher,
        monitor: &mut Monitor,
    ) -> Result<Vec<Box<dyn Event>>> {
        let Pickup { at, rider, driver } = *self;
        let (origin, destination, waiting) = {
            let r = rider_of(dispatcher, &rider)?;
            (r.origin, r.destination, r.is_waiting())
        };
        driver_mut(dispatcher, &driver)?.end_drive(origin);

        if !waiting {
            // 乘客已取消或已被别的司机接走，重新请求乘客
            debug!(rider = %rider, driver = %driver, "乘客不再等待");
            let snapshot = driver_mut(dispatcher, &driver)?.clone();
            return Ok(vec![Box::new(DriverRequest {
                at,
                driver: snapshot,
            })]);
        }

        if let Some(r) = dispatcher.rider_mut(&rider) {
            r.satisfy()?;
        }
        dispatcher.cancel_ride(&rider);
        monitor.notify(
            at,
            ActivityCategory::Rider,
            ActivityDescription::Pickup,
            &rider.0,
            origin,
        );
        monitor.notify(
            at,
            ActivityCategory::Driver,
            ActivityDescription::Pickup,
            &driver.0,
            origin,
        );

        let ride = driver_mut(dispatcher, &driver)?.start_ride(destination);
        Ok(vec![Box::new(Dropoff {
            at: at.after(ride),
            rider,
            driver,
        })])
    }
}

impl fmt::Display for Pickup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}: Pickup {}", self.at, self.driver, self.rider)
    }
}

/// 司机把乘客送到目的地，随后立即请求下一位乘客
#[derive(Debug, Clone)]
pub struct Dropoff {
    pub at: SimTime,
    pub rider: RiderId,
    pub driver: DriverId,
}

impl Event for Dropoff {
    fn at(&self) -> SimTime {
        self.at
    }

    fn rank(&self) -> u8 {
        rank::DROPOFF
    }

    fn execute(
        self: Box<Self>,
        dispatcher: &mut Dispatcher,
        monitor: &mut Monitor,
    ) -> Result<Vec<Box<dyn Event>>> {
        let destination = rider_of(dispatcher, &self.rider)?.destination;
        let driver = driver_mut(dispatcher, &self.driver)?;
        driver.end_ride(destination);
        monitor.notify(
            self.at,
            ActivityCategory::Driver,
            ActivityDescription::Dropoff,
            &self.driver.0,
            destination,
        );
        Ok(vec![Box::new(DriverRequest {
            at: self.at,
            driver: driver.clone(),
        })])
    }
}

impl fmt::Display for Dropoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}: Drop off {}", self.at, self.driver, self.rider)
    }
}

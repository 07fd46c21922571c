//! 事件 trait
//!
//! 定义仿真事件接口。

use std::fmt;

use super::error::Result;
use super::time::SimTime;
use crate::ride::{Dispatcher, Monitor};

/// 事件：带有自己的时间戳，执行后返回新产生的事件（可以为空）。
///
/// 使用 `self: Box<Self>` 以支持 move/所有权转移。`Display` 用于日志中的一行描述。
pub trait Event: fmt::Display + 'static {
    /// 事件发生的时刻
    fn at(&self) -> SimTime;

    /// 同一时刻下的次级排序键，越小越先执行
    fn rank(&self) -> u8 {
        0
    }

    fn execute(
        self: Box<Self>,
        dispatcher: &mut Dispatcher,
        monitor: &mut Monitor,
    ) -> Result<Vec<Box<dyn Event>>>;
}

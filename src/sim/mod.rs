//! 仿真核心模块
//!
//! 此模块包含事件驱动仿真的核心组件：仿真时间、事件、调度事件、仿真循环与错误类型。

// 子模块声明
mod error;
mod event;
mod scheduled_event;
mod simulator;
mod time;

// 重新导出公共接口
pub use error::{Result, SimError};
pub use event::Event;
pub use scheduled_event::ScheduledEvent;
pub use simulator::Simulation;
pub use time::SimTime;

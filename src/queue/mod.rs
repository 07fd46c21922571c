//! 队列
//!
//! 稳定优先队列：事件时间线与等待乘客列表共同的底层容器。

mod stable;

pub use stable::{Prioritized, StablePriorityQueue};

//! 仿真时间类型
//!
//! 仿真时间是逻辑整数时钟，没有单位换算。

use std::fmt;

/// 仿真时间（逻辑时刻）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// 当前时刻之后 `dt` 个时间单位，溢出时饱和。
    pub fn after(self, dt: u64) -> SimTime {
        SimTime(self.0.saturating_add(dt))
    }

    /// `self - earlier`，不会下溢。
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

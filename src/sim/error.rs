//! 错误类型
//!
//! 仿真核心、事件层与事件文件加载共用的错误枚举。

use crate::ride::{DriverId, RiderId, RiderStatus};

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// 对空队列调用 remove_min / peek_min
    #[error("priority queue is empty")]
    EmptyQueue,

    /// 统计量分母为零（没有已结束等待的乘客，或没有任何司机）
    #[error("statistic `{statistic}` is undefined: no samples")]
    UndefinedStatistic { statistic: &'static str },

    /// 司机日志的第一条记录就是 dropoff
    #[error("driver {driver} has a dropoff as its first recorded activity")]
    StructuralLogViolation { driver: String },

    #[error("unknown driver {0}")]
    UnknownDriver(DriverId),

    #[error("unknown rider {0}")]
    UnknownRider(RiderId),

    #[error("rider {rider} cannot go from {from:?} to {to:?}")]
    InvalidRiderTransition {
        rider: RiderId,
        from: RiderStatus,
        to: RiderStatus,
    },

    #[error("driver {driver} has zero speed")]
    InvalidSpeed { driver: DriverId },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid json event file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

//! 调度事件
//!
//! 把事件包装成优先队列元素：优先级键为 (时间, rank)，插入序号由队列负责。

use super::event::Event;
use super::time::SimTime;
use crate::queue::Prioritized;

/// 调度事件，缓存排序键并持有事件对象。
pub struct ScheduledEvent {
    pub(crate) at: SimTime,
    pub(crate) rank: u8,
    pub(crate) ev: Box<dyn Event>,
}

impl ScheduledEvent {
    pub fn new(ev: Box<dyn Event>) -> Self {
        Self {
            at: ev.at(),
            rank: ev.rank(),
            ev,
        }
    }
}

impl Prioritized for ScheduledEvent {
    type Key = (SimTime, u8);

    fn priority(&self) -> Self::Key {
        (self.at, self.rank)
    }
}

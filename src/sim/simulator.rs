//! 仿真器
//!
//! 持有事件队列、调度器与监视器，按 (时间, rank, 插入顺序) 依次执行事件直到队列为空。

use super::error::Result;
use super::event::Event;
use super::scheduled_event::ScheduledEvent;
use super::time::SimTime;
use crate::queue::StablePriorityQueue;
use crate::ride::{Dispatcher, Monitor, Report};
use tracing::{debug, info, trace};

/// 事件驱动仿真：一次运行独占一组队列/调度器/监视器。
#[derive(Default)]
pub struct Simulation {
    now: SimTime,
    processed: u64,
    events: StablePriorityQueue<ScheduledEvent>,
    dispatcher: Dispatcher,
    monitor: Monitor,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取当前仿真时间（最近一个执行的事件的时间）
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// 已执行的事件数
    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    /// 把事件加入队列
    #[tracing::instrument(skip(self, ev), fields(event = %ev, schedule_at = %ev.at()))]
    pub fn schedule(&mut self, ev: Box<dyn Event>) {
        trace!(now = %self.now, "调度事件");
        self.events.insert(ScheduledEvent::new(ev));
        debug!(queue_size = self.events.len(), "事件已加入队列");
    }

    /// 执行一个事件；队列为空时返回 `Ok(false)`。
    pub fn step(&mut self) -> Result<bool> {
        if self.events.is_empty() {
            return Ok(false);
        }
        let item = self.events.remove_min()?;
        self.now = item.at;
        self.processed += 1;

        info!("{}", item.ev);
        debug!(
            event_num = self.processed,
            now = %self.now,
            rank = item.rank,
            remaining_queue = self.events.len(),
            "执行事件"
        );

        let follow_ups = item.ev.execute(&mut self.dispatcher, &mut self.monitor)?;
        for ev in follow_ups {
            self.schedule(ev);
        }
        Ok(true)
    }

    /// 载入初始事件并运行到队列为空，返回监视器的最终报告。
    #[tracing::instrument(skip(self, initial_events))]
    pub fn run(&mut self, initial_events: Vec<Box<dyn Event>>) -> Result<Report> {
        info!("▶️  开始运行仿真");
        for ev in initial_events {
            self.schedule(ev);
        }
        debug!(now = %self.now, queue_size = self.events.len(), "初始状态");

        while self.step()? {}

        info!(
            total_events = self.processed,
            final_time = %self.now,
            "✅ 仿真完成"
        );
        self.monitor.report()
    }
}

//! 稳定优先队列
//!
//! 基于 `BinaryHeap` 的最小堆，每个元素配一个单调递增的插入序号作为次级键：
//! 优先级相同的元素按插入顺序出队。

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::sim::{Result, SimError};

/// 可放入 [`StablePriorityQueue`] 的元素：给出自己的优先级键，键越小越先出队。
pub trait Prioritized {
    type Key: Ord + Clone;

    fn priority(&self) -> Self::Key;
}

struct Entry<T: Prioritized> {
    key: T::Key,
    seq: u64,
    item: T,
}

// BinaryHeap 是 max-heap；(key, seq) 最小者需要在堆顶，因此反向比较。
impl<T: Prioritized> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.key.cmp(&other.key) {
            Ordering::Equal => self.seq.cmp(&other.seq),
            ord => ord,
        }
        .reverse()
    }
}

impl<T: Prioritized> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Prioritized> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<T: Prioritized> Eq for Entry<T> {}

/// 稳定优先队列：按 (priority, 插入序号) 升序出队。
pub struct StablePriorityQueue<T: Prioritized> {
    next_seq: u64,
    heap: BinaryHeap<Entry<T>>,
}

impl<T: Prioritized> Default for StablePriorityQueue<T> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            heap: BinaryHeap::new(),
        }
    }
}

impl<T: Prioritized> StablePriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入元素，O(log n)
    pub fn insert(&mut self, item: T) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.heap.push(Entry {
            key: item.priority(),
            seq,
            item,
        });
    }

    /// 移除并返回当前最小元素；队列为空时返回 `EmptyQueue`。
    pub fn remove_min(&mut self) -> Result<T> {
        self.heap
            .pop()
            .map(|e| e.item)
            .ok_or(SimError::EmptyQueue)
    }

    /// 查看当前最小元素（不移除）。
    pub fn peek_min(&self) -> Result<&T> {
        self.heap
            .peek()
            .map(|e| &e.item)
            .ok_or(SimError::EmptyQueue)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// 以任意顺序遍历元素
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.heap.iter().map(|e| &e.item)
    }

    /// 按出队顺序返回所有元素的引用（不修改队列）。
    pub fn iter_ordered(&self) -> Vec<&T> {
        let mut entries: Vec<&Entry<T>> = self.heap.iter().collect();
        // Entry 的 Ord 是反向的，降序排序即为出队顺序
        entries.sort_by(|a, b| b.cmp(a));
        entries.into_iter().map(|e| &e.item).collect()
    }
}

impl<T: Prioritized + PartialEq> StablePriorityQueue<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.heap.iter().any(|e| &e.item == item)
    }

    /// 一次性移除所有与 `item` 相等的元素，返回移除的个数。
    pub fn remove_all_equal(&mut self, item: &T) -> usize {
        let before = self.heap.len();
        self.heap.retain(|e| &e.item != item);
        before - self.heap.len()
    }
}

impl<T: Prioritized + std::fmt::Display> std::fmt::Display for StablePriorityQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        let items: Vec<String> = self.iter_ordered().iter().map(|i| i.to_string()).collect();
        write!(f, "[{}]", items.join(", "))
    }
}

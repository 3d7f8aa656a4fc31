//! FIFO ready queue with single-membership guarantee.

use std::collections::VecDeque;

/// Ready queue of process-table indices.
///
/// Each index is present at most once at a time; a per-slot `enqueued`
/// flag makes duplicate admission a no-op.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    queue: VecDeque<usize>,
    enqueued: Vec<bool>,
}

impl ReadyQueue {
    /// Creates a queue able to track indices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            enqueued: vec![false; capacity],
        }
    }

    /// Adds `index` at the tail.
    ///
    /// Returns `false` (and does nothing) if it is already queued.
    pub fn enqueue(&mut self, index: usize) -> bool {
        if index >= self.enqueued.len() {
            self.enqueued.resize(index + 1, false);
        }
        if self.enqueued[index] {
            return false;
        }
        self.enqueued[index] = true;
        self.queue.push_back(index);
        true
    }

    /// Removes and returns the head.
    pub fn dequeue(&mut self) -> Option<usize> {
        let index = self.queue.pop_front()?;
        self.enqueued[index] = false;
        Some(index)
    }

    /// Whether `index` is currently queued.
    pub fn contains(&self, index: usize) -> bool {
        self.enqueued.get(index).copied().unwrap_or(false)
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queued indices, head first.
    pub fn snapshot(&self) -> Vec<usize> {
        self.queue.iter().copied().collect()
    }
}

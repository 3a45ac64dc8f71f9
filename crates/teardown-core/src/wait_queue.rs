//! FIFO queue of waiters

use crate::waiter::{CloseableWaiter, Waiter};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// An ordered queue of waiters released oldest-first
///
/// Every mutation happens under one lock, so at most one insert or release
/// runs at a time.
#[derive(Debug, Default)]
pub struct WaitQueue {
    queue: Mutex<VecDeque<CloseableWaiter>>,
}

impl WaitQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a new waiter and return its wait-only view
    pub fn new_waiter(&self) -> Waiter {
        let mut queue = self.queue.lock();
        let waiter = CloseableWaiter::new();
        let view = waiter.waiter();
        queue.push_back(waiter);
        tracing::trace!(waiters = queue.len(), "waiter enqueued");
        view
    }

    /// Number of waiters still queued
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    /// Check if no waiter is queued
    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    /// Release up to `n` of the oldest waiters, in enqueue order
    ///
    /// Returns how many were released, in `[0, n]`.
    pub fn release(&self, n: usize) -> usize {
        let mut queue = self.queue.lock();
        let count = n.min(queue.len());
        for waiter in queue.drain(..count) {
            waiter.close();
        }
        if count > 0 {
            tracing::debug!(released = count, remaining = queue.len(), "waiters released");
        }
        count
    }

    /// Release every queued waiter, oldest first
    pub fn release_all(&self) -> usize {
        let mut queue = self.queue.lock();
        let count = queue.len();
        for waiter in queue.drain(..) {
            waiter.close();
        }
        if count > 0 {
            tracing::debug!(released = count, "all waiters released");
        }
        count
    }
}

#[cfg(test)]
#[path = "wait_queue/wait_queue_tests.rs"]
mod wait_queue_tests;

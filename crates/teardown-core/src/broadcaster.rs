//! Reverse-order broadcast with handshakes

use crate::waiter::{DuplexWaiter, ReceiptableWaiter};
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct BroadcasterState {
    waiters: Vec<DuplexWaiter>,
    closed: bool,
}

/// Signals a set of waiters in reverse creation order
///
/// Each waiter is closed and then waited on until its holder calls
/// [`ReceiptableWaiter::done`]; the next waiter is only closed after that.
/// Holders that never call `done` block the broadcast forever.
///
/// All operations share one lock. A holder must not call back into the
/// broadcaster while it is being signaled.
#[derive(Debug, Default)]
pub struct Broadcaster {
    state: Mutex<BroadcasterState>,
}

impl Broadcaster {
    /// Create an open broadcaster with no waiters
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new waiter and return the holder's view
    ///
    /// Once the broadcaster is closed this always returns the shared empty
    /// waiter.
    pub fn new_waiter(&self) -> ReceiptableWaiter {
        let mut state = self.state.lock();
        if state.closed {
            return ReceiptableWaiter::empty();
        }
        let waiter = DuplexWaiter::new();
        let view = waiter.waiter();
        state.waiters.push(waiter);
        tracing::trace!(waiters = state.waiters.len(), "broadcast waiter registered");
        view
    }

    /// Number of registered waiters
    pub fn len(&self) -> usize {
        self.state.lock().waiters.len()
    }

    /// Check if no waiter is registered
    pub fn is_empty(&self) -> bool {
        self.state.lock().waiters.is_empty()
    }

    /// Check if [`close`](Self::close) was called
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Signal every waiter, newest first, then reset to the empty open state
    pub fn broadcast(&self) {
        let mut state = self.state.lock();
        Self::signal_all(&mut state);
    }

    /// Like [`broadcast`](Self::broadcast), but the broadcaster stays closed
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        Self::signal_all(&mut state);
    }

    fn signal_all(state: &mut BroadcasterState) {
        if state.waiters.is_empty() {
            return;
        }
        let waiters = std::mem::take(&mut state.waiters);
        tracing::debug!(waiters = waiters.len(), closed = state.closed, "broadcasting");
        for (index, waiter) in waiters.iter().enumerate().rev() {
            waiter.close_and_wait_done();
            tracing::trace!(index, "handshake complete");
        }
    }
}

#[cfg(test)]
#[path = "broadcaster/broadcaster_tests.rs"]
mod broadcaster_tests;

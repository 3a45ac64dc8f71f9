//! One-shot broadcast signal
//!
//! A [`Signal`] moves from open to fired exactly once and never back. Every
//! current and future observer sees the fired state, whether it parks an OS
//! thread with [`Signal::wait`] or awaits [`Signal::fired`] inside an async
//! task.

use parking_lot::{Condvar, Mutex};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::Notify;

/// Boxed future returned by [`Signal::fired`]
pub type Fired = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

struct SignalState {
    fired: AtomicBool,
    lock: Mutex<()>,
    cond: Condvar,
    notify: Notify,
}

/// A monotonic one-shot signal (cloneable, clones share state)
#[derive(Clone)]
pub struct Signal {
    state: Arc<SignalState>,
}

impl Signal {
    /// Create a new signal in the open state
    pub fn new() -> Self {
        Self {
            state: Arc::new(SignalState {
                fired: AtomicBool::new(false),
                lock: Mutex::new(()),
                cond: Condvar::new(),
                notify: Notify::new(),
            }),
        }
    }

    /// Create a signal that has already fired
    pub fn fired_now() -> Self {
        let signal = Self::new();
        signal.fire();
        signal
    }

    /// Fire the signal
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn fire(&self) -> bool {
        let _guard = self.state.lock.lock();
        if self.state.fired.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.state.cond.notify_all();
        self.state.notify.notify_waiters();
        true
    }

    /// Check if the signal has fired (non-blocking)
    pub fn is_fired(&self) -> bool {
        self.state.fired.load(Ordering::SeqCst)
    }

    /// Park the calling thread until the signal fires
    ///
    /// Returns immediately if already fired.
    pub fn wait(&self) {
        if self.is_fired() {
            return;
        }
        let mut guard = self.state.lock.lock();
        while !self.is_fired() {
            self.state.cond.wait(&mut guard);
        }
    }

    /// Park the calling thread until the signal fires or `timeout` elapses
    ///
    /// Returns whether the signal fired. A timeout too large to represent as
    /// a deadline waits without one.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        if self.is_fired() {
            return true;
        }
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            self.wait();
            return true;
        };
        let mut guard = self.state.lock.lock();
        while !self.is_fired() {
            if self.state.cond.wait_until(&mut guard, deadline).timed_out() {
                return self.is_fired();
            }
        }
        true
    }

    /// Create a future that completes when the signal fires
    ///
    /// The future owns a handle to the signal, so it can be moved into
    /// spawned tasks or used as a `select!` branch.
    pub fn fired(&self) -> Fired {
        let state = Arc::clone(&self.state);
        Box::pin(async move {
            loop {
                // Registering before the check closes the race with `fire`.
                let notified = state.notify.notified();
                if state.fired.load(Ordering::SeqCst) {
                    return;
                }
                notified.await;
            }
        })
    }

    /// Check whether two handles refer to the same signal
    pub fn same_as(&self, other: &Signal) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("fired", &self.is_fired())
            .finish()
    }
}

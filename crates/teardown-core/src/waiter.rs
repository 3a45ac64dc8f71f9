//! The waiter family
//!
//! - [`Waiter`]: wait-only view of a one-shot signal
//! - [`CloseableWaiter`]: owns the right to close the signal
//! - [`ReceiptableWaiter`]: a waiter whose holder acknowledges with [`done`](ReceiptableWaiter::done)
//! - [`DuplexWaiter`]: close plus wait-for-receipt, the handshake primitive
//!
//! Views handed to workers cannot close their own signal; only the side that
//! created the waiter can.

use crate::signal::{Fired, Signal};
use once_cell::sync::Lazy;

/// Observation of a one-shot signal
pub trait Wait {
    /// Block the calling thread until the signal fires
    ///
    /// Returns immediately if it already fired.
    fn wait(&self);

    /// Check whether the signal fired, without blocking
    fn is_signaled(&self) -> bool;

    /// Future that completes once the signal fires
    ///
    /// Intended for `tokio::select!`; already complete for a fired signal.
    fn notified(&self) -> Fired;
}

static EMPTY_RECEIPTABLE: Lazy<ReceiptableWaiter> = Lazy::new(|| ReceiptableWaiter {
    signal: Signal::fired_now(),
    receipt: Signal::fired_now(),
});

/// Wait-only view of a signal
#[derive(Clone, Debug)]
pub struct Waiter {
    signal: Signal,
}

impl Waiter {
    /// The shared, already-signaled waiter
    pub fn empty() -> Self {
        Self {
            signal: EMPTY_RECEIPTABLE.signal.clone(),
        }
    }

    /// Wrap an existing signal in a wait-only view
    pub fn from_signal(signal: Signal) -> Self {
        Self { signal }
    }

    /// Check whether two waiters observe the same signal
    pub fn same_as(&self, other: &Waiter) -> bool {
        self.signal.same_as(&other.signal)
    }
}

impl Wait for Waiter {
    fn wait(&self) {
        self.signal.wait();
    }

    fn is_signaled(&self) -> bool {
        self.signal.is_fired()
    }

    fn notified(&self) -> Fired {
        self.signal.fired()
    }
}

/// A waiter that can be closed exactly once
#[derive(Debug, Default)]
pub struct CloseableWaiter {
    signal: Signal,
}

impl CloseableWaiter {
    /// Create an open waiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the waiter, releasing everyone waiting on it
    ///
    /// Returns `true` only for the call that actually closed it.
    pub fn close(&self) -> bool {
        self.signal.fire()
    }

    /// Wait-only view to hand to workers
    pub fn waiter(&self) -> Waiter {
        Waiter::from_signal(self.signal.clone())
    }
}

impl Wait for CloseableWaiter {
    fn wait(&self) {
        self.signal.wait();
    }

    fn is_signaled(&self) -> bool {
        self.signal.is_fired()
    }

    fn notified(&self) -> Fired {
        self.signal.fired()
    }
}

/// A waiter whose holder reports back through [`done`](Self::done)
#[derive(Clone, Debug)]
pub struct ReceiptableWaiter {
    signal: Signal,
    receipt: Signal,
}

impl ReceiptableWaiter {
    /// The shared empty waiter
    ///
    /// `wait` never blocks, `notified` is already complete and `done` has
    /// nothing left to acknowledge.
    pub fn empty() -> Self {
        EMPTY_RECEIPTABLE.clone()
    }

    /// Acknowledge the signal; only the first call has an effect
    ///
    /// Holders should call this right before they stop reacting to the signal.
    pub fn done(&self) {
        self.receipt.fire();
    }

    /// Check whether the receipt was raised
    pub fn is_done(&self) -> bool {
        self.receipt.is_fired()
    }

    /// Check whether this is the shared empty waiter
    pub fn is_empty(&self) -> bool {
        self.signal.same_as(&EMPTY_RECEIPTABLE.signal)
    }
}

impl Wait for ReceiptableWaiter {
    fn wait(&self) {
        self.signal.wait();
    }

    fn is_signaled(&self) -> bool {
        self.signal.is_fired()
    }

    fn notified(&self) -> Fired {
        self.signal.fired()
    }
}

impl From<ReceiptableWaiter> for Waiter {
    fn from(waiter: ReceiptableWaiter) -> Self {
        Waiter::from_signal(waiter.signal)
    }
}

/// Closeable and receiptable at once
#[derive(Debug, Default)]
pub struct DuplexWaiter {
    signal: Signal,
    receipt: Signal,
}

impl DuplexWaiter {
    /// Create an open waiter with no receipt
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the waiter; only the first call has an effect
    pub fn close(&self) -> bool {
        self.signal.fire()
    }

    /// Raise the receipt from the closing side
    pub fn done(&self) {
        self.receipt.fire();
    }

    /// Block until the holder raised the receipt
    pub fn wait_done(&self) {
        self.receipt.wait();
    }

    /// Close, then block until the holder acknowledged
    pub fn close_and_wait_done(&self) {
        self.close();
        self.wait_done();
    }

    /// Holder view: can wait and acknowledge, cannot close
    pub fn waiter(&self) -> ReceiptableWaiter {
        ReceiptableWaiter {
            signal: self.signal.clone(),
            receipt: self.receipt.clone(),
        }
    }
}

impl Wait for DuplexWaiter {
    fn wait(&self) {
        self.signal.wait();
    }

    fn is_signaled(&self) -> bool {
        self.signal.is_fired()
    }

    fn notified(&self) -> Fired {
        self.signal.fired()
    }
}

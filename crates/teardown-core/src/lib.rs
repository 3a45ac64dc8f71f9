//! teardown-core - One-shot signaling primitives
//!
//! This crate provides:
//! - [`Signal`] monotonic one-shot signal, observable from threads and async tasks
//! - The waiter family: [`Waiter`], [`CloseableWaiter`], [`ReceiptableWaiter`], [`DuplexWaiter`]
//! - [`WaitQueue`] for FIFO release and [`Broadcaster`] for reverse-order handshakes
//! - [`safe_call`] / [`must_call`] and the [`PanicError`] they produce
//! - [`AggregateError`] for collecting failures without losing any

mod broadcaster;
mod caller;
mod error;
mod signal;
mod wait_group;
mod wait_queue;
mod waiter;

pub use broadcaster::Broadcaster;
pub use caller::{PanicError, PanicPayload, is_panic_error, is_panic_result, must_call, safe_call};
pub use error::{AggregateError, BoxError, EMPTY_AGGREGATE_MESSAGE, TaskResult};
pub use signal::{Fired, Signal};
pub use wait_group::WaitGroup;
pub use wait_queue::WaitQueue;
pub use waiter::{CloseableWaiter, DuplexWaiter, ReceiptableWaiter, Wait, Waiter};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AggregateError, BoxError, Broadcaster, CloseableWaiter, DuplexWaiter, PanicError,
        ReceiptableWaiter, TaskResult, Wait, WaitGroup, WaitQueue, Waiter, is_panic_error,
        must_call, safe_call,
    };
}

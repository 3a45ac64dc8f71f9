//! # teardown
//!
//! Ordered, panic-safe shutdown coordination for threads and async tasks.
//!
//! teardown provides:
//! - One-shot waiters that many threads or tasks can observe
//! - FIFO release queues and reverse-order broadcast handshakes
//! - A task runner that shuts tasks down newest first and keeps every error
//! - A process-wide exit signal fed by SIGINT, SIGTERM and SIGQUIT
//!
//! ## Quick Start
//!
//! ```ignore
//! use teardown::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), BoxError> {
//!     init_logging(LogLevel::Info);
//!
//!     let runner = Runner::new();
//!     runner.run(
//!         FnTask::new()
//!             .on_execute(|| {
//!                 tracing::info!("database pool opened");
//!                 Ok(())
//!             })
//!             .on_shutdown(|| {
//!                 tracing::info!("database pool closed");
//!                 Ok(())
//!             }),
//!     )?;
//!
//!     // Blocks until Ctrl+C (or SIGTERM), then shuts every task down
//!     runner.wait().await
//! }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`teardown_core`] - Signals, waiters, queues, broadcaster and panic capture
//! - [`teardown_runtime`] - Tasks, the runner, the system exit signal and server tasks
//! - [`teardown_logging`] - Tracing subscriber setup

// Re-export core types
pub use teardown_core::{
    AggregateError, BoxError, Broadcaster, CloseableWaiter, DuplexWaiter, Fired, PanicError,
    PanicPayload, ReceiptableWaiter, Signal, TaskResult, Wait, WaitGroup, WaitQueue, Waiter,
    is_panic_error, is_panic_result, must_call, safe_call,
};

// Re-export runtime types
pub use teardown_runtime::{
    ConfigError, ErrorHandler, ExitedError, FnTask, Runner, RunnerConfig, Server, ServerError,
    ServerTask, ServerTaskConfig, Task, TaskFn, is_exited_error, system_exit, trigger_system_exit,
    wait_system_exit,
};

// Re-export logging setup
pub use teardown_logging::{LogLevel, ReloadHandle, init_logging, init_logging_from_env};

// Re-export common dependencies that applications need
pub use tokio;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use teardown::prelude::*;` to import commonly used types.
pub mod prelude {
    // Waiters and coordination
    pub use crate::{
        Broadcaster, CloseableWaiter, DuplexWaiter, ReceiptableWaiter, Wait, WaitGroup,
        WaitQueue, Waiter,
    };

    // Tasks and errors
    pub use crate::{
        AggregateError, BoxError, ExitedError, FnTask, Runner, RunnerConfig, Server, ServerError,
        ServerTask, ServerTaskConfig, Task, TaskResult, must_call, safe_call, system_exit,
    };

    // Logging
    pub use crate::{LogLevel, init_logging};
}

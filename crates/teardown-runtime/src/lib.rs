//! teardown-runtime - Task runner with ordered shutdown
//!
//! This crate provides:
//! - [`Task`] trait and the closure-backed [`FnTask`]
//! - [`Runner`] that shuts tasks down in reverse order of startup
//! - [`system_exit`] process-wide exit signal fed by termination signals
//! - [`ServerTask`] for running a blocking [`Server`] as a task

mod config;
mod error;
mod runner;
mod server;
mod system_exit;
mod task;

pub use config::{RunnerConfig, ServerTaskConfig};
pub use error::{ConfigError, ExitedError, ServerError, is_exited_error};
pub use runner::Runner;
pub use server::{ErrorHandler, Server, ServerTask};
pub use system_exit::{system_exit, trigger_system_exit, wait_system_exit};
pub use task::{FnTask, Task, TaskFn};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ExitedError, FnTask, Runner, RunnerConfig, Server, ServerError, ServerTask,
        ServerTaskConfig, Task, system_exit,
    };
}

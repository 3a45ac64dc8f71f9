//! teardown-logging - Tracing setup for teardown applications
//!
//! This crate provides:
//! - [`init_logging`] installing a `fmt` subscriber behind a reloadable level
//! - [`init_logging_from_env`] honouring `RUST_LOG`
//! - [`ReloadHandle`] for changing the level at runtime
//! - [`LogLevel`] shared level type

mod init;
mod level;
mod reload;

pub use init::{init_logging, init_logging_from_env};
pub use level::{LogLevel, ParseLogLevelError};
pub use reload::{ReloadError, ReloadHandle};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging, init_logging_from_env};
}

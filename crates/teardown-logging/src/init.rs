//! Global subscriber installation

use crate::level::LogLevel;
use crate::reload::ReloadHandle;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload};

const DEFAULT_DIRECTIVE: &str = "info";

/// Install a `fmt` subscriber filtered at `level`
///
/// The level can be changed later through [`ReloadHandle::global`]. If a
/// subscriber installed by this function is already in place its level is
/// updated instead. Returns `true` if this call installed the subscriber.
pub fn init_logging(level: LogLevel) -> bool {
    let global = ReloadHandle::global();
    if global.is_initialized() {
        if let Err(e) = global.reload_level(level) {
            tracing::warn!(error = %e, "failed to update log level");
        }
        return false;
    }

    let (filter, handle) = reload::Layer::new(LevelFilter::from(level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true));

    // Ignore the error if another subscriber is already set
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }
    global.set_handle(handle);
    true
}

/// Install a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`
///
/// Returns `true` if this call installed the subscriber.
pub fn init_logging_from_env() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true));

    tracing::subscriber::set_global_default(subscriber).is_ok()
}

#[cfg(test)]
#[path = "init/init_tests.rs"]
mod init_tests;

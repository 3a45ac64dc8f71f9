//! Error types for the runner and its collaborators

use teardown_core::BoxError;
use thiserror::Error;

/// Returned when a task is handed to a runner that already exited
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("runner: exited")]
pub struct ExitedError;

/// Check whether an error is an [`ExitedError`]
pub fn is_exited_error(err: &(dyn std::error::Error + 'static)) -> bool {
    err.is::<ExitedError>()
}

/// Outcome of a [`Server`](crate::Server) that stopped serving
#[derive(Error, Debug)]
pub enum ServerError {
    /// The server was stopped on request
    #[error("server closed")]
    Closed,

    /// The server failed while starting or serving
    #[error("server failed: {0}")]
    Failed(#[source] BoxError),
}

impl ServerError {
    /// Wrap any error as a serving failure
    pub fn failed<E: Into<BoxError>>(err: E) -> Self {
        ServerError::Failed(err.into())
    }

    /// Check if this is the stopped-on-request outcome
    pub fn is_closed(&self) -> bool {
        matches!(self, ServerError::Closed)
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Malformed configuration document
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

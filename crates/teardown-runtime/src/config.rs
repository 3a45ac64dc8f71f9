//! Runner and server task configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Name used in log events
    #[serde(default = "default_runner_name")]
    pub name: String,

    /// Whether `Runner::wait` listens for process termination signals
    ///
    /// Ignored when an exit source was injected with `Runner::with_exit_source`.
    #[serde(default = "default_handle_os_signals")]
    pub handle_os_signals: bool,
}

fn default_runner_name() -> String {
    "runner".to_string()
}

fn default_handle_os_signals() -> bool {
    true
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            name: default_runner_name(),
            handle_os_signals: default_handle_os_signals(),
        }
    }
}

impl RunnerConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Set the runner name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enable or disable the process termination listener
    pub fn with_os_signals(mut self, enabled: bool) -> Self {
        self.handle_os_signals = enabled;
        self
    }
}

/// Server task configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTaskConfig {
    /// Name of the serving thread and of log events
    #[serde(default = "default_server_name")]
    pub name: String,

    /// How long `execute` watches for an early failure, in milliseconds
    #[serde(default = "default_start_grace")]
    pub start_grace_ms: u64,
}

fn default_server_name() -> String {
    "server".to_string()
}

fn default_start_grace() -> u64 {
    20
}

impl Default for ServerTaskConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            start_grace_ms: default_start_grace(),
        }
    }
}

impl ServerTaskConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Set the server name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the start grace period
    pub fn with_start_grace(mut self, grace: Duration) -> Self {
        self.start_grace_ms = u64::try_from(grace.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Start grace period as a duration
    pub fn start_grace(&self) -> Duration {
        Duration::from_millis(self.start_grace_ms)
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;

//! Adapter that runs a blocking server as a [`Task`]

use crate::config::ServerTaskConfig;
use crate::error::ServerError;
use crate::task::Task;
use parking_lot::Mutex;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use teardown_core::{BoxError, PanicError, Signal, TaskResult};

/// A server with a blocking serve loop and a stop operation
///
/// `serve` must block until the server fails or is stopped and return
/// [`ServerError::Closed`] in the latter case. `stop` must be safe to call
/// more than once.
pub trait Server: Send + Sync + 'static {
    /// Serve until stopped or failed
    fn serve(&self) -> Result<(), ServerError>;

    /// Ask a running `serve` call to return
    fn stop(&self) -> TaskResult;
}

/// Callback receiving failures that happen after the server started
pub type ErrorHandler = Arc<dyn Fn(BoxError) + Send + Sync + 'static>;

enum Phase {
    Starting,
    Running,
    Finished(Result<(), ServerError>),
}

struct Outcome {
    phase: Mutex<Phase>,
    finished: Signal,
}

/// Runs a [`Server`] on its own thread for the lifetime of a task
///
/// `execute` returns once the server survived the start grace period, or
/// with the server's error if it failed within it. Failures after that are
/// passed to the error handler, or logged when none is set.
pub struct ServerTask<S: Server> {
    server: Arc<S>,
    config: ServerTaskConfig,
    on_error: Option<ErrorHandler>,
    serving: Option<JoinHandle<()>>,
}

impl<S: Server> ServerTask<S> {
    /// Wrap a server with the default configuration
    pub fn new(server: Arc<S>) -> Self {
        Self {
            server,
            config: ServerTaskConfig::default(),
            on_error: None,
            serving: None,
        }
    }

    /// Wrap a server that may be absent
    ///
    /// Prefer [`new`](Self::new), which cannot be handed a missing server.
    ///
    /// # Panics
    /// Panics if `server` is `None`.
    #[doc(hidden)]
    pub fn from_option(server: Option<Arc<S>>) -> Self {
        match server {
            Some(server) => Self::new(server),
            None => panic!("ServerTask::from_option(): server is required"),
        }
    }

    /// Set the task configuration
    pub fn with_config(mut self, config: ServerTaskConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the handler for failures after start
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(BoxError) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(handler));
        self
    }

    /// The wrapped server
    pub fn server(&self) -> &Arc<S> {
        &self.server
    }

    /// Check whether the serving thread is running or not yet joined
    pub fn is_serving(&self) -> bool {
        self.serving.is_some()
    }
}

fn report(name: &str, handler: Option<&ErrorHandler>, result: Result<(), ServerError>) {
    match result {
        Ok(()) | Err(ServerError::Closed) => {
            tracing::debug!(server = %name, "server closed");
        }
        Err(ServerError::Failed(e)) => match handler {
            Some(handler) => handler(e),
            None => tracing::error!(server = %name, error = %e, "server failed"),
        },
    }
}

impl<S: Server> Task for ServerTask<S> {
    fn execute(&mut self) -> TaskResult {
        let outcome = Arc::new(Outcome {
            phase: Mutex::new(Phase::Starting),
            finished: Signal::new(),
        });

        let server = Arc::clone(&self.server);
        let remote = Arc::clone(&outcome);
        let handler = self.on_error.clone();
        let name = self.config.name.clone();
        let handle = thread::Builder::new()
            .name(self.config.name.clone())
            .spawn(move || {
                let result = panic::catch_unwind(AssertUnwindSafe(|| server.serve()))
                    .unwrap_or_else(|payload| {
                        Err(ServerError::Failed(Box::new(PanicError::new(payload))))
                    });
                let mut phase = remote.phase.lock();
                if matches!(*phase, Phase::Starting) {
                    *phase = Phase::Finished(result);
                    remote.finished.fire();
                } else {
                    drop(phase);
                    report(&name, handler.as_ref(), result);
                }
            })?;
        self.serving = Some(handle);

        outcome.finished.wait_timeout(self.config.start_grace());

        let mut phase = outcome.phase.lock();
        match std::mem::replace(&mut *phase, Phase::Running) {
            Phase::Finished(Ok(())) | Phase::Finished(Err(ServerError::Closed)) => {
                tracing::debug!(server = %self.config.name, "server closed during start");
                Ok(())
            }
            Phase::Finished(Err(ServerError::Failed(e))) => {
                tracing::warn!(server = %self.config.name, error = %e, "server failed to start");
                Err(e)
            }
            Phase::Starting | Phase::Running => {
                tracing::debug!(server = %self.config.name, "server running");
                Ok(())
            }
        }
    }

    fn shutdown(&mut self) -> TaskResult {
        self.server.stop()?;
        if let Some(handle) = self.serving.take()
            && let Err(payload) = handle.join()
        {
            return Err(Box::new(PanicError::new(payload)));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "server/server_tests.rs"]
mod server_tests;

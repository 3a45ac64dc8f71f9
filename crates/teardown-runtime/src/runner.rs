//! Task runner with reverse-order shutdown

use crate::config::RunnerConfig;
use crate::error::ExitedError;
use crate::system_exit::system_exit;
use crate::task::Task;
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use teardown_core::{
    AggregateError, CloseableWaiter, PanicError, TaskResult, Wait, Waiter, must_call, safe_call,
};

struct RunnerInner {
    config: RunnerConfig,
    tasks: Mutex<Vec<Box<dyn Task>>>,
    exit: CloseableWaiter,
    exit_source: Option<Waiter>,
}

/// Runs tasks and shuts them down in reverse order
///
/// State transitions:
/// ```text
/// Running ──exit()──▶ Exited
/// ```
///
/// Tasks are executed as they are handed over and tracked only if execution
/// succeeded. [`exit`](Self::exit) shuts the tracked tasks down newest first,
/// one at a time, and keeps going when one of them fails. `run` and `exit`
/// share one lock, so an `exit` issued while a task is executing waits for
/// that `execute` call to return.
///
/// Cloning a runner yields another handle to the same runner.
#[derive(Clone)]
pub struct Runner {
    inner: Arc<RunnerInner>,
}

impl Runner {
    /// Create a runner with default configuration
    pub fn new() -> Self {
        Self::from_parts(RunnerConfig::default(), None)
    }

    /// Create a runner with the given configuration
    pub fn with_config(config: RunnerConfig) -> Self {
        Self::from_parts(config, None)
    }

    /// Create a runner whose [`wait`](Self::wait) listens to `source`
    /// instead of the process termination signals
    pub fn with_exit_source(source: Waiter) -> Self {
        Self::from_parts(RunnerConfig::default(), Some(source))
    }

    /// Create a runner from a configuration and an optional exit source
    pub fn from_parts(config: RunnerConfig, exit_source: Option<Waiter>) -> Self {
        Self {
            inner: Arc::new(RunnerInner {
                config,
                tasks: Mutex::new(Vec::new()),
                exit: CloseableWaiter::new(),
                exit_source,
            }),
        }
    }

    /// Get the runner configuration
    pub fn config(&self) -> &RunnerConfig {
        &self.inner.config
    }

    /// Runner name from the configuration
    pub fn name(&self) -> &str {
        &self.inner.config.name
    }

    /// Execute `task` and track it for shutdown
    ///
    /// Fails with [`ExitedError`] once the runner exited. A task whose
    /// `execute` fails or panics is not tracked and the failure is returned.
    pub fn run<T: Task + 'static>(&self, task: T) -> TaskResult {
        let mut tasks = self.inner.tasks.lock();
        if self.exited() {
            return Err(Box::new(ExitedError));
        }

        let mut task = task;
        if let Err(e) = safe_call(|| task.execute()) {
            tracing::warn!(runner = %self.name(), error = %e, "task failed to execute");
            return Err(e);
        }
        tasks.push(Box::new(task));
        tracing::debug!(runner = %self.name(), task = tasks.len() - 1, "task running");
        Ok(())
    }

    /// Like [`run`](Self::run), but panics on failure
    ///
    /// A captured task panic is re-raised with its original payload.
    pub fn must_run<T: Task + 'static>(&self, task: T) -> &Self {
        must_call(|| self.run(task));
        self
    }

    /// Shut down every tracked task, newest first, and mark the runner exited
    ///
    /// Every tracked task gets exactly one `shutdown` call even if earlier
    /// ones fail. Returns `Ok(())` if none failed, the error if one failed,
    /// and an [`AggregateError`] in shutdown order otherwise. Calling this
    /// again is a no-op returning `Ok(())`.
    pub fn exit(&self) -> TaskResult {
        let mut tasks = self.inner.tasks.lock();
        let tracked = std::mem::take(&mut *tasks);
        let mut errors = AggregateError::new();

        if !tracked.is_empty() {
            tracing::info!(runner = %self.name(), tasks = tracked.len(), "shutting down tasks");
            for (index, mut task) in tracked.into_iter().enumerate().rev() {
                let result = safe_call(|| task.shutdown());
                if let Err(e) = &result {
                    tracing::warn!(runner = %self.name(), task = index, error = %e, "task shutdown failed");
                }
                errors.add_result(result);
            }
        }

        if self.inner.exit.close() {
            tracing::info!(runner = %self.name(), failures = errors.len(), "runner exited");
        }
        drop(tasks);
        errors.into_result()
    }

    /// Check whether the runner exited (non-blocking)
    pub fn exited(&self) -> bool {
        self.inner.exit.is_signaled()
    }

    /// Waiter that fires once the runner exited
    pub fn exit_waiter(&self) -> Waiter {
        self.inner.exit.waiter()
    }

    /// Number of tracked tasks
    pub fn len(&self) -> usize {
        self.inner.tasks.lock().len()
    }

    /// Check if no task is tracked
    pub fn is_empty(&self) -> bool {
        self.inner.tasks.lock().is_empty()
    }

    /// Wait until the process is asked to exit or [`exit`](Self::exit) is called
    ///
    /// Listens to the injected exit source if there is one, otherwise to the
    /// process termination signals (unless disabled in the configuration).
    /// Task shutdowns run on Tokio's blocking pool.
    pub async fn wait(&self) -> TaskResult {
        match self.default_exit_source() {
            Some(source) => self.wait_by(source.notified()).await,
            None => {
                self.inner.exit.notified().await;
                Ok(())
            }
        }
    }

    /// Wait until `cancel` completes or [`exit`](Self::exit) is called
    ///
    /// If `cancel` completes first the runner exits and the result of
    /// [`exit`](Self::exit) is returned. Task shutdowns then run on Tokio's
    /// blocking pool, so they may wait on async tasks of the calling runtime.
    pub async fn wait_by<F>(&self, cancel: F) -> TaskResult
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            _ = cancel => self.exit_blocking().await,
            _ = self.inner.exit.notified() => Ok(()),
        }
    }

    async fn exit_blocking(&self) -> TaskResult {
        let runner = self.clone();
        match tokio::task::spawn_blocking(move || runner.exit()).await {
            Ok(result) => result,
            Err(e) => match e.try_into_panic() {
                Ok(payload) => Err(Box::new(PanicError::new(payload))),
                Err(e) => Err(Box::new(e)),
            },
        }
    }

    fn default_exit_source(&self) -> Option<Waiter> {
        if let Some(source) = &self.inner.exit_source {
            return Some(source.clone());
        }
        self.inner.config.handle_os_signals.then(system_exit)
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("name", &self.name())
            .field("tasks", &self.len())
            .field("exited", &self.exited())
            .finish()
    }
}

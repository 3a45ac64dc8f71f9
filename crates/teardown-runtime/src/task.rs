//! Task trait and closure-backed tasks

use teardown_core::TaskResult;

/// A unit with a start operation and a matching stop operation
///
/// A [`Runner`](crate::Runner) calls `execute` once when the task is handed
/// over. Only if that succeeds does the runner keep the task, and it then
/// calls `shutdown` exactly once when it exits.
pub trait Task: Send {
    /// Start the task
    ///
    /// Long-running work should be moved to its own thread or async task;
    /// the runner is locked while this runs.
    fn execute(&mut self) -> TaskResult;

    /// Stop the task
    fn shutdown(&mut self) -> TaskResult;
}

impl<T: Task + ?Sized> Task for Box<T> {
    fn execute(&mut self) -> TaskResult {
        (**self).execute()
    }

    fn shutdown(&mut self) -> TaskResult {
        (**self).shutdown()
    }
}

/// Boxed closure used by [`FnTask`]
pub type TaskFn = Box<dyn FnMut() -> TaskResult + Send + 'static>;

/// A task built from plain functions
///
/// Missing functions are no-ops that succeed.
#[derive(Default)]
pub struct FnTask {
    execute: Option<TaskFn>,
    shutdown: Option<TaskFn>,
}

impl FnTask {
    /// Create a task that does nothing on either side
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a task from an optional execute function and shutdown functions
    ///
    /// # Panics
    /// Panics if more than one shutdown function is supplied.
    pub fn from_fns(execute: Option<TaskFn>, shutdowns: Vec<TaskFn>) -> Self {
        assert!(
            shutdowns.len() <= 1,
            "FnTask::from_fns(): too many shutdown functions"
        );
        Self {
            execute,
            shutdown: shutdowns.into_iter().next(),
        }
    }

    /// Set the execute function
    pub fn on_execute<F>(mut self, f: F) -> Self
    where
        F: FnMut() -> TaskResult + Send + 'static,
    {
        self.execute = Some(Box::new(f));
        self
    }

    /// Set the shutdown function
    ///
    /// # Panics
    /// Panics if a shutdown function was already set.
    pub fn on_shutdown<F>(mut self, f: F) -> Self
    where
        F: FnMut() -> TaskResult + Send + 'static,
    {
        assert!(
            self.shutdown.is_none(),
            "FnTask::on_shutdown(): too many shutdown functions"
        );
        self.shutdown = Some(Box::new(f));
        self
    }
}

impl Task for FnTask {
    fn execute(&mut self) -> TaskResult {
        match self.execute.as_mut() {
            Some(f) => f(),
            None => Ok(()),
        }
    }

    fn shutdown(&mut self) -> TaskResult {
        match self.shutdown.as_mut() {
            Some(f) => f(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for FnTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTask")
            .field("execute", &self.execute.is_some())
            .field("shutdown", &self.shutdown.is_some())
            .finish()
    }
}

//! Spawn-and-join helper for worker threads

use parking_lot::Mutex;
use std::panic;
use std::thread::{self, JoinHandle};

/// Runs closures on worker threads and waits for all of them
///
/// ```ignore
/// let wg = WaitGroup::new();
/// wg.go(|| { /* do something */ });
/// wg.multi_go(5, || { /* do something */ });
/// wg.wait();
/// ```
#[derive(Debug, Default)]
pub struct WaitGroup {
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl WaitGroup {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` on a new thread
    pub fn go<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = thread::spawn(f);
        self.handles.lock().push(handle);
    }

    /// Run `f` on `n` new threads
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn multi_go<F>(&self, n: usize, f: F)
    where
        F: Fn() + Clone + Send + 'static,
    {
        assert!(n > 0, "WaitGroup::multi_go(): n must be a positive integer");
        let mut handles = self.handles.lock();
        for _ in 0..n {
            handles.push(thread::spawn(f.clone()));
        }
    }

    /// Number of threads not yet joined
    pub fn len(&self) -> usize {
        self.handles.lock().len()
    }

    /// Check if no thread is pending
    pub fn is_empty(&self) -> bool {
        self.handles.lock().is_empty()
    }

    /// Join every thread spawned so far
    ///
    /// If a worker panicked, the first payload is re-raised once all threads
    /// were joined.
    pub fn wait(&self) {
        let handles = std::mem::take(&mut *self.handles.lock());
        let mut first_panic = None;
        for handle in handles {
            if let Err(payload) = handle.join() {
                first_panic.get_or_insert(payload);
            }
        }
        if let Some(payload) = first_panic {
            panic::resume_unwind(payload);
        }
    }
}

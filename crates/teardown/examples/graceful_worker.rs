//! A worker pool that drains on Ctrl+C
//!
//! Run with `cargo run -p teardown --example graceful_worker` and press Ctrl+C.

use std::sync::Arc;
use std::time::Duration;
use teardown::prelude::*;

struct Pool {
    size: usize,
    broadcaster: Arc<Broadcaster>,
    workers: WaitGroup,
}

impl Task for Pool {
    fn execute(&mut self) -> TaskResult {
        for id in 0..self.size {
            let waiter = self.broadcaster.new_waiter();
            self.workers.go(move || {
                while !waiter.is_signaled() {
                    tracing::info!(worker = id, "working");
                    std::thread::sleep(Duration::from_millis(500));
                }
                tracing::info!(worker = id, "draining");
                waiter.done();
            });
        }
        Ok(())
    }

    fn shutdown(&mut self) -> TaskResult {
        self.broadcaster.close();
        self.workers.wait();
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_logging(LogLevel::Info);

    let runner = Runner::new();
    runner.run(Pool {
        size: 3,
        broadcaster: Arc::new(Broadcaster::new()),
        workers: WaitGroup::new(),
    })?;

    tracing::info!("press Ctrl+C to stop");
    runner.wait().await
}

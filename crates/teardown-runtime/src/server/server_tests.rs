#![allow(non_snake_case)]

use super::*;
use std::time::Duration;
use teardown_core::{CloseableWaiter, Wait};

/// Serves until stopped, optionally failing at start or after a delay
struct FakeServer {
    stopped: CloseableWaiter,
    fail_at_start: Option<&'static str>,
    fail_after: Option<(Duration, &'static str)>,
    stop_calls: Mutex<usize>,
}

impl FakeServer {
    fn new() -> Self {
        Self {
            stopped: CloseableWaiter::new(),
            fail_at_start: None,
            fail_after: None,
            stop_calls: Mutex::new(0),
        }
    }
}

impl Server for FakeServer {
    fn serve(&self) -> Result<(), ServerError> {
        if let Some(message) = self.fail_at_start {
            return Err(ServerError::failed(message));
        }
        if let Some((delay, message)) = self.fail_after {
            std::thread::sleep(delay);
            return Err(ServerError::failed(message));
        }
        self.stopped.wait();
        Err(ServerError::Closed)
    }

    fn stop(&self) -> TaskResult {
        *self.stop_calls.lock() += 1;
        self.stopped.close();
        Ok(())
    }
}

fn fast_config() -> ServerTaskConfig {
    ServerTaskConfig::new()
        .with_name("fake")
        .with_start_grace(Duration::from_millis(10))
}

#[test]
fn ServerTask___execute_then_shutdown___stops_cleanly() {
    let server = Arc::new(FakeServer::new());
    let mut task = ServerTask::new(server.clone()).with_config(fast_config());

    task.execute().unwrap();
    assert!(task.is_serving());
    assert!(!server.stopped.is_signaled());

    task.shutdown().unwrap();
    assert!(!task.is_serving());
    assert!(server.stopped.is_signaled());
    assert_eq!(*server.stop_calls.lock(), 1);
}

#[test]
fn ServerTask___failure_during_grace___returned_from_execute() {
    let mut server = FakeServer::new();
    server.fail_at_start = Some("address in use");
    let mut task = ServerTask::new(Arc::new(server)).with_config(fast_config());

    let err = task.execute().unwrap_err();

    assert_eq!(err.to_string(), "address in use");
}

#[test]
fn ServerTask___failure_after_grace___goes_to_handler() {
    let mut server = FakeServer::new();
    server.fail_after = Some((Duration::from_millis(40), "connection reset"));
    let reported = Arc::new(Mutex::new(Vec::new()));
    let sink = reported.clone();
    let mut task = ServerTask::new(Arc::new(server))
        .with_config(fast_config())
        .on_error(move |e| sink.lock().push(e.to_string()));

    task.execute().unwrap();
    task.shutdown().unwrap();

    assert_eq!(*reported.lock(), vec!["connection reset"]);
}

#[test]
fn ServerTask___panicking_serve___reported_as_error() {
    struct Crashing;

    impl Server for Crashing {
        fn serve(&self) -> Result<(), ServerError> {
            panic!("serve crashed");
        }

        fn stop(&self) -> TaskResult {
            Ok(())
        }
    }

    let mut task = ServerTask::new(Arc::new(Crashing)).with_config(fast_config());

    let err = task.execute().unwrap_err();

    assert!(teardown_core::is_panic_error(&*err));
    assert_eq!(err.to_string(), "serve crashed");
}

#[test]
fn ServerTask___closed_during_grace___is_not_an_error() {
    let server = Arc::new(FakeServer::new());
    server.stop().unwrap();
    let mut task = ServerTask::new(server).with_config(fast_config());

    assert!(task.execute().is_ok());
    assert!(task.shutdown().is_ok());
}

#[test]
#[should_panic(expected = "server is required")]
fn ServerTask___from_none___panics() {
    let _ = ServerTask::<FakeServer>::from_option(None);
}

#[test]
fn ServerTask___from_some___wraps_server() {
    let server = Arc::new(FakeServer::new());

    let task = ServerTask::from_option(Some(server.clone()));

    assert!(Arc::ptr_eq(task.server(), &server));
    assert!(!task.is_serving());
}

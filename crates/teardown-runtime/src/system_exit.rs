//! Process-wide exit signal
//!
//! [`system_exit`] returns a waiter that fires at most once per process,
//! either when the process receives a termination signal or when
//! [`trigger_system_exit`] is called.
//!
//! ## Unix
//! SIGINT, SIGTERM and SIGQUIT are handled, with [`tokio::signal::ctrl_c`]
//! awaited as a fallback.
//!
//! ## Windows
//! On non-Unix platforms only [`tokio::signal::ctrl_c`] is awaited.
//!
//! The listener runs on a dedicated thread with its own single-threaded
//! Tokio runtime. It is started on first use and never more than once.

use once_cell::sync::{Lazy, OnceCell};
use std::thread;
use teardown_core::{CloseableWaiter, Wait, Waiter};

static SYSTEM_EXIT: Lazy<CloseableWaiter> = Lazy::new(CloseableWaiter::new);
static LISTENER: OnceCell<()> = OnceCell::new();

/// The process-wide exit waiter
///
/// The first call starts the termination signal listener.
pub fn system_exit() -> Waiter {
    LISTENER.get_or_init(start_listener);
    SYSTEM_EXIT.waiter()
}

/// Fire the process-wide exit waiter without an OS signal
///
/// Returns `true` if this call fired it.
pub fn trigger_system_exit() -> bool {
    let fired = SYSTEM_EXIT.close();
    if fired {
        tracing::info!("system exit triggered locally");
    }
    fired
}

/// Block the calling thread until the process is asked to exit
pub fn wait_system_exit() {
    system_exit().wait();
}

fn start_listener() {
    let spawned = thread::Builder::new()
        .name("teardown-signals".to_string())
        .spawn(listen);
    if let Err(e) = spawned {
        tracing::error!("Failed to spawn signal listener: {}", e);
    }
}

fn listen() {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create signal runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async {
        tokio::select! {
            result = wait_for_shutdown_signal() => match result {
                Ok(()) => {
                    tracing::info!("termination signal received");
                    SYSTEM_EXIT.close();
                }
                Err(e) => tracing::error!("Failed to listen for termination signals: {}", e),
            },
            _ = SYSTEM_EXIT.notified() => {}
        }
    });
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigquit = signal(SignalKind::quit())?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {},
        _ = sigint.recv()  => {},
        _ = sigterm.recv() => {},
        _ = sigquit.recv() => {},
    }
    Ok(())
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

#[cfg(test)]
#[path = "system_exit/system_exit_tests.rs"]
mod system_exit_tests;

//! Panic-safe calls
//!
//! [`safe_call`] runs a fallible operation and turns a panic into a
//! [`PanicError`] carrying the original payload. [`must_call`] goes the other
//! way and escalates any returned error into a panic, re-raising a captured
//! payload as is instead of wrapping it a second time.

use crate::error::{BoxError, TaskResult};
use parking_lot::Mutex;
use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Payload type produced by `catch_unwind`
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// A panic captured by [`safe_call`]
///
/// Application code should not construct this error; it exists so that
/// callers can tell a crashed operation apart from one that failed normally.
#[derive(thiserror::Error)]
#[error("{message}")]
pub struct PanicError {
    message: String,
    payload: Mutex<Option<PanicPayload>>,
}

impl PanicError {
    /// Capture a panic payload
    pub fn new(payload: PanicPayload) -> Self {
        Self {
            message: payload_message(payload.as_ref()),
            payload: Mutex::new(Some(payload)),
        }
    }

    /// Message resolved from the payload
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Take back the original payload, e.g. to re-raise it
    pub fn into_payload(self) -> PanicPayload {
        match self.payload.into_inner() {
            Some(payload) => payload,
            None => Box::new(self.message),
        }
    }
}

impl fmt::Debug for PanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanicError")
            .field("message", &self.message)
            .finish()
    }
}

/// Resolve a panic payload to a human-readable message
fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        return (*s).to_string();
    }
    if let Some(s) = payload.downcast_ref::<String>() {
        return s.clone();
    }
    if let Some(err) = payload.downcast_ref::<BoxError>() {
        return err.to_string();
    }
    if let Some(err) = payload.downcast_ref::<Arc<dyn Error + Send + Sync>>() {
        return err.to_string();
    }
    if let Some(value) = payload.downcast_ref::<Box<dyn fmt::Display + Send + Sync>>() {
        return value.to_string();
    }

    macro_rules! generic {
        ($($ty:ty),*) => {
            $(
                if let Some(v) = payload.downcast_ref::<$ty>() {
                    return format!("panic: {}", v);
                }
            )*
        };
    }
    generic!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);

    "panic: <unknown payload>".to_string()
}

/// Check whether an error is a captured panic
pub fn is_panic_error(err: &(dyn Error + 'static)) -> bool {
    err.is::<PanicError>()
}

/// Check whether a result failed with a captured panic; `Ok` is never one
pub fn is_panic_result(result: &TaskResult) -> bool {
    match result {
        Ok(()) => false,
        Err(err) => err.is::<PanicError>(),
    }
}

/// Run `f`, converting a panic into a [`PanicError`]
///
/// Errors returned by `f` are passed through unchanged.
pub fn safe_call<F>(f: F) -> TaskResult
where
    F: FnOnce() -> TaskResult,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => {
            let err = PanicError::new(payload);
            tracing::error!(message = %err.message(), "panic captured");
            Err(Box::new(err))
        }
    }
}

/// Run `f` and panic if it returns an error
///
/// A [`PanicError`] re-raises its original payload; any other error becomes
/// the payload of a new panic.
pub fn must_call<F>(f: F)
where
    F: FnOnce() -> TaskResult,
{
    if let Err(err) = f() {
        match err.downcast::<PanicError>() {
            Ok(captured) => panic::resume_unwind(captured.into_payload()),
            Err(err) => panic::panic_any(err),
        }
    }
}

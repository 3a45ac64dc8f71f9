//! Error types shared by every teardown crate

use std::error::Error;
use std::fmt;

/// Boxed error returned by tasks and teardown operations
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Result type alias for task and teardown operations
pub type TaskResult = Result<(), BoxError>;

/// Message rendered by an [`AggregateError`] that holds no errors
pub const EMPTY_AGGREGATE_MESSAGE: &str = "<empty errors>";

/// An ordered, flattening collection of errors
///
/// Errors keep the order they were added in. Adding another
/// `AggregateError` splices its contents in place instead of nesting it.
#[derive(Debug, Default)]
pub struct AggregateError {
    errors: Vec<BoxError>,
}

impl AggregateError {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error, flattening nested aggregates
    pub fn add<E: Into<BoxError>>(&mut self, err: E) {
        let err: BoxError = err.into();
        match err.downcast::<AggregateError>() {
            Ok(nested) => self.errors.extend(nested.errors),
            Err(err) => self.errors.push(err),
        }
    }

    /// Add the error of a failed result; `Ok` is ignored
    pub fn add_result(&mut self, result: Result<(), BoxError>) {
        if let Err(err) = result {
            self.add(err);
        }
    }

    /// First error in insertion order
    pub fn first(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.errors.first().map(|e| &**e)
    }

    /// Last error in insertion order
    pub fn last(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.errors.last().map(|e| &**e)
    }

    /// Number of collected errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if no error was collected
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All errors in insertion order
    pub fn all(&self) -> &[BoxError] {
        &self.errors
    }

    /// Consume the aggregate, returning the collected errors
    pub fn into_vec(self) -> Vec<BoxError> {
        self.errors
    }

    /// Collapse into a single result
    ///
    /// No errors gives `Ok(())`, one error is returned as is, and two or
    /// more are returned as the aggregate itself.
    pub fn into_result(mut self) -> Result<(), BoxError> {
        match self.errors.len() {
            0 => Ok(()),
            1 => Err(self.errors.remove(0)),
            _ => Err(Box::new(self)),
        }
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => f.write_str(EMPTY_AGGREGATE_MESSAGE),
            [only] => write!(f, "{}", only),
            [first, rest @ ..] => {
                write!(f, "{}", first)?;
                for err in rest {
                    write!(f, "; {}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl Error for AggregateError {}

impl From<Vec<BoxError>> for AggregateError {
    fn from(errors: Vec<BoxError>) -> Self {
        let mut aggregate = Self::new();
        for err in errors {
            aggregate.add(err);
        }
        aggregate
    }
}

//! Failure payload carried by the failure branch of an outcome.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error as StdError;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::{fmt, io};

/// Descriptive failure payload: a message, an optional underlying cause, and
/// an optional attached domain value.
///
/// `Error` (with `V = ()`) is the failure type of the degenerate
/// `OperationResult<T>`. Attach a value with [`Error::with_value`] when a
/// failure needs to transport context alongside its message. A serialized
/// error without a `value` field decodes with `V::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Error<V = ()> {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cause: Option<ErrorCause>,
    #[serde(default)]
    value: V,
}

impl Error {
    /// Create an error with a message and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
            value: (),
        }
    }
}

impl<V> Error<V> {
    /// Attach an underlying cause.
    #[must_use]
    pub fn with_cause<E>(self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.with_shared_cause(ErrorCause::new(cause))
    }

    /// Attach an already-shared cause.
    #[must_use]
    pub fn with_shared_cause(self, cause: ErrorCause) -> Self {
        Self {
            cause: Some(cause),
            ..self
        }
    }

    /// Replace the attached value.
    pub fn with_value<U>(self, value: U) -> Error<U> {
        Error {
            message: self.message,
            cause: self.cause,
            value,
        }
    }

    /// Transform the attached value, keeping message and cause.
    pub fn map_value<U, F>(self, op: F) -> Error<U>
    where
        F: FnOnce(V) -> U,
    {
        Error {
            message: self.message,
            cause: self.cause,
            value: op(self.value),
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the underlying cause, if any.
    #[must_use]
    pub const fn cause(&self) -> Option<&ErrorCause> {
        self.cause.as_ref()
    }

    /// Borrow the attached value.
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Consume the error and return the attached value.
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V> fmt::Display for Error<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(formatter, "{}: {cause}", self.message),
            None => formatter.write_str(&self.message),
        }
    }
}

impl<V: fmt::Debug> StdError for Error<V> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(ErrorCause::as_dyn)
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Message given to errors converted from [`io::Error`]; the I/O error itself
/// becomes the cause.
pub const IO_ERROR_MESSAGE: &str = "I/O error";

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::new(IO_ERROR_MESSAGE).with_cause(error)
    }
}

/// Shared handle to the underlying error that caused a failure.
///
/// Two causes are equal only when they are the same shared instance; the
/// handle never inspects the wrapped error for equality.
#[derive(Clone)]
pub struct ErrorCause(Arc<dyn StdError + Send + Sync + 'static>);

impl ErrorCause {
    /// Wrap an error value.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Create a cause that only carries a message.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(CauseMessage(message.into()))
    }

    /// Borrow the wrapped error.
    #[must_use]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }

    /// Attempt to downcast the wrapped error.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    fn as_dyn(&self) -> &(dyn StdError + 'static) {
        &*self.0
    }
}

impl PartialEq for ErrorCause {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ErrorCause {}

impl Hash for ErrorCause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).cast::<u8>().addr().hash(state);
    }
}

impl fmt::Debug for ErrorCause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, formatter)
    }
}

impl fmt::Display for ErrorCause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, formatter)
    }
}

impl Serialize for ErrorCause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ErrorCause {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_message)
    }
}

/// Message-only cause, produced when a cause is rebuilt from its text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct CauseMessage(String);

impl CauseMessage {
    /// Returns the cause text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

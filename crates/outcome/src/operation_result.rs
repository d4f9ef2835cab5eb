//! The three-state outcome value and its accessors.

use crate::discriminant::Discriminant;
use serde::{Deserialize, Serialize};
use tristate_shared::{Cancelled, Error};

/// Outcome of an operation that succeeded, failed, or was cancelled.
///
/// Exactly one payload is present and the variant is the discriminant. The
/// value is immutable: every combinator consumes it and returns a new one.
///
/// `OperationResult<T>` is the common specialization whose failure payload is
/// [`Error`] and whose cancellation payload is [`Cancelled`].
///
/// # Example
///
/// ```
/// use tristate_outcome::OperationResult;
///
/// let doubled = OperationResult::<i32>::success(5).select(|value| value * 2);
/// assert_eq!(doubled, OperationResult::success(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
#[must_use = "an operation result may be a failure or a cancellation, which should be handled"]
pub enum OperationResult<T, E = Error, C = Cancelled> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed.
    Failure(E),
    /// The operation was cancelled.
    Cancelled(C),
}

impl<T, E, C> OperationResult<T, E, C> {
    /// Build a success result.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Build a failure result.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Build a cancelled result.
    pub const fn cancelled(cancelled: C) -> Self {
        Self::Cancelled(cancelled)
    }

    /// Returns the tag of the populated branch.
    #[must_use]
    pub const fn discriminant(&self) -> Discriminant {
        match self {
            Self::Success(_) => Discriminant::Success,
            Self::Failure(_) => Discriminant::Failure,
            Self::Cancelled(_) => Discriminant::Cancelled,
        }
    }

    /// Returns true for a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true for a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns true for a cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }

    /// Borrow the success payload, if present.
    #[must_use]
    pub const fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) | Self::Cancelled(_) => None,
        }
    }

    /// Borrow the failure payload, if present.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) | Self::Cancelled(_) => None,
        }
    }

    /// Borrow the cancellation payload, if present.
    #[must_use]
    pub const fn as_cancelled(&self) -> Option<&C> {
        match self {
            Self::Cancelled(cancelled) => Some(cancelled),
            Self::Success(_) | Self::Failure(_) => None,
        }
    }

    /// Take the success payload, if present.
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) | Self::Cancelled(_) => None,
        }
    }

    /// Take the failure payload, if present.
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) | Self::Cancelled(_) => None,
        }
    }

    /// Take the cancellation payload, if present.
    pub fn into_cancelled(self) -> Option<C> {
        match self {
            Self::Cancelled(cancelled) => Some(cancelled),
            Self::Success(_) | Self::Failure(_) => None,
        }
    }

    /// Returns the success payload, or `default` for the other branches.
    pub fn success_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) | Self::Cancelled(_) => default,
        }
    }

    /// Returns the success payload, or a computed fallback for the other branches.
    pub fn success_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) | Self::Cancelled(_) => fallback(),
        }
    }

    /// Returns the success payload, or `T::default()` for the other branches.
    pub fn success_or_default(self) -> T
    where
        T: Default,
    {
        self.success_or_else(T::default)
    }

    /// Borrow every payload.
    pub const fn as_ref(&self) -> OperationResult<&T, &E, &C> {
        match self {
            Self::Success(value) => OperationResult::Success(value),
            Self::Failure(error) => OperationResult::Failure(error),
            Self::Cancelled(cancelled) => OperationResult::Cancelled(cancelled),
        }
    }

    /// Mutably borrow every payload.
    pub const fn as_mut(&mut self) -> OperationResult<&mut T, &mut E, &mut C> {
        match self {
            Self::Success(value) => OperationResult::Success(value),
            Self::Failure(error) => OperationResult::Failure(error),
            Self::Cancelled(cancelled) => OperationResult::Cancelled(cancelled),
        }
    }

    /// Collapse into a two-state result, turning a cancellation into a failure.
    pub fn into_result_with<F>(self, on_cancelled: F) -> Result<T, E>
    where
        F: FnOnce(C) -> E,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
            Self::Cancelled(cancelled) => Err(on_cancelled(cancelled)),
        }
    }
}

impl<T, E, C> OperationResult<OperationResult<T, E, C>, E, C> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> OperationResult<T, E, C> {
        self.bind(std::convert::identity)
    }
}

impl<T, E, C> From<Result<T, E>> for OperationResult<T, E, C> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

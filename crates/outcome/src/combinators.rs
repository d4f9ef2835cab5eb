//! Synchronous combinators.
//!
//! Only the branch a combinator names is ever transformed; the other branches
//! move into the new value untouched. `match_outcome` and `switch` dispatch
//! on the tag and invoke exactly one of their three functions.
//!
//! Each combinator has a `_with` form that passes a caller-provided `state`
//! by value to the invoked function, so callers can avoid capturing closures.

use crate::operation_result::OperationResult;

impl<T, E, C> OperationResult<T, E, C> {
    /// Map the success payload.
    pub fn select<U, F>(self, op: F) -> OperationResult<U, E, C>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => OperationResult::Success(op(value)),
            Self::Failure(error) => OperationResult::Failure(error),
            Self::Cancelled(cancelled) => OperationResult::Cancelled(cancelled),
        }
    }

    /// [`OperationResult::select`] with caller state.
    pub fn select_with<St, U, F>(self, state: St, op: F) -> OperationResult<U, E, C>
    where
        F: FnOnce(St, T) -> U,
    {
        self.select(|value| op(state, value))
    }

    /// Chain an operation that produces its own outcome.
    ///
    /// The binder runs at most once, and only for a success.
    pub fn bind<U, F>(self, binder: F) -> OperationResult<U, E, C>
    where
        F: FnOnce(T) -> OperationResult<U, E, C>,
    {
        match self {
            Self::Success(value) => binder(value),
            Self::Failure(error) => OperationResult::Failure(error),
            Self::Cancelled(cancelled) => OperationResult::Cancelled(cancelled),
        }
    }

    /// [`OperationResult::bind`] with caller state.
    pub fn bind_with<St, U, F>(self, state: St, binder: F) -> OperationResult<U, E, C>
    where
        F: FnOnce(St, T) -> OperationResult<U, E, C>,
    {
        self.bind(|value| binder(state, value))
    }

    /// Map the failure payload.
    pub fn map_error<E2, F>(self, op: F) -> OperationResult<T, E2, C>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => OperationResult::Success(value),
            Self::Failure(error) => OperationResult::Failure(op(error)),
            Self::Cancelled(cancelled) => OperationResult::Cancelled(cancelled),
        }
    }

    /// [`OperationResult::map_error`] with caller state.
    pub fn map_error_with<St, E2, F>(self, state: St, op: F) -> OperationResult<T, E2, C>
    where
        F: FnOnce(St, E) -> E2,
    {
        self.map_error(|error| op(state, error))
    }

    /// Map the cancellation payload.
    pub fn map_cancellation<C2, F>(self, op: F) -> OperationResult<T, E, C2>
    where
        F: FnOnce(C) -> C2,
    {
        match self {
            Self::Success(value) => OperationResult::Success(value),
            Self::Failure(error) => OperationResult::Failure(error),
            Self::Cancelled(cancelled) => OperationResult::Cancelled(op(cancelled)),
        }
    }

    /// [`OperationResult::map_cancellation`] with caller state.
    pub fn map_cancellation_with<St, C2, F>(self, state: St, op: F) -> OperationResult<T, E, C2>
    where
        F: FnOnce(St, C) -> C2,
    {
        self.map_cancellation(|cancelled| op(state, cancelled))
    }

    /// Fold into a plain value with one function per branch.
    pub fn match_outcome<R, OnSuccess, OnFailure, OnCancelled>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
        on_cancelled: OnCancelled,
    ) -> R
    where
        OnSuccess: FnOnce(T) -> R,
        OnFailure: FnOnce(E) -> R,
        OnCancelled: FnOnce(C) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
            Self::Cancelled(cancelled) => on_cancelled(cancelled),
        }
    }

    /// [`OperationResult::match_outcome`] with caller state.
    pub fn match_outcome_with<St, R, OnSuccess, OnFailure, OnCancelled>(
        self,
        state: St,
        on_success: OnSuccess,
        on_failure: OnFailure,
        on_cancelled: OnCancelled,
    ) -> R
    where
        OnSuccess: FnOnce(St, T) -> R,
        OnFailure: FnOnce(St, E) -> R,
        OnCancelled: FnOnce(St, C) -> R,
    {
        match self {
            Self::Success(value) => on_success(state, value),
            Self::Failure(error) => on_failure(state, error),
            Self::Cancelled(cancelled) => on_cancelled(state, cancelled),
        }
    }

    /// Run the side effect for the populated branch.
    pub fn switch<OnSuccess, OnFailure, OnCancelled>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
        on_cancelled: OnCancelled,
    ) where
        OnSuccess: FnOnce(T),
        OnFailure: FnOnce(E),
        OnCancelled: FnOnce(C),
    {
        self.match_outcome(on_success, on_failure, on_cancelled);
    }

    /// [`OperationResult::switch`] with caller state.
    pub fn switch_with<St, OnSuccess, OnFailure, OnCancelled>(
        self,
        state: St,
        on_success: OnSuccess,
        on_failure: OnFailure,
        on_cancelled: OnCancelled,
    ) where
        OnSuccess: FnOnce(St, T),
        OnFailure: FnOnce(St, E),
        OnCancelled: FnOnce(St, C),
    {
        self.match_outcome_with(state, on_success, on_failure, on_cancelled);
    }
}

//! Async combinators for an already-resolved operation result.
//!
//! The source is eager; the transform returns a pending value. Only the
//! selected branch's transform is called and awaited, so a failure or
//! cancellation never starts success-branch work.
//!
//! Three-branch combinators take [`Handler`]s, so any mix of eager and
//! deferred branch transforms goes through the same method.

use crate::operation_result::OperationResult;
use std::future::Future;
use tristate_shared::Handler;

impl<T, E, C> OperationResult<T, E, C> {
    /// Map the success payload with an async selector.
    ///
    /// ```
    /// # futures_util::FutureExt::now_or_never(async {
    /// use tristate_outcome::OperationResult;
    ///
    /// let next = OperationResult::<i32>::success(5)
    ///     .select_async(|value| async move { value + 1 })
    ///     .await;
    /// assert_eq!(next, OperationResult::success(6));
    /// # });
    /// ```
    pub async fn select_async<U, F, Fut>(self, op: F) -> OperationResult<U, E, C>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => OperationResult::Success(op(value).await),
            Self::Failure(error) => OperationResult::Failure(error),
            Self::Cancelled(cancelled) => OperationResult::Cancelled(cancelled),
        }
    }

    /// [`OperationResult::select_async`] with caller state.
    pub async fn select_async_with<St, U, F, Fut>(
        self,
        state: St,
        op: F,
    ) -> OperationResult<U, E, C>
    where
        F: FnOnce(St, T) -> Fut,
        Fut: Future<Output = U>,
    {
        self.select_async(|value| op(state, value)).await
    }

    /// Chain an async operation that produces its own outcome.
    pub async fn bind_async<U, F, Fut>(self, binder: F) -> OperationResult<U, E, C>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = OperationResult<U, E, C>>,
    {
        match self {
            Self::Success(value) => binder(value).await,
            Self::Failure(error) => OperationResult::Failure(error),
            Self::Cancelled(cancelled) => OperationResult::Cancelled(cancelled),
        }
    }

    /// [`OperationResult::bind_async`] with caller state.
    pub async fn bind_async_with<St, U, F, Fut>(
        self,
        state: St,
        binder: F,
    ) -> OperationResult<U, E, C>
    where
        F: FnOnce(St, T) -> Fut,
        Fut: Future<Output = OperationResult<U, E, C>>,
    {
        self.bind_async(|value| binder(state, value)).await
    }

    /// Map the failure payload with an async transform.
    pub async fn map_error_async<E2, F, Fut>(self, op: F) -> OperationResult<T, E2, C>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        match self {
            Self::Success(value) => OperationResult::Success(value),
            Self::Failure(error) => OperationResult::Failure(op(error).await),
            Self::Cancelled(cancelled) => OperationResult::Cancelled(cancelled),
        }
    }

    /// [`OperationResult::map_error_async`] with caller state.
    pub async fn map_error_async_with<St, E2, F, Fut>(
        self,
        state: St,
        op: F,
    ) -> OperationResult<T, E2, C>
    where
        F: FnOnce(St, E) -> Fut,
        Fut: Future<Output = E2>,
    {
        self.map_error_async(|error| op(state, error)).await
    }

    /// Map the cancellation payload with an async transform.
    pub async fn map_cancellation_async<C2, F, Fut>(self, op: F) -> OperationResult<T, E, C2>
    where
        F: FnOnce(C) -> Fut,
        Fut: Future<Output = C2>,
    {
        match self {
            Self::Success(value) => OperationResult::Success(value),
            Self::Failure(error) => OperationResult::Failure(error),
            Self::Cancelled(cancelled) => OperationResult::Cancelled(op(cancelled).await),
        }
    }

    /// [`OperationResult::map_cancellation_async`] with caller state.
    pub async fn map_cancellation_async_with<St, C2, F, Fut>(
        self,
        state: St,
        op: F,
    ) -> OperationResult<T, E, C2>
    where
        F: FnOnce(St, C) -> Fut,
        Fut: Future<Output = C2>,
    {
        self.map_cancellation_async(|cancelled| op(state, cancelled))
            .await
    }

    /// Fold with one handler per branch; each may be eager or deferred.
    ///
    /// ```
    /// # futures_util::FutureExt::now_or_never(async {
    /// use tristate_outcome::{Cancelled, Error, OperationResult, deferred, eager};
    ///
    /// let label = OperationResult::<i32>::success(1)
    ///     .match_async(
    ///         deferred(|value: i32| async move { format!("ok {value}") }),
    ///         eager(|_: Error| String::from("err")),
    ///         eager(|_: Cancelled| String::from("cancel")),
    ///     )
    ///     .await;
    /// assert_eq!(label, "ok 1");
    /// # });
    /// ```
    pub async fn match_async<R, OnSuccess, OnFailure, OnCancelled>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
        on_cancelled: OnCancelled,
    ) -> R
    where
        OnSuccess: Handler<T, Output = R>,
        OnFailure: Handler<E, Output = R>,
        OnCancelled: Handler<C, Output = R>,
    {
        match self {
            Self::Success(value) => on_success.call(value).await,
            Self::Failure(error) => on_failure.call(error).await,
            Self::Cancelled(cancelled) => on_cancelled.call(cancelled).await,
        }
    }

    /// Run the side effect for the populated branch; each may be eager or deferred.
    pub async fn switch_async<OnSuccess, OnFailure, OnCancelled>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
        on_cancelled: OnCancelled,
    ) where
        OnSuccess: Handler<T, Output = ()>,
        OnFailure: Handler<E, Output = ()>,
        OnCancelled: Handler<C, Output = ()>,
    {
        self.match_async(on_success, on_failure, on_cancelled).await;
    }
}

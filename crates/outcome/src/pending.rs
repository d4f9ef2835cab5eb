//! Combinators for a pending operation result.
//!
//! [`OperationResultFuture`] is implemented for every future whose output is
//! an [`OperationResult`]. Each method returns a fresh future that awaits the
//! source exactly once, then applies the synchronous or asynchronous
//! combinator of the same name to the resolved value. Chains therefore
//! resolve strictly left to right:
//!
//! ```
//! # futures_util::FutureExt::now_or_never(async {
//! use tristate_outcome::{OperationResult, OperationResultFuture};
//!
//! let fetched = async { OperationResult::<i32>::success(20) };
//! let answer = fetched
//!     .select(|value| value + 1)
//!     .bind_async(|value| async move { OperationResult::success(value * 2) })
//!     .success_or_default()
//!     .await;
//! assert_eq!(answer, 42);
//! # });
//! ```

use crate::operation_result::OperationResult;
use std::future::Future;
use tristate_shared::Handler;

/// Combinators for a future that resolves to an [`OperationResult`].
pub trait OperationResultFuture<T, E, C>:
    Future<Output = OperationResult<T, E, C>> + Sized
{
    /// Map the resolved success payload.
    fn select<U, F>(self, op: F) -> impl Future<Output = OperationResult<U, E, C>>
    where
        F: FnOnce(T) -> U;

    /// [`OperationResultFuture::select`] with caller state.
    fn select_with<St, U, F>(
        self,
        state: St,
        op: F,
    ) -> impl Future<Output = OperationResult<U, E, C>>
    where
        F: FnOnce(St, T) -> U;

    /// Map the resolved success payload with an async selector.
    fn select_async<U, F, Fut>(self, op: F) -> impl Future<Output = OperationResult<U, E, C>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    /// [`OperationResultFuture::select_async`] with caller state.
    fn select_async_with<St, U, F, Fut>(
        self,
        state: St,
        op: F,
    ) -> impl Future<Output = OperationResult<U, E, C>>
    where
        F: FnOnce(St, T) -> Fut,
        Fut: Future<Output = U>;

    /// Chain an operation on the resolved success payload.
    fn bind<U, F>(self, binder: F) -> impl Future<Output = OperationResult<U, E, C>>
    where
        F: FnOnce(T) -> OperationResult<U, E, C>;

    /// [`OperationResultFuture::bind`] with caller state.
    fn bind_with<St, U, F>(
        self,
        state: St,
        binder: F,
    ) -> impl Future<Output = OperationResult<U, E, C>>
    where
        F: FnOnce(St, T) -> OperationResult<U, E, C>;

    /// Chain an async operation on the resolved success payload.
    fn bind_async<U, F, Fut>(self, binder: F) -> impl Future<Output = OperationResult<U, E, C>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = OperationResult<U, E, C>>;

    /// [`OperationResultFuture::bind_async`] with caller state.
    fn bind_async_with<St, U, F, Fut>(
        self,
        state: St,
        binder: F,
    ) -> impl Future<Output = OperationResult<U, E, C>>
    where
        F: FnOnce(St, T) -> Fut,
        Fut: Future<Output = OperationResult<U, E, C>>;

    /// Map the resolved failure payload.
    fn map_error<E2, F>(self, op: F) -> impl Future<Output = OperationResult<T, E2, C>>
    where
        F: FnOnce(E) -> E2;

    /// [`OperationResultFuture::map_error`] with caller state.
    fn map_error_with<St, E2, F>(
        self,
        state: St,
        op: F,
    ) -> impl Future<Output = OperationResult<T, E2, C>>
    where
        F: FnOnce(St, E) -> E2;

    /// Map the resolved failure payload with an async transform.
    fn map_error_async<E2, F, Fut>(self, op: F) -> impl Future<Output = OperationResult<T, E2, C>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>;

    /// [`OperationResultFuture::map_error_async`] with caller state.
    fn map_error_async_with<St, E2, F, Fut>(
        self,
        state: St,
        op: F,
    ) -> impl Future<Output = OperationResult<T, E2, C>>
    where
        F: FnOnce(St, E) -> Fut,
        Fut: Future<Output = E2>;

    /// Map the resolved cancellation payload.
    fn map_cancellation<C2, F>(self, op: F) -> impl Future<Output = OperationResult<T, E, C2>>
    where
        F: FnOnce(C) -> C2;

    /// [`OperationResultFuture::map_cancellation`] with caller state.
    fn map_cancellation_with<St, C2, F>(
        self,
        state: St,
        op: F,
    ) -> impl Future<Output = OperationResult<T, E, C2>>
    where
        F: FnOnce(St, C) -> C2;

    /// Map the resolved cancellation payload with an async transform.
    fn map_cancellation_async<C2, F, Fut>(
        self,
        op: F,
    ) -> impl Future<Output = OperationResult<T, E, C2>>
    where
        F: FnOnce(C) -> Fut,
        Fut: Future<Output = C2>;

    /// [`OperationResultFuture::map_cancellation_async`] with caller state.
    fn map_cancellation_async_with<St, C2, F, Fut>(
        self,
        state: St,
        op: F,
    ) -> impl Future<Output = OperationResult<T, E, C2>>
    where
        F: FnOnce(St, C) -> Fut,
        Fut: Future<Output = C2>;

    /// Fold the resolved value with plain closures.
    fn match_outcome<R, OnSuccess, OnFailure, OnCancelled>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
        on_cancelled: OnCancelled,
    ) -> impl Future<Output = R>
    where
        OnSuccess: FnOnce(T) -> R,
        OnFailure: FnOnce(E) -> R,
        OnCancelled: FnOnce(C) -> R;

    /// [`OperationResultFuture::match_outcome`] with caller state.
    fn match_outcome_with<St, R, OnSuccess, OnFailure, OnCancelled>(
        self,
        state: St,
        on_success: OnSuccess,
        on_failure: OnFailure,
        on_cancelled: OnCancelled,
    ) -> impl Future<Output = R>
    where
        OnSuccess: FnOnce(St, T) -> R,
        OnFailure: FnOnce(St, E) -> R,
        OnCancelled: FnOnce(St, C) -> R;

    /// Fold the resolved value with eager or deferred handlers.
    fn match_async<R, OnSuccess, OnFailure, OnCancelled>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
        on_cancelled: OnCancelled,
    ) -> impl Future<Output = R>
    where
        OnSuccess: Handler<T, Output = R>,
        OnFailure: Handler<E, Output = R>,
        OnCancelled: Handler<C, Output = R>;

    /// Run the side effect for the resolved branch.
    fn switch<OnSuccess, OnFailure, OnCancelled>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
        on_cancelled: OnCancelled,
    ) -> impl Future<Output = ()>
    where
        OnSuccess: FnOnce(T),
        OnFailure: FnOnce(E),
        OnCancelled: FnOnce(C);

    /// [`OperationResultFuture::switch`] with caller state.
    fn switch_with<St, OnSuccess, OnFailure, OnCancelled>(
        self,
        state: St,
        on_success: OnSuccess,
        on_failure: OnFailure,
        on_cancelled: OnCancelled,
    ) -> impl Future<Output = ()>
    where
        OnSuccess: FnOnce(St, T),
        OnFailure: FnOnce(St, E),
        OnCancelled: FnOnce(St, C);

    /// Run the side effect for the resolved branch with eager or deferred callbacks.
    fn switch_async<OnSuccess, OnFailure, OnCancelled>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
        on_cancelled: OnCancelled,
    ) -> impl Future<Output = ()>
    where
        OnSuccess: Handler<T, Output = ()>,
        OnFailure: Handler<E, Output = ()>,
        OnCancelled: Handler<C, Output = ()>;

    /// Resolve to the success payload or `default`.
    fn success_or(self, default: T) -> impl Future<Output = T>;

    /// Resolve to the success payload or `T::default()`.
    fn success_or_default(self) -> impl Future<Output = T>
    where
        T: Default;
}

impl<Src, T, E, C> OperationResultFuture<T, E, C> for Src
where
    Src: Future<Output = OperationResult<T, E, C>>,
{
    async fn select<U, F>(self, op: F) -> OperationResult<U, E, C>
    where
        F: FnOnce(T) -> U,
    {
        resolve(self, "select").await.select(op)
    }

    async fn select_with<St, U, F>(self, state: St, op: F) -> OperationResult<U, E, C>
    where
        F: FnOnce(St, T) -> U,
    {
        resolve(self, "select_with").await.select_with(state, op)
    }

    async fn select_async<U, F, Fut>(self, op: F) -> OperationResult<U, E, C>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        resolve(self, "select_async").await.select_async(op).await
    }

    async fn select_async_with<St, U, F, Fut>(self, state: St, op: F) -> OperationResult<U, E, C>
    where
        F: FnOnce(St, T) -> Fut,
        Fut: Future<Output = U>,
    {
        resolve(self, "select_async_with")
            .await
            .select_async_with(state, op)
            .await
    }

    async fn bind<U, F>(self, binder: F) -> OperationResult<U, E, C>
    where
        F: FnOnce(T) -> OperationResult<U, E, C>,
    {
        resolve(self, "bind").await.bind(binder)
    }

    async fn bind_with<St, U, F>(self, state: St, binder: F) -> OperationResult<U, E, C>
    where
        F: FnOnce(St, T) -> OperationResult<U, E, C>,
    {
        resolve(self, "bind_with").await.bind_with(state, binder)
    }

    async fn bind_async<U, F, Fut>(self, binder: F) -> OperationResult<U, E, C>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = OperationResult<U, E, C>>,
    {
        resolve(self, "bind_async").await.bind_async(binder).await
    }

    async fn bind_async_with<St, U, F, Fut>(self, state: St, binder: F) -> OperationResult<U, E, C>
    where
        F: FnOnce(St, T) -> Fut,
        Fut: Future<Output = OperationResult<U, E, C>>,
    {
        resolve(self, "bind_async_with")
            .await
            .bind_async_with(state, binder)
            .await
    }

    async fn map_error<E2, F>(self, op: F) -> OperationResult<T, E2, C>
    where
        F: FnOnce(E) -> E2,
    {
        resolve(self, "map_error").await.map_error(op)
    }

    async fn map_error_with<St, E2, F>(self, state: St, op: F) -> OperationResult<T, E2, C>
    where
        F: FnOnce(St, E) -> E2,
    {
        resolve(self, "map_error_with")
            .await
            .map_error_with(state, op)
    }

    async fn map_error_async<E2, F, Fut>(self, op: F) -> OperationResult<T, E2, C>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        resolve(self, "map_error_async")
            .await
            .map_error_async(op)
            .await
    }

    async fn map_error_async_with<St, E2, F, Fut>(
        self,
        state: St,
        op: F,
    ) -> OperationResult<T, E2, C>
    where
        F: FnOnce(St, E) -> Fut,
        Fut: Future<Output = E2>,
    {
        resolve(self, "map_error_async_with")
            .await
            .map_error_async_with(state, op)
            .await
    }

    async fn map_cancellation<C2, F>(self, op: F) -> OperationResult<T, E, C2>
    where
        F: FnOnce(C) -> C2,
    {
        resolve(self, "map_cancellation").await.map_cancellation(op)
    }

    async fn map_cancellation_with<St, C2, F>(self, state: St, op: F) -> OperationResult<T, E, C2>
    where
        F: FnOnce(St, C) -> C2,
    {
        resolve(self, "map_cancellation_with")
            .await
            .map_cancellation_with(state, op)
    }

    async fn map_cancellation_async<C2, F, Fut>(self, op: F) -> OperationResult<T, E, C2>
    where
        F: FnOnce(C) -> Fut,
        Fut: Future<Output = C2>,
    {
        resolve(self, "map_cancellation_async")
            .await
            .map_cancellation_async(op)
            .await
    }

    async fn map_cancellation_async_with<St, C2, F, Fut>(
        self,
        state: St,
        op: F,
    ) -> OperationResult<T, E, C2>
    where
        F: FnOnce(St, C) -> Fut,
        Fut: Future<Output = C2>,
    {
        resolve(self, "map_cancellation_async_with")
            .await
            .map_cancellation_async_with(state, op)
            .await
    }

    async fn match_outcome<R, OnSuccess, OnFailure, OnCancelled>(
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
        resolve(self, "match_outcome")
            .await
            .match_outcome(on_success, on_failure, on_cancelled)
    }

    async fn match_outcome_with<St, R, OnSuccess, OnFailure, OnCancelled>(
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
        resolve(self, "match_outcome_with")
            .await
            .match_outcome_with(state, on_success, on_failure, on_cancelled)
    }

    async fn match_async<R, OnSuccess, OnFailure, OnCancelled>(
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
        resolve(self, "match_async")
            .await
            .match_async(on_success, on_failure, on_cancelled)
            .await
    }

    async fn switch<OnSuccess, OnFailure, OnCancelled>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
        on_cancelled: OnCancelled,
    ) where
        OnSuccess: FnOnce(T),
        OnFailure: FnOnce(E),
        OnCancelled: FnOnce(C),
    {
        resolve(self, "switch")
            .await
            .switch(on_success, on_failure, on_cancelled);
    }

    async fn switch_with<St, OnSuccess, OnFailure, OnCancelled>(
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
        resolve(self, "switch_with")
            .await
            .switch_with(state, on_success, on_failure, on_cancelled);
    }

    async fn switch_async<OnSuccess, OnFailure, OnCancelled>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
        on_cancelled: OnCancelled,
    ) where
        OnSuccess: Handler<T, Output = ()>,
        OnFailure: Handler<E, Output = ()>,
        OnCancelled: Handler<C, Output = ()>,
    {
        resolve(self, "switch_async")
            .await
            .switch_async(on_success, on_failure, on_cancelled)
            .await;
    }

    async fn success_or(self, default: T) -> T {
        resolve(self, "success_or").await.success_or(default)
    }

    async fn success_or_default(self) -> T
    where
        T: Default,
    {
        resolve(self, "success_or_default")
            .await
            .success_or_default()
    }
}

async fn resolve<Src, T, E, C>(source: Src, combinator: &'static str) -> OperationResult<T, E, C>
where
    Src: Future<Output = OperationResult<T, E, C>>,
{
    let result = source.await;
    tracing::trace!(
        combinator,
        discriminant = %result.discriminant(),
        "resolved pending operation result"
    );
    result
}

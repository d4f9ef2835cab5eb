//! Two-state result combinators.
//!
//! The two-state family reuses `std::result::Result` and adds the same
//! combinator vocabulary the operation-result surface uses: `select`, `bind`,
//! `map_error`, `match_outcome`, `switch`, their state-threaded `_with`
//! forms, and the async lifts for eager and pending sources.

use crate::errors::Error;
use crate::handler::Handler;
use std::future::Future;

/// Shared result type whose failure defaults to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Synchronous combinators for two-state results.
pub trait ResultExt<T, E>: Sized {
    /// Map the success value, passing the failure through untouched.
    fn select<U, F>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U;

    /// [`ResultExt::select`] with caller state threaded into the closure.
    fn select_with<St, U, F>(self, state: St, op: F) -> Result<U, E>
    where
        F: FnOnce(St, T) -> U;

    /// Chain a fallible operation on success.
    fn bind<U, F>(self, binder: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>;

    /// [`ResultExt::bind`] with caller state threaded into the binder.
    fn bind_with<St, U, F>(self, state: St, binder: F) -> Result<U, E>
    where
        F: FnOnce(St, T) -> Result<U, E>;

    /// Map the failure value, passing the success through untouched.
    fn map_error<E2, F>(self, op: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> E2;

    /// [`ResultExt::map_error`] with caller state threaded into the closure.
    fn map_error_with<St, E2, F>(self, state: St, op: F) -> Result<T, E2>
    where
        F: FnOnce(St, E) -> E2;

    /// Fold into a plain value by invoking exactly one handler.
    fn match_outcome<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R;

    /// [`ResultExt::match_outcome`] with caller state passed to the invoked handler.
    fn match_outcome_with<St, R, S, F>(self, state: St, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(St, T) -> R,
        F: FnOnce(St, E) -> R;

    /// Run exactly one side effect chosen by the branch.
    fn switch<S, F>(self, on_success: S, on_failure: F)
    where
        S: FnOnce(T),
        F: FnOnce(E);

    /// [`ResultExt::switch`] with caller state passed to the invoked callback.
    fn switch_with<St, S, F>(self, state: St, on_success: S, on_failure: F)
    where
        S: FnOnce(St, T),
        F: FnOnce(St, E);
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn select<U, F>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.map(op)
    }

    fn select_with<St, U, F>(self, state: St, op: F) -> Result<U, E>
    where
        F: FnOnce(St, T) -> U,
    {
        self.map(|value| op(state, value))
    }

    fn bind<U, F>(self, binder: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.and_then(binder)
    }

    fn bind_with<St, U, F>(self, state: St, binder: F) -> Result<U, E>
    where
        F: FnOnce(St, T) -> Result<U, E>,
    {
        self.and_then(|value| binder(state, value))
    }

    fn map_error<E2, F>(self, op: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        self.map_err(op)
    }

    fn map_error_with<St, E2, F>(self, state: St, op: F) -> Result<T, E2>
    where
        F: FnOnce(St, E) -> E2,
    {
        self.map_err(|error| op(state, error))
    }

    fn match_outcome<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    fn match_outcome_with<St, R, S, F>(self, state: St, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(St, T) -> R,
        F: FnOnce(St, E) -> R,
    {
        match self {
            Ok(value) => on_success(state, value),
            Err(error) => on_failure(state, error),
        }
    }

    fn switch<S, F>(self, on_success: S, on_failure: F)
    where
        S: FnOnce(T),
        F: FnOnce(E),
    {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    fn switch_with<St, S, F>(self, state: St, on_success: S, on_failure: F)
    where
        S: FnOnce(St, T),
        F: FnOnce(St, E),
    {
        match self {
            Ok(value) => on_success(state, value),
            Err(error) => on_failure(state, error),
        }
    }
}

/// Async combinators for an eager two-state result with pending transforms.
pub trait AsyncResultExt<T, E>: Sized {
    /// Map the success value with an async selector.
    fn select_async<U, F, Fut>(self, op: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    /// [`AsyncResultExt::select_async`] with caller state.
    fn select_async_with<St, U, F, Fut>(
        self,
        state: St,
        op: F,
    ) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(St, T) -> Fut,
        Fut: Future<Output = U>;

    /// Chain an async fallible operation on success.
    fn bind_async<U, F, Fut>(self, binder: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>;

    /// [`AsyncResultExt::bind_async`] with caller state.
    fn bind_async_with<St, U, F, Fut>(
        self,
        state: St,
        binder: F,
    ) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(St, T) -> Fut,
        Fut: Future<Output = Result<U, E>>;

    /// Map the failure value with an async transform.
    fn map_error_async<E2, F, Fut>(self, op: F) -> impl Future<Output = Result<T, E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>;

    /// [`AsyncResultExt::map_error_async`] with caller state.
    fn map_error_async_with<St, E2, F, Fut>(
        self,
        state: St,
        op: F,
    ) -> impl Future<Output = Result<T, E2>>
    where
        F: FnOnce(St, E) -> Fut,
        Fut: Future<Output = E2>;

    /// Fold with one handler per branch; each handler may be eager or deferred.
    fn match_async<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: Handler<T, Output = R>,
        F: Handler<E, Output = R>;

    /// Run one side effect per branch; each callback may be eager or deferred.
    fn switch_async<S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = ()>
    where
        S: Handler<T, Output = ()>,
        F: Handler<E, Output = ()>;
}

impl<T, E> AsyncResultExt<T, E> for Result<T, E> {
    async fn select_async<U, F, Fut>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Ok(value) => Ok(op(value).await),
            Err(error) => Err(error),
        }
    }

    async fn select_async_with<St, U, F, Fut>(self, state: St, op: F) -> Result<U, E>
    where
        F: FnOnce(St, T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Ok(value) => Ok(op(state, value).await),
            Err(error) => Err(error),
        }
    }

    async fn bind_async<U, F, Fut>(self, binder: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        match self {
            Ok(value) => binder(value).await,
            Err(error) => Err(error),
        }
    }

    async fn bind_async_with<St, U, F, Fut>(self, state: St, binder: F) -> Result<U, E>
    where
        F: FnOnce(St, T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        match self {
            Ok(value) => binder(state, value).await,
            Err(error) => Err(error),
        }
    }

    async fn map_error_async<E2, F, Fut>(self, op: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(op(error).await),
        }
    }

    async fn map_error_async_with<St, E2, F, Fut>(self, state: St, op: F) -> Result<T, E2>
    where
        F: FnOnce(St, E) -> Fut,
        Fut: Future<Output = E2>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(op(state, error).await),
        }
    }

    async fn match_async<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: Handler<T, Output = R>,
        F: Handler<E, Output = R>,
    {
        match self {
            Ok(value) => on_success.call(value).await,
            Err(error) => on_failure.call(error).await,
        }
    }

    async fn switch_async<S, F>(self, on_success: S, on_failure: F)
    where
        S: Handler<T, Output = ()>,
        F: Handler<E, Output = ()>,
    {
        match self {
            Ok(value) => on_success.call(value).await,
            Err(error) => on_failure.call(error).await,
        }
    }
}

/// Combinators for a pending two-state result.
///
/// Every method awaits the source once, then applies the matching
/// synchronous or asynchronous combinator to the resolved value.
pub trait ResultFuture<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Map the resolved success value.
    fn select<U, F>(self, op: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> U;

    /// [`ResultFuture::select`] with caller state.
    fn select_with<St, U, F>(self, state: St, op: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(St, T) -> U;

    /// Map the resolved success value with an async selector.
    fn select_async<U, F, Fut>(self, op: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    /// [`ResultFuture::select_async`] with caller state.
    fn select_async_with<St, U, F, Fut>(
        self,
        state: St,
        op: F,
    ) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(St, T) -> Fut,
        Fut: Future<Output = U>;

    /// Chain a fallible operation on the resolved success value.
    fn bind<U, F>(self, binder: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> Result<U, E>;

    /// [`ResultFuture::bind`] with caller state.
    fn bind_with<St, U, F>(self, state: St, binder: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(St, T) -> Result<U, E>;

    /// Chain an async fallible operation on the resolved success value.
    fn bind_async<U, F, Fut>(self, binder: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>;

    /// [`ResultFuture::bind_async`] with caller state.
    fn bind_async_with<St, U, F, Fut>(
        self,
        state: St,
        binder: F,
    ) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(St, T) -> Fut,
        Fut: Future<Output = Result<U, E>>;

    /// Map the resolved failure value.
    fn map_error<E2, F>(self, op: F) -> impl Future<Output = Result<T, E2>>
    where
        F: FnOnce(E) -> E2;

    /// [`ResultFuture::map_error`] with caller state.
    fn map_error_with<St, E2, F>(self, state: St, op: F) -> impl Future<Output = Result<T, E2>>
    where
        F: FnOnce(St, E) -> E2;

    /// Map the resolved failure value with an async transform.
    fn map_error_async<E2, F, Fut>(self, op: F) -> impl Future<Output = Result<T, E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>;

    /// [`ResultFuture::map_error_async`] with caller state.
    fn map_error_async_with<St, E2, F, Fut>(
        self,
        state: St,
        op: F,
    ) -> impl Future<Output = Result<T, E2>>
    where
        F: FnOnce(St, E) -> Fut,
        Fut: Future<Output = E2>;

    /// Fold the resolved value with plain closures.
    fn match_outcome<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R;

    /// [`ResultFuture::match_outcome`] with caller state.
    fn match_outcome_with<St, R, S, F>(
        self,
        state: St,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = R>
    where
        S: FnOnce(St, T) -> R,
        F: FnOnce(St, E) -> R;

    /// Fold the resolved value with eager or deferred handlers.
    fn match_async<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: Handler<T, Output = R>,
        F: Handler<E, Output = R>;

    /// Run one side effect for the resolved branch.
    fn switch<S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = ()>
    where
        S: FnOnce(T),
        F: FnOnce(E);

    /// [`ResultFuture::switch`] with caller state.
    fn switch_with<St, S, F>(
        self,
        state: St,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = ()>
    where
        S: FnOnce(St, T),
        F: FnOnce(St, E);

    /// Run one side effect for the resolved branch with eager or deferred callbacks.
    fn switch_async<S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = ()>
    where
        S: Handler<T, Output = ()>,
        F: Handler<E, Output = ()>;
}

impl<Src, T, E> ResultFuture<T, E> for Src
where
    Src: Future<Output = Result<T, E>>,
{
    async fn select<U, F>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        resolve(self, "select").await.select(op)
    }

    async fn select_with<St, U, F>(self, state: St, op: F) -> Result<U, E>
    where
        F: FnOnce(St, T) -> U,
    {
        resolve(self, "select_with").await.select_with(state, op)
    }

    async fn select_async<U, F, Fut>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        resolve(self, "select_async").await.select_async(op).await
    }

    async fn select_async_with<St, U, F, Fut>(self, state: St, op: F) -> Result<U, E>
    where
        F: FnOnce(St, T) -> Fut,
        Fut: Future<Output = U>,
    {
        resolve(self, "select_async_with")
            .await
            .select_async_with(state, op)
            .await
    }

    async fn bind<U, F>(self, binder: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        resolve(self, "bind").await.bind(binder)
    }

    async fn bind_with<St, U, F>(self, state: St, binder: F) -> Result<U, E>
    where
        F: FnOnce(St, T) -> Result<U, E>,
    {
        resolve(self, "bind_with").await.bind_with(state, binder)
    }

    async fn bind_async<U, F, Fut>(self, binder: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        resolve(self, "bind_async").await.bind_async(binder).await
    }

    async fn bind_async_with<St, U, F, Fut>(self, state: St, binder: F) -> Result<U, E>
    where
        F: FnOnce(St, T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        resolve(self, "bind_async_with")
            .await
            .bind_async_with(state, binder)
            .await
    }

    async fn map_error<E2, F>(self, op: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        resolve(self, "map_error").await.map_error(op)
    }

    async fn map_error_with<St, E2, F>(self, state: St, op: F) -> Result<T, E2>
    where
        F: FnOnce(St, E) -> E2,
    {
        resolve(self, "map_error_with")
            .await
            .map_error_with(state, op)
    }

    async fn map_error_async<E2, F, Fut>(self, op: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        resolve(self, "map_error_async")
            .await
            .map_error_async(op)
            .await
    }

    async fn map_error_async_with<St, E2, F, Fut>(self, state: St, op: F) -> Result<T, E2>
    where
        F: FnOnce(St, E) -> Fut,
        Fut: Future<Output = E2>,
    {
        resolve(self, "map_error_async_with")
            .await
            .map_error_async_with(state, op)
            .await
    }

    async fn match_outcome<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        resolve(self, "match_outcome")
            .await
            .match_outcome(on_success, on_failure)
    }

    async fn match_outcome_with<St, R, S, F>(self, state: St, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(St, T) -> R,
        F: FnOnce(St, E) -> R,
    {
        resolve(self, "match_outcome_with")
            .await
            .match_outcome_with(state, on_success, on_failure)
    }

    async fn match_async<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: Handler<T, Output = R>,
        F: Handler<E, Output = R>,
    {
        resolve(self, "match_async")
            .await
            .match_async(on_success, on_failure)
            .await
    }

    async fn switch<S, F>(self, on_success: S, on_failure: F)
    where
        S: FnOnce(T),
        F: FnOnce(E),
    {
        resolve(self, "switch").await.switch(on_success, on_failure);
    }

    async fn switch_with<St, S, F>(self, state: St, on_success: S, on_failure: F)
    where
        S: FnOnce(St, T),
        F: FnOnce(St, E),
    {
        resolve(self, "switch_with")
            .await
            .switch_with(state, on_success, on_failure);
    }

    async fn switch_async<S, F>(self, on_success: S, on_failure: F)
    where
        S: Handler<T, Output = ()>,
        F: Handler<E, Output = ()>,
    {
        resolve(self, "switch_async")
            .await
            .switch_async(on_success, on_failure)
            .await;
    }
}

async fn resolve<Src, T, E>(source: Src, combinator: &'static str) -> Result<T, E>
where
    Src: Future<Output = Result<T, E>>,
{
    let result = source.await;
    tracing::trace!(combinator, is_ok = result.is_ok(), "resolved pending result");
    result
}

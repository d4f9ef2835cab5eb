//! Branch handlers for the asynchronous combinators.
//!
//! A three-branch combinator (match, switch) takes one transform per branch,
//! and each transform may either produce its value immediately or return a
//! pending value. Rather than one method per combination, the combinators are
//! generic over [`Handler`], and a closure is wrapped to say which kind it is:
//!
//! - [`eager`] / [`eager_with`]: the closure returns the value directly.
//! - [`deferred`] / [`deferred_with`]: the closure returns a future.
//!
//! A handler is only called for the branch actually present, so wrapping a
//! closure never starts any work by itself.

use std::future::{Future, Ready, ready};

/// A single-use branch transform producing a future of its output.
pub trait Handler<In> {
    /// Value produced by the transform.
    type Output;
    /// Future returned by [`Handler::call`].
    type Future: Future<Output = Self::Output>;

    /// Invoke the transform with the branch payload.
    fn call(self, input: In) -> Self::Future;
}

/// Handler whose closure returns its value directly.
#[derive(Debug, Clone, Copy)]
pub struct Eager<F>(F);

/// Handler whose closure returns a pending value.
#[derive(Debug, Clone, Copy)]
pub struct Deferred<F>(F);

/// Eager handler that threads caller state into the closure.
#[derive(Debug, Clone, Copy)]
pub struct EagerWith<St, F> {
    state: St,
    op: F,
}

/// Deferred handler that threads caller state into the closure.
#[derive(Debug, Clone, Copy)]
pub struct DeferredWith<St, F> {
    state: St,
    op: F,
}

/// Wrap a closure returning a plain value.
pub const fn eager<F>(op: F) -> Eager<F> {
    Eager(op)
}

/// Wrap a closure returning a future.
pub const fn deferred<F>(op: F) -> Deferred<F> {
    Deferred(op)
}

/// Wrap a closure returning a plain value, passing `state` to it on call.
pub const fn eager_with<St, F>(state: St, op: F) -> EagerWith<St, F> {
    EagerWith { state, op }
}

/// Wrap a closure returning a future, passing `state` to it on call.
pub const fn deferred_with<St, F>(state: St, op: F) -> DeferredWith<St, F> {
    DeferredWith { state, op }
}

impl<In, R, F> Handler<In> for Eager<F>
where
    F: FnOnce(In) -> R,
{
    type Output = R;
    type Future = Ready<R>;

    fn call(self, input: In) -> Self::Future {
        ready((self.0)(input))
    }
}

impl<In, Fut, F> Handler<In> for Deferred<F>
where
    F: FnOnce(In) -> Fut,
    Fut: Future,
{
    type Output = Fut::Output;
    type Future = Fut;

    fn call(self, input: In) -> Self::Future {
        (self.0)(input)
    }
}

impl<In, St, R, F> Handler<In> for EagerWith<St, F>
where
    F: FnOnce(St, In) -> R,
{
    type Output = R;
    type Future = Ready<R>;

    fn call(self, input: In) -> Self::Future {
        ready((self.op)(self.state, input))
    }
}

impl<In, St, Fut, F> Handler<In> for DeferredWith<St, F>
where
    F: FnOnce(St, In) -> Fut,
    Fut: Future,
{
    type Output = Fut::Output;
    type Future = Fut;

    fn call(self, input: In) -> Self::Future {
        (self.op)(self.state, input)
    }
}

//! Pending values that really suspend.
//!
//! `std::future::ready` never returns `Pending`, so it cannot show that a
//! combinator awaits its source. [`YieldOnce`] returns `Pending` on its first
//! poll and the value on the second.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Future that yields once before resolving to its value.
#[derive(Debug)]
pub struct YieldOnce<T> {
    value: Option<T>,
    yielded: bool,
}

impl<T> Unpin for YieldOnce<T> {}

/// Build a [`YieldOnce`] for `value`.
pub fn yield_once<T>(value: T) -> YieldOnce<T> {
    YieldOnce {
        value: Some(value),
        yielded: false,
    }
}

impl<T> Future for YieldOnce<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        let this = self.get_mut();
        if !this.yielded {
            this.yielded = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        Poll::Ready(this.value.take().expect("YieldOnce polled after completion"))
    }
}

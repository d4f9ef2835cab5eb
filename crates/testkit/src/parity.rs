//! Async/sync equivalence helpers.

use std::fmt::Debug;
use std::future::Future;

/// Drive a future to completion on a fresh current-thread runtime.
pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("build current-thread runtime")
        .block_on(future)
}

/// Assert that a pending combinator resolves to the synchronous result.
pub fn assert_parity<T, F>(expected: &T, pending: F)
where
    T: Debug + PartialEq,
    F: Future<Output = T>,
{
    let actual = block_on(pending);
    assert_eq!(&actual, expected, "async combinator diverged from sync combinator");
}

//! Call counters for short-circuit assertions.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared counter of transform invocations.
///
/// Clones share the same count, so a counter can be moved into closures and
/// still be read afterwards.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call.
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of recorded calls.
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Wrap a closure so every invocation is counted.
    pub fn track<A, R, F>(&self, op: F) -> impl FnOnce(A) -> R + use<A, R, F>
    where
        F: FnOnce(A) -> R,
    {
        let counter = self.clone();
        move |input| {
            counter.hit();
            op(input)
        }
    }
}

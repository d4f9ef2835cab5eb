//! # tristate-outcome
//!
//! Three-state operation results and their combinator algebra.
//!
//! This crate contains the outcome type and everything that composes it:
//!
//! - **Discriminant** - the closed `Success` / `Failure` / `Cancelled` tag set
//! - **`OperationResult`** - the tagged value with accessors and conversions
//! - **Combinators** - `select`, `bind`, `map_error`, `map_cancellation`,
//!   `match_outcome`, `switch`, and their state-threaded `_with` forms
//! - **Async combinators** - eager sources with pending transforms (inherent
//!   `*_async` methods) and pending sources (`OperationResultFuture`)
//!
//! ## Dependency Rules
//!
//! - Depends only on the `shared` crate
//! - Never spawns, schedules, or cancels work; it only represents outcomes

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// Re-export shared types for convenience
pub use tristate_shared::{
    Cancelled, Deferred, DeferredWith, Eager, EagerWith, Error, ErrorCause, Handler, deferred,
    deferred_with, eager, eager_with, shared_crate_version,
};

// =============================================================================
// OUTCOME MODULES
// =============================================================================

mod combinators;
pub mod discriminant;
mod eager_async;
pub mod operation_result;
pub mod pending;

pub use discriminant::{Discriminant, UnknownDiscriminant};
pub use operation_result::OperationResult;
pub use pending::OperationResultFuture;

/// Returns the outcome crate version.
#[must_use]
pub const fn outcome_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_crate_compiles() {
        let version = outcome_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn outcome_depends_on_shared() {
        let shared_version = shared_crate_version();
        assert!(!shared_version.is_empty());
    }
}

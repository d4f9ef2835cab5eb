//! # tristate-shared
//!
//! Shared building blocks for the tristate workspace.
//!
//! This crate provides the pieces that every outcome family uses:
//!
//! - `Error` and `Cancelled` payload carriers
//! - Branch `Handler`s (eager or deferred transforms) for async combinators
//! - Combinators for the two-state `Result` family
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **Values, not exceptions** - Failure and cancellation are ordinary payloads
//! 3. **Serde-compatible** - All public value types support serialization

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// =============================================================================
// PAYLOAD CARRIERS
// =============================================================================

pub mod cancelled;
pub mod errors;

// =============================================================================
// COMBINATOR SUPPORT
// =============================================================================

pub mod handler;
pub mod result;

pub use cancelled::{Cancelled, DEFAULT_CANCELLATION_REASON};
pub use errors::{CauseMessage, Error, ErrorCause, IO_ERROR_MESSAGE};
pub use handler::{
    Deferred, DeferredWith, Eager, EagerWith, Handler, deferred, deferred_with, eager, eager_with,
};
pub use result::{AsyncResultExt, Result, ResultExt, ResultFuture};

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================

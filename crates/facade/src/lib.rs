//! # tristate
//!
//! Facade API for consumers of the outcome types.
//! This crate depends on `outcome` and `shared`.
//!
//! Two families are exposed:
//!
//! - [`OperationResult`]: success, failure, or cancellation
//! - [`Result`]: success or failure, with the same combinator names through
//!   [`ResultExt`], [`AsyncResultExt`], and [`ResultFuture`]
//!
//! Glob-importing [`prelude`] brings every extension trait into scope, which
//! is what the pending-source combinators need:
//!
//! ```
//! use tristate::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let fetched = async { OperationResult::<u32>::cancelled(Cancelled::new("shutdown")) };
//! let label = fetched
//!     .match_outcome(
//!         |value| format!("fetched {value}"),
//!         |error| format!("failed: {error}"),
//!         |cancelled| format!("stopped: {}", cancelled.reason()),
//!     )
//!     .await;
//! assert_eq!(label, "stopped: shutdown");
//! # }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub use tristate_outcome::{
    Discriminant, OperationResult, OperationResultFuture, UnknownDiscriminant, discriminant,
    operation_result, outcome_crate_version, pending,
};
pub use tristate_shared::{
    AsyncResultExt, Cancelled, CauseMessage, DEFAULT_CANCELLATION_REASON, Deferred, DeferredWith,
    Eager, EagerWith, Error, ErrorCause, Handler, IO_ERROR_MESSAGE, Result, ResultExt,
    ResultFuture, deferred, deferred_with, eager, eager_with, shared_crate_version,
};

/// Everything needed to build and compose outcomes.
pub mod prelude {
    pub use tristate_outcome::{Discriminant, OperationResult, OperationResultFuture};
    pub use tristate_shared::{
        AsyncResultExt, Cancelled, Error, Handler, ResultExt, ResultFuture, deferred,
        deferred_with, eager, eager_with,
    };
}

/// Returns the facade crate version.
#[must_use]
pub const fn facade_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

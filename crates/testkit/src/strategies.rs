//! Proptest strategies for payloads and outcomes.

use proptest::prelude::*;
use std::fmt::Debug;
use tristate_outcome::OperationResult;
use tristate_shared::{Cancelled, Error};

/// Arbitrary failure payloads.
pub fn error() -> impl Strategy<Value = Error> {
    "[a-z]{1,12}".prop_map(Error::new)
}

/// Arbitrary cancellation payloads.
pub fn cancelled() -> impl Strategy<Value = Cancelled> {
    "[a-z]{1,12}".prop_map(Cancelled::new)
}

/// Outcomes spread across all three branches, with successes from `success`.
pub fn operation_result<S>(success: S) -> impl Strategy<Value = OperationResult<S::Value>>
where
    S: Strategy,
    S::Value: Clone + Debug,
{
    prop_oneof![
        success.prop_map(OperationResult::success),
        error().prop_map(OperationResult::failure),
        cancelled().prop_map(OperationResult::cancelled),
    ]
}

/// Outcomes with arbitrary `i32` successes.
pub fn any_outcome() -> impl Strategy<Value = OperationResult<i32>> {
    operation_result(any::<i32>())
}

//! Payload and outcome fixtures.

use tristate_outcome::OperationResult;
use tristate_shared::{Cancelled, Error};

/// A failure payload with the message `boom`.
pub fn boom() -> Error {
    Error::new("boom")
}

/// A cancellation payload with the reason `timeout`.
pub fn timeout() -> Cancelled {
    Cancelled::new("timeout")
}

/// One outcome per branch: success carrying `value`, then `boom`, then `timeout`.
pub fn all_branches<T>(value: T) -> [OperationResult<T>; 3] {
    [
        OperationResult::success(value),
        OperationResult::failure(boom()),
        OperationResult::cancelled(timeout()),
    ]
}

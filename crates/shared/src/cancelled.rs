//! Cancellation payload carried by the cancelled branch of an outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default reason used by [`Cancelled::default`].
pub const DEFAULT_CANCELLATION_REASON: &str = "operation cancelled";

/// Descriptive cancellation marker with an optional attached value.
///
/// A serialized marker without a `value` field decodes with `V::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cancelled<V = ()> {
    reason: String,
    #[serde(default)]
    value: V,
}

impl Cancelled {
    /// Create a cancellation marker with a reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            value: (),
        }
    }
}

impl<V> Cancelled<V> {
    /// Replace the attached value.
    pub fn with_value<U>(self, value: U) -> Cancelled<U> {
        Cancelled {
            reason: self.reason,
            value,
        }
    }

    /// Transform the attached value, keeping the reason.
    pub fn map_value<U, F>(self, op: F) -> Cancelled<U>
    where
        F: FnOnce(V) -> U,
    {
        Cancelled {
            reason: self.reason,
            value: op(self.value),
        }
    }

    /// Returns the cancellation reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Borrow the attached value.
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Consume the marker and return the attached value.
    pub fn into_value(self) -> V {
        self.value
    }
}

impl Default for Cancelled {
    fn default() -> Self {
        Self::new(DEFAULT_CANCELLATION_REASON)
    }
}

impl<V> fmt::Display for Cancelled<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "cancelled: {}", self.reason)
    }
}

impl From<&str> for Cancelled {
    fn from(reason: &str) -> Self {
        Self::new(reason)
    }
}

impl From<String> for Cancelled {
    fn from(reason: String) -> Self {
        Self::new(reason)
    }
}

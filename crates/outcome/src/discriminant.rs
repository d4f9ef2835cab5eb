//! The closed set of operation-result states.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tag identifying which branch an operation result holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discriminant {
    /// The operation produced a value.
    Success,
    /// The operation failed.
    Failure,
    /// The operation was cancelled.
    Cancelled,
}

impl Discriminant {
    /// Every discriminant, in declaration order.
    pub const ALL: [Self; 3] = [Self::Success, Self::Failure, Self::Cancelled];

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Cancelled => "cancelled",
        }
    }

    /// Stable raw tag (`0`, `1`, `2`).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::Cancelled => 2,
        }
    }
}

impl fmt::Display for Discriminant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A raw tag outside the closed three-state set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnknownDiscriminant {
    /// Raw numeric tag that maps to no state.
    #[error("unknown operation result discriminant: {0}")]
    Raw(u8),
    /// Name that maps to no state.
    #[error("unknown operation result discriminant: {0:?}")]
    Name(String),
}

impl TryFrom<u8> for Discriminant {
    type Error = UnknownDiscriminant;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Success),
            1 => Ok(Self::Failure),
            2 => Ok(Self::Cancelled),
            _ => {
                tracing::debug!(raw, "rejected raw operation result discriminant");
                Err(UnknownDiscriminant::Raw(raw))
            },
        }
    }
}

impl FromStr for Discriminant {
    type Err = UnknownDiscriminant;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|discriminant| discriminant.as_str() == name)
            .ok_or_else(|| {
                tracing::debug!(name, "rejected operation result discriminant name");
                UnknownDiscriminant::Name(name.to_owned())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_tags_round_trip_for_the_closed_set() {
        for discriminant in Discriminant::ALL {
            assert_eq!(Discriminant::try_from(discriminant.as_u8()), Ok(discriminant));
            assert_eq!(discriminant.as_str().parse(), Ok(discriminant));
        }
    }

    #[test]
    fn tags_outside_the_closed_set_are_rejected() {
        assert_eq!(Discriminant::try_from(3_u8), Err(UnknownDiscriminant::Raw(3)));
        let error = "partial".parse::<Discriminant>().err();
        assert_eq!(
            error.map(|error| error.to_string()),
            Some("unknown operation result discriminant: \"partial\"".to_owned())
        );
    }

    #[test]
    fn discriminant_displays_lowercase_name() {
        assert_eq!(Discriminant::Cancelled.to_string(), "cancelled");
    }
}

//! # tristate-testkit
//!
//! Test helpers shared by the tristate crates.
//! This crate depends on `outcome` and `shared`.

pub mod counter;
pub mod fixtures;
pub mod parity;
pub mod pending;
pub mod strategies;

pub use counter::CallCounter;
pub use parity::{assert_parity, block_on};
pub use pending::{YieldOnce, yield_once};

/// Returns the testkit crate version.
#[must_use]
pub const fn testkit_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tristate_outcome::outcome_crate_version;
    use tristate_shared::shared_crate_version;

    #[test]
    fn testkit_crate_compiles() {
        let version = testkit_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn testkit_can_use_outcome_and_shared() {
        assert!(!outcome_crate_version().is_empty());
        assert!(!shared_crate_version().is_empty());
    }

    #[test]
    fn fixtures_cover_every_branch() {
        let branches = fixtures::all_branches(1);
        assert_eq!(branches.len(), 3);
    }
}

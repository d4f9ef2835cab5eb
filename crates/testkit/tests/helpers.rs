//! Integration tests for the shared test helpers.

use tristate_outcome::{OperationResult, OperationResultFuture};
use tristate_testkit::fixtures::{all_branches, boom};
use tristate_testkit::{CallCounter, assert_parity, block_on, yield_once};

#[test]
fn yield_once_sources_drive_pending_combinators() {
    let source = yield_once(OperationResult::<i32>::success(4));
    let doubled = block_on(source.select(|value| value * 2));
    assert_eq!(doubled, OperationResult::success(8));
}

#[test]
fn counters_observe_short_circuit() {
    let counter = CallCounter::new();
    let failed = OperationResult::<i32>::failure(boom()).select(counter.track(|value: i32| value));

    assert_eq!(failed, OperationResult::failure(boom()));
    assert_eq!(counter.count(), 0);
}

#[test]
fn parity_holds_for_every_fixture_branch() {
    for outcome in all_branches(3) {
        let expected = outcome.clone().select(|value| value + 1);
        assert_parity(&expected, outcome.select_async(|value| yield_once(value + 1)));
    }
}

//! Async/sync equivalence and short-circuit coverage for the async combinators.
//!
//! Pending values are built with `yield_once`, so every source and transform
//! suspends at least once before resolving.

use proptest::prelude::*;
use std::cell::RefCell;
use tristate_outcome::{
    Cancelled, Error, OperationResult, OperationResultFuture, deferred, deferred_with, eager,
    eager_with,
};
use tristate_testkit::fixtures::{all_branches, boom, timeout};
use tristate_testkit::strategies::any_outcome;
use tristate_testkit::{CallCounter, assert_parity, block_on, yield_once};

type Outcome = OperationResult<i32>;

fn label(outcome: Outcome) -> String {
    outcome.match_outcome(
        |value| format!("success {value}"),
        |error| format!("failure {}", error.message()),
        |cancelled| format!("cancelled {}", cancelled.reason()),
    )
}

fn record(seen: &RefCell<Vec<String>>, outcome: Outcome) {
    seen.borrow_mut().push(label(outcome));
}

proptest! {
    #[test]
    fn select_forms_agree(outcome in any_outcome()) {
        let triple = |value: i32| value.wrapping_mul(3);
        let expected = outcome.clone().select(triple);

        assert_parity(&expected, outcome.clone().select_async(|value| yield_once(triple(value))));
        assert_parity(&expected, yield_once(outcome.clone()).select(triple));
        assert_parity(
            &expected,
            yield_once(outcome.clone()).select_async(|value| yield_once(triple(value))),
        );
        assert_parity(
            &expected,
            yield_once(outcome).select_async_with(3, |factor, value: i32| {
                yield_once(value.wrapping_mul(factor))
            }),
        );
    }

    #[test]
    fn bind_forms_agree(outcome in any_outcome()) {
        let binder = |value: i32| {
            if value % 2 == 0 {
                Outcome::success(value / 2)
            } else {
                Outcome::failure(Error::new("odd"))
            }
        };
        let expected = outcome.clone().bind(binder);

        assert_parity(&expected, outcome.clone().bind_async(|value| yield_once(binder(value))));
        assert_parity(&expected, yield_once(outcome.clone()).bind(binder));
        assert_parity(
            &expected,
            yield_once(outcome.clone()).bind_with(2, |_, value| binder(value)),
        );
        assert_parity(
            &expected,
            yield_once(outcome.clone()).bind_async(|value| yield_once(binder(value))),
        );
        assert_parity(
            &expected,
            outcome.bind_async_with((), |(), value| yield_once(binder(value))),
        );
    }

    #[test]
    fn map_error_forms_agree(outcome in any_outcome()) {
        let length = |error: Error| error.message().len();
        let expected = outcome.clone().map_error(length);

        assert_parity(
            &expected,
            outcome.clone().map_error_async(|error| yield_once(length(error))),
        );
        assert_parity(&expected, yield_once(outcome.clone()).map_error(length));
        assert_parity(
            &expected,
            yield_once(outcome.clone())
                .map_error_with(0_usize, |offset, error| length(error) + offset),
        );
        assert_parity(
            &expected,
            yield_once(outcome).map_error_async(|error| yield_once(length(error))),
        );
    }

    #[test]
    fn map_cancellation_forms_agree(outcome in any_outcome()) {
        let shout = |cancelled: Cancelled| cancelled.reason().to_uppercase();
        let expected = outcome.clone().map_cancellation(shout);

        assert_parity(
            &expected,
            outcome.clone().map_cancellation_async(|cancelled| yield_once(shout(cancelled))),
        );
        assert_parity(&expected, yield_once(outcome.clone()).map_cancellation(shout));
        assert_parity(
            &expected,
            yield_once(outcome.clone()).map_cancellation_with((), |(), cancelled| shout(cancelled)),
        );
        assert_parity(
            &expected,
            yield_once(outcome.clone())
                .map_cancellation_async(|cancelled| yield_once(shout(cancelled))),
        );
        assert_parity(
            &expected,
            yield_once(outcome).map_cancellation_async_with((), |(), cancelled| {
                yield_once(shout(cancelled))
            }),
        );
    }

    #[test]
    fn match_forms_agree_for_every_handler_mix(outcome in any_outcome()) {
        let expected = label(outcome.clone());
        let on_success = |value: i32| format!("success {value}");
        let on_failure = |error: Error| format!("failure {}", error.message());
        let on_cancelled = |cancelled: Cancelled| format!("cancelled {}", cancelled.reason());

        // Every eager/deferred combination of the three handlers.
        for mask in 0_u8..8 {
            let eager_source = outcome.clone();
            let pending_source = yield_once(outcome.clone());
            let (from_eager, from_pending) = match mask {
                0 => (
                    block_on(eager_source.match_async(
                        eager(on_success),
                        eager(on_failure),
                        eager(on_cancelled),
                    )),
                    block_on(pending_source.match_async(
                        eager(on_success),
                        eager(on_failure),
                        eager(on_cancelled),
                    )),
                ),
                1 => (
                    block_on(eager_source.match_async(
                        deferred(|value: i32| yield_once(on_success(value))),
                        eager(on_failure),
                        eager(on_cancelled),
                    )),
                    block_on(pending_source.match_async(
                        deferred(|value: i32| yield_once(on_success(value))),
                        eager(on_failure),
                        eager(on_cancelled),
                    )),
                ),
                2 => (
                    block_on(eager_source.match_async(
                        eager(on_success),
                        deferred(|error: Error| yield_once(on_failure(error))),
                        eager(on_cancelled),
                    )),
                    block_on(pending_source.match_async(
                        eager(on_success),
                        deferred(|error: Error| yield_once(on_failure(error))),
                        eager(on_cancelled),
                    )),
                ),
                3 => (
                    block_on(eager_source.match_async(
                        deferred(|value: i32| yield_once(on_success(value))),
                        deferred(|error: Error| yield_once(on_failure(error))),
                        eager(on_cancelled),
                    )),
                    block_on(pending_source.match_async(
                        deferred(|value: i32| yield_once(on_success(value))),
                        deferred(|error: Error| yield_once(on_failure(error))),
                        eager(on_cancelled),
                    )),
                ),
                4 => (
                    block_on(eager_source.match_async(
                        eager(on_success),
                        eager(on_failure),
                        deferred(|cancelled: Cancelled| yield_once(on_cancelled(cancelled))),
                    )),
                    block_on(pending_source.match_async(
                        eager(on_success),
                        eager(on_failure),
                        deferred(|cancelled: Cancelled| yield_once(on_cancelled(cancelled))),
                    )),
                ),
                5 => (
                    block_on(eager_source.match_async(
                        deferred(|value: i32| yield_once(on_success(value))),
                        eager(on_failure),
                        deferred(|cancelled: Cancelled| yield_once(on_cancelled(cancelled))),
                    )),
                    block_on(pending_source.match_async(
                        deferred(|value: i32| yield_once(on_success(value))),
                        eager(on_failure),
                        deferred(|cancelled: Cancelled| yield_once(on_cancelled(cancelled))),
                    )),
                ),
                6 => (
                    block_on(eager_source.match_async(
                        eager(on_success),
                        deferred(|error: Error| yield_once(on_failure(error))),
                        deferred(|cancelled: Cancelled| yield_once(on_cancelled(cancelled))),
                    )),
                    block_on(pending_source.match_async(
                        eager(on_success),
                        deferred(|error: Error| yield_once(on_failure(error))),
                        deferred(|cancelled: Cancelled| yield_once(on_cancelled(cancelled))),
                    )),
                ),
                _ => (
                    block_on(eager_source.match_async(
                        deferred(|value: i32| yield_once(on_success(value))),
                        deferred(|error: Error| yield_once(on_failure(error))),
                        deferred(|cancelled: Cancelled| yield_once(on_cancelled(cancelled))),
                    )),
                    block_on(pending_source.match_async(
                        deferred(|value: i32| yield_once(on_success(value))),
                        deferred(|error: Error| yield_once(on_failure(error))),
                        deferred(|cancelled: Cancelled| yield_once(on_cancelled(cancelled))),
                    )),
                ),
            };

            prop_assert_eq!(&from_eager, &expected);
            prop_assert_eq!(&from_pending, &expected);
        }

        assert_parity(
            &expected,
            yield_once(outcome.clone()).match_outcome(on_success, on_failure, on_cancelled),
        );
        assert_parity(
            &expected,
            yield_once(outcome).match_outcome_with(
                "",
                |prefix, value| format!("{prefix}{}", on_success(value)),
                |prefix, error| format!("{prefix}{}", on_failure(error)),
                |prefix, cancelled| format!("{prefix}{}", on_cancelled(cancelled)),
            ),
        );
    }
}

#[tokio::test]
async fn async_transforms_short_circuit_on_failure() {
    let counter = CallCounter::new();

    let selected = Outcome::failure(boom())
        .select_async(counter.track(|value: i32| yield_once(value)))
        .await;
    let pending_selected = yield_once(Outcome::failure(boom()))
        .select_async(counter.track(|value: i32| yield_once(value)))
        .await;
    let pending_bound = yield_once(Outcome::failure(boom()))
        .bind_async(counter.track(|value: i32| yield_once(Outcome::success(value))))
        .await;
    let pending_cancel_mapped = yield_once(Outcome::failure(boom()))
        .map_cancellation_async(counter.track(|cancelled: Cancelled| yield_once(cancelled)))
        .await;

    assert_eq!(counter.count(), 0);
    for result in [selected, pending_selected, pending_bound, pending_cancel_mapped] {
        assert_eq!(result, Outcome::failure(boom()));
    }
}

#[tokio::test]
async fn async_transforms_short_circuit_on_cancellation() {
    let counter = CallCounter::new();

    let bound = Outcome::cancelled(timeout())
        .bind_async_with(1, |offset, value: i32| {
            counter.hit();
            yield_once(Outcome::success(value + offset))
        })
        .await;
    let error_mapped = yield_once(Outcome::cancelled(timeout()))
        .map_error_async_with((), |(), error: Error| {
            counter.hit();
            yield_once(error)
        })
        .await;
    let folded = yield_once(Outcome::cancelled(timeout()))
        .match_async(
            deferred(counter.track(|value: i32| yield_once(value))),
            eager(counter.track(|_: Error| -1)),
            eager(|_: Cancelled| 0),
        )
        .await;

    assert_eq!(counter.count(), 0);
    assert_eq!(bound, Outcome::cancelled(timeout()));
    assert_eq!(error_mapped, Outcome::cancelled(timeout()));
    assert_eq!(folded, 0);
}

#[tokio::test]
async fn error_and_cancellation_transforms_skip_successes() {
    let counter = CallCounter::new();

    let eager_errors = Outcome::success(1)
        .map_error_async(counter.track(|error: Error| yield_once(error)))
        .await;
    let eager_cancels = Outcome::success(1)
        .map_cancellation_async_with((), |(), cancelled: Cancelled| {
            counter.hit();
            yield_once(cancelled)
        })
        .await;
    let pending_errors = yield_once(Outcome::success(1))
        .map_error_async(counter.track(|error: Error| yield_once(error)))
        .await;
    let pending_selected = yield_once(Outcome::cancelled(timeout()))
        .select_async_with(2, |factor, value: i32| {
            counter.hit();
            yield_once(value * factor)
        })
        .await;
    yield_once(Outcome::failure(boom()))
        .switch_async(
            eager(counter.track(|_: i32| ())),
            eager(|_: Error| ()),
            deferred(counter.track(|_: Cancelled| yield_once(()))),
        )
        .await;

    assert_eq!(counter.count(), 0);
    for result in [eager_errors, eager_cancels, pending_errors] {
        assert_eq!(result, Outcome::success(1));
    }
    assert_eq!(pending_selected, Outcome::cancelled(timeout()));
}

#[tokio::test]
async fn switch_forms_run_one_callback_per_branch() {
    for outcome in all_branches(7) {
        let expected = label(outcome.clone());
        let seen = RefCell::new(Vec::new());

        yield_once(outcome.clone())
            .switch(
                |value| record(&seen, Outcome::success(value)),
                |error| record(&seen, Outcome::failure(error)),
                |cancelled| record(&seen, Outcome::cancelled(cancelled)),
            )
            .await;
        yield_once(outcome.clone())
            .switch_with(
                &seen,
                |seen, value| record(seen, Outcome::success(value)),
                |seen, error| record(seen, Outcome::failure(error)),
                |seen, cancelled| record(seen, Outcome::cancelled(cancelled)),
            )
            .await;
        outcome
            .clone()
            .switch_async(
                deferred(|value: i32| {
                    record(&seen, Outcome::success(value));
                    yield_once(())
                }),
                eager(|error: Error| record(&seen, Outcome::failure(error))),
                eager_with(&seen, |seen: &RefCell<Vec<String>>, cancelled: Cancelled| {
                    record(seen, Outcome::cancelled(cancelled));
                }),
            )
            .await;
        yield_once(outcome)
            .switch_async(
                eager(|value: i32| record(&seen, Outcome::success(value))),
                deferred_with((), |(), error: Error| {
                    record(&seen, Outcome::failure(error));
                    yield_once(())
                }),
                eager(|cancelled: Cancelled| record(&seen, Outcome::cancelled(cancelled))),
            )
            .await;

        assert_eq!(seen.into_inner(), vec![expected; 4]);
    }
}

#[tokio::test]
async fn chained_pending_combinators_resolve_left_to_right() {
    let order = RefCell::new(Vec::new());
    let source = async {
        order.borrow_mut().push("source");
        yield_once(Outcome::success(2)).await
    };

    let answer = source
        .select_async(|value| {
            order.borrow_mut().push("select_async");
            yield_once(value + 1)
        })
        .map_error(|error| {
            order.borrow_mut().push("map_error");
            error
        })
        .bind(|value| {
            order.borrow_mut().push("bind");
            Outcome::success(value * 14)
        })
        .success_or(0)
        .await;

    assert_eq!(answer, 42);
    assert_eq!(order.into_inner(), vec!["source", "select_async", "bind"]);
}

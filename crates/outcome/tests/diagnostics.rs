//! Diagnostics emitted while resolving pending outcomes and decoding tags.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::Level;
use tristate_outcome::{Discriminant, OperationResult, OperationResultFuture};
use tristate_testkit::block_on;
use tristate_testkit::fixtures::boom;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured<R>(run: impl FnOnce() -> R) -> (R, String) {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(Level::TRACE)
        .finish();

    let output = tracing::subscriber::with_default(subscriber, run);
    (output, capture.contents())
}

#[test]
fn resolving_a_pending_source_traces_its_discriminant() {
    let (result, logs) = captured(|| {
        block_on(async { OperationResult::<i32>::failure(boom()) }.select(|value| value + 1))
    });

    assert!(result.is_failure());
    assert!(logs.contains("resolved pending operation result"), "{logs}");
    assert!(logs.contains("discriminant=failure"), "{logs}");
}

#[test]
fn rejected_discriminant_names_are_logged() {
    let (parsed, logs) = captured(|| "finished".parse::<Discriminant>());

    assert!(parsed.is_err());
    assert!(logs.contains("rejected operation result discriminant name"), "{logs}");
}

#[test]
fn eager_combinators_stay_silent() {
    let (result, logs) = captured(|| OperationResult::<i32>::success(1).select(|value| value * 2));

    assert_eq!(result, OperationResult::success(2));
    assert!(logs.is_empty(), "{logs}");
}

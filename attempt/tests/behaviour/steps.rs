//! Step definitions for the attempt scenarios.

use anyhow::{Result, anyhow, ensure};
use attempt::{Fault, Outcome, Recovery, attempt, attempt_fn};
use futures::executor::block_on;
use rstest_bdd_macros::{given, then, when};
use test_helpers::panic_hook;

use crate::fixtures::{AttemptContext, Source};

#[given("a computation that returns {value:i64}")]
fn returns_value(attempt_context: &AttemptContext, value: i64) {
    attempt_context.source.set(Source::Value(value));
}

#[given("a computation that fails with \"{message}\"")]
fn fails_with(attempt_context: &AttemptContext, message: String) {
    attempt_context.source.set(Source::Raise(message));
}

#[given("a deferred computation that fails with \"{message}\"")]
fn deferred_fails_with(attempt_context: &AttemptContext, message: String) {
    attempt_context.source.set(Source::DeferredRaise(message));
}

#[given("a computation that panics with \"{message}\"")]
fn panics_with(attempt_context: &AttemptContext, message: String) {
    attempt_context.source.set(Source::Panic(message));
}

#[when("the computation is attempted")]
fn run_attempt(attempt_context: &AttemptContext) -> Result<()> {
    let source = attempt_context
        .source
        .take()
        .ok_or_else(|| anyhow!("no computation configured"))?;
    let outcome: Outcome<i64, Fault<String>> = match source {
        Source::Value(value) => attempt_fn(move || Ok(value)),
        Source::Raise(message) => attempt_fn(move || Err(message)),
        Source::DeferredRaise(message) => block_on(attempt(async move { Err(message) })),
        Source::Panic(message) => {
            let _quiet = panic_hook::silence();
            attempt_fn(move || -> Result<i64, String> { panic!("{message}") })
        }
    };
    attempt_context.outcome.set(outcome);
    Ok(())
}

#[when("failures are recovered with {value:i64}")]
fn recover_with(attempt_context: &AttemptContext, value: i64) -> Result<()> {
    let outcome = attempt_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no outcome recorded"))?;
    let recovered = outcome.catch(|_| true, |_| Recovery::Recover(value));
    attempt_context.outcome.set(recovered);
    Ok(())
}

#[then("the outcome is resolved with {expected:i64}")]
fn resolved_with(attempt_context: &AttemptContext, expected: i64) -> Result<()> {
    let value = attempt_context
        .outcome
        .with_ref(|outcome| outcome.value().copied())
        .ok_or_else(|| anyhow!("no outcome recorded"))?;
    ensure!(value == Some(expected), "expected {expected}, got {value:?}");
    Ok(())
}

#[then("the outcome is rejected with \"{expected}\"")]
fn rejected_with(attempt_context: &AttemptContext, expected: String) -> Result<()> {
    let raised = attempt_context
        .outcome
        .with_ref(|outcome| outcome.error().and_then(Fault::raised).cloned())
        .ok_or_else(|| anyhow!("no outcome recorded"))?;
    ensure!(
        raised.as_deref() == Some(expected.as_str()),
        "expected rejection with {expected:?}, got {raised:?}"
    );
    Ok(())
}

#[then("the outcome holds a panic with message \"{expected}\"")]
fn panicked_with(attempt_context: &AttemptContext, expected: String) -> Result<()> {
    let message = attempt_context
        .outcome
        .with_ref(|outcome| {
            outcome
                .error()
                .and_then(Fault::panicked)
                .and_then(|panic| panic.message().map(str::to_owned))
        })
        .ok_or_else(|| anyhow!("no outcome recorded"))?;
    ensure!(
        message.as_deref() == Some(expected.as_str()),
        "expected panic {expected:?}, got {message:?}"
    );
    Ok(())
}

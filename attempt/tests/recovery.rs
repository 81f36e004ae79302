//! Integration tests for recovering from captured faults and re-raising them.

use std::num::ParseIntError;
use std::panic::{self, AssertUnwindSafe};

use anyhow::{Result, ensure};
use attempt::{Fault, IntoFault, Outcome, OutcomeExt, RaiseExt, Recovery, attempt_fn};
use rstest::rstest;
use test_helpers::panic_hook;

fn parse(input: &'static str) -> Outcome<i64, Fault<ParseIntError>> {
    attempt_fn(move || input.parse::<i64>())
}

#[rstest]
#[case::valid("12", 12)]
#[case::recovered("", -1)]
#[case::also_recovered("twelve", -1)]
fn raised_errors_can_be_recovered(#[case] input: &'static str, #[case] expected: i64) {
    let outcome = parse(input).catch_raised(|_| true, |_| Recovery::Recover(-1));
    assert_eq!(outcome.value(), Some(&expected));
}

#[test]
fn unmatched_raised_error_passes_through() {
    let outcome = parse("x").catch_raised(
        |err| err.kind() == &std::num::IntErrorKind::Empty,
        |_| Recovery::Recover(0),
    );
    assert!(outcome.error().and_then(Fault::raised).is_some());
}

#[test]
fn panics_are_not_offered_to_raised_handlers() {
    let _quiet = panic_hook::silence();
    let outcome = attempt_fn(|| -> Result<i64, ParseIntError> { panic!("bug") })
        .catch_raised(|_| true, |_| Recovery::Recover(0));
    assert!(outcome.error().is_some_and(Fault::is_panic));

    let recovered = outcome.catch_panic(|panic| {
        Recovery::Recover(i64::try_from(panic.message().map_or(0, str::len)).unwrap_or(0))
    });
    assert_eq!(recovered.value(), Some(&3));
}

#[test]
fn catch_panic_leaves_successes_alone() {
    let outcome = parse("5").catch_panic(|_| Recovery::Recover(0));
    assert_eq!(outcome.value(), Some(&5));
}

#[test]
fn raise_returns_the_stored_error() -> Result<()> {
    let raised = parse("nope").raise();
    ensure!(raised.is_err(), "parse failure should be raised");
    ensure!(parse("7").raise() == Ok(7), "success should be returned");
    Ok(())
}

#[test]
fn raise_resumes_captured_panics() {
    let _quiet = panic_hook::silence();
    let outcome = attempt_fn(|| -> Result<u8, String> { panic!("again") });
    let resumed = panic::catch_unwind(AssertUnwindSafe(|| outcome.raise()));
    let payload = resumed.expect_err("raise must resume the panic");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"again"));
}

#[test]
fn results_convert_into_outcomes_and_faults() {
    let outcome = "3".parse::<u8>().into_outcome();
    assert_eq!(outcome, Outcome::success(3));

    let lifted = "z".parse::<u8>().into_fault();
    assert!(lifted.is_err_and(|fault| !fault.is_panic()));
}

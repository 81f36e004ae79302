//! Unit tests for outcome discrimination, recovery and serialization.

use rstest::rstest;
use serde_json::json;

use super::{Outcome, Recovery, Status};

#[rstest]
#[case::success(Outcome::success(1), Status::Resolved)]
#[case::failure(Outcome::failure("e"), Status::Rejected)]
fn exactly_one_predicate_holds(#[case] outcome: Outcome<i32, &str>, #[case] status: Status) {
    assert_ne!(outcome.resolved(), outcome.rejected());
    assert_eq!(outcome.status(), status);
    assert_eq!(outcome.resolved(), status == Status::Resolved);
}

#[test]
fn accessors_are_stable_across_reads() {
    let outcome: Outcome<Vec<u8>, String> = Outcome::success(vec![1, 2]);
    for _ in 0..3 {
        assert!(outcome.resolved());
        assert_eq!(outcome.value(), Some(&vec![1, 2]));
        assert_eq!(outcome.error(), None);
    }
}

#[test]
fn unit_payload_is_still_a_success() {
    let outcome: Outcome<(), String> = Outcome::success(());
    assert!(outcome.resolved());
    assert_eq!(outcome.value(), Some(&()));

    let none: Outcome<Option<u8>, String> = Outcome::success(None);
    assert_eq!(none.into_value(), Some(None));
}

#[test]
fn assert_value_raises_the_stored_error() {
    let failed: Outcome<u8, &str> = Outcome::failure("boom");
    assert_eq!(failed.assert_value(), Err("boom"));
    assert_eq!(Outcome::<u8, &str>::success(4).assert_value(), Ok(4));
}

#[test]
fn result_round_trips_through_from() {
    let outcome = Outcome::from(Err::<u8, _>("bad"));
    assert_eq!(outcome.into_error(), Some("bad"));
    let back: Result<u8, &str> = Outcome::success(9).into();
    assert_eq!(back, Ok(9));
}

#[test]
fn map_and_map_err_touch_only_their_side() {
    let doubled = Outcome::<u8, &str>::success(2).map(|v| v * 2);
    assert_eq!(doubled, Outcome::success(4));
    let untouched = Outcome::<u8, &str>::failure("x").map(|v| v * 2);
    assert_eq!(untouched, Outcome::failure("x"));
    let lengthened = Outcome::<u8, &str>::failure("xyz").map_err(str::len);
    assert_eq!(lengthened, Outcome::failure(3));
}

#[test]
fn catch_never_runs_on_success() {
    let outcome: Outcome<u8, String> = Outcome::success(1);
    let caught = outcome.clone().catch(
        |_| panic!("predicate must not run on success"),
        |_| panic!("handler must not run on success"),
    );
    assert_eq!(caught, outcome);
}

#[rstest]
#[case::unmatched("denied", Outcome::failure(String::from("denied")))]
#[case::recovered("missing", Outcome::success(0))]
#[case::rethrown("timeout", Outcome::failure(String::from("timeout (retryable)")))]
fn catch_filters_by_predicate(#[case] error: &str, #[case] expected: Outcome<u8, String>) {
    let outcome: Outcome<u8, String> = Outcome::failure(error.to_owned());
    let caught = outcome.catch(
        |err| err == "missing" || err == "timeout",
        |err| {
            if err == "missing" {
                Recovery::Recover(0)
            } else {
                Recovery::Rethrow(format!("{err} (retryable)"))
            }
        },
    );
    assert_eq!(caught, expected);
}

#[rstest]
#[case::resolved(Outcome::success(5), json!({"status": "resolved", "value": 5}))]
#[case::rejected(Outcome::failure("bad".to_owned()), json!({"status": "rejected", "error": "bad"}))]
fn serializes_with_a_status_tag(
    #[case] outcome: Outcome<u8, String>,
    #[case] expected: serde_json::Value,
) {
    let encoded = serde_json::to_value(&outcome).expect("outcome serializes");
    assert_eq!(encoded, expected);
    let decoded: Outcome<u8, String> =
        serde_json::from_value(expected).expect("outcome deserializes");
    assert_eq!(decoded, outcome);
}

#[test]
fn unknown_status_is_rejected_by_deserializer() {
    let decoded = serde_json::from_value::<Outcome<u8, String>>(json!({"status": "pending"}));
    assert!(decoded.is_err());
}

#[test]
fn status_displays_lowercase_tag() {
    assert_eq!(Status::Resolved.to_string(), "resolved");
    assert_eq!(Status::Rejected.to_string(), "rejected");
}

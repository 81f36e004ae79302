//! Sample operations and the dispatcher that attempts them.

use attempt::{Attempter, Fault, Outcome};
use serde::Serialize;
use thiserror::Error;

use crate::cli::Operation;

/// Payload produced by the sample operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Numeric field.
    pub foo: u32,
    /// Text field.
    pub bar: String,
}

impl Record {
    fn sample() -> Self {
        Self {
            foo: 123,
            bar: "this is bar".to_owned(),
        }
    }
}

/// Error returned by the failing sample operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct OperationError(pub String);

/// Produces a record synchronously.
///
/// # Errors
///
/// Never fails; the signature matches the other operations.
pub fn sync_operation() -> Result<Record, OperationError> {
    Ok(Record::sample())
}

/// Produces a record after yielding to the runtime once.
///
/// # Errors
///
/// Never fails; the signature matches the other operations.
pub async fn async_operation() -> Result<Record, OperationError> {
    tokio::task::yield_now().await;
    Ok(Record::sample())
}

/// Fails with `message`.
///
/// # Errors
///
/// Always returns an [`OperationError`].
pub fn failing_operation(message: &str) -> Result<Record, OperationError> {
    Err(OperationError(message.to_owned()))
}

/// Panics with `message`.
///
/// # Errors
///
/// Never returns normally.
///
/// # Panics
///
/// Always.
#[expect(
    clippy::panic_in_result_fn,
    reason = "shares the signature of the fallible operations"
)]
pub fn panicking_operation(message: &str) -> Result<Record, OperationError> {
    panic!("{message}")
}

/// Runs `operation` through `attempter`.
pub async fn execute(
    attempter: &Attempter,
    operation: &Operation,
) -> Outcome<Record, Fault<OperationError>> {
    match operation {
        Operation::Sync => attempter.attempt_fn(sync_operation),
        Operation::Async => attempter.attempt(async_operation()).await,
        Operation::Fail { message } => attempter.attempt_fn(|| failing_operation(message)),
        Operation::Panic { message } => attempter.attempt_fn(|| panicking_operation(message)),
    }
}

#[cfg(test)]
mod tests {
    use attempt::{Attempter, Fault};
    use futures::FutureExt;
    use rstest::rstest;
    use test_helpers::panic_hook;

    use super::{OperationError, Record, execute};
    use crate::cli::Operation;

    #[rstest]
    #[case(Operation::Sync)]
    #[case(Operation::Async)]
    #[tokio::test]
    async fn successful_operations_resolve(#[case] operation: Operation) {
        let outcome = execute(&Attempter::default(), &operation).await;
        assert_eq!(outcome.value(), Some(&Record::sample()));
    }

    #[tokio::test]
    async fn failing_operation_is_rejected() {
        let operation = Operation::Fail {
            message: "nope".into(),
        };
        let outcome = execute(&Attempter::default(), &operation).await;
        assert_eq!(
            outcome.error().and_then(Fault::raised),
            Some(&OperationError("nope".into()))
        );
    }

    #[test]
    fn panicking_operation_is_captured() {
        let _quiet = panic_hook::silence();
        let operation = Operation::Panic {
            message: "bad".into(),
        };
        let outcome = execute(&Attempter::default(), &operation)
            .now_or_never()
            .expect("synchronous operations settle on the first poll");
        let panic = outcome.error().and_then(Fault::panicked);
        assert_eq!(panic.and_then(|p| p.message()), Some("bad"));
    }
}

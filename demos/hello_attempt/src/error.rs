//! Error types for the demo.
//!
//! `DemoError` wraps policy loading failures alongside the re-raised failure
//! of the attempted operation so `main` can report it.

use attempt::{Fault, PolicyError};
use thiserror::Error;

use crate::operations::OperationError;

/// Convenience alias for demo results.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Errors raised by the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// The attempt policy could not be loaded.
    #[error("failed to load attempt policy: {0}")]
    Policy(#[from] PolicyError),
    /// The attempted operation returned an error.
    #[error(transparent)]
    Operation(#[from] OperationError),
    /// The attempted operation panicked.
    #[error("operation panicked: {0}")]
    Panicked(String),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    /// Encoding the report failed.
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<Fault<OperationError>> for DemoError {
    fn from(fault: Fault<OperationError>) -> Self {
        match fault {
            Fault::Raised(error) => Self::Operation(error),
            Fault::Panicked(panic) => Self::Panicked(
                panic
                    .message()
                    .unwrap_or("non-string panic payload")
                    .to_owned(),
            ),
        }
    }
}

//! Error enums surfaced by the crate's own APIs.

use figment::Error as FigmentError;
use thiserror::Error;

use crate::fault::Fault;

/// Errors that can occur while loading an [`AttemptPolicy`](crate::AttemptPolicy).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PolicyError {
    /// Error while gathering policy values from providers.
    #[error("Failed to gather attempt policy: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// A gathered value is not acceptable.
    #[error("Validation failed for '{key}': {message}")]
    Validation {
        /// Policy key that failed validation.
        key: String,
        /// Human-readable explanation of the validation failure.
        message: String,
    },
}

/// Errors returned by [`Attempt::assert_value`](crate::Attempt::assert_value).
#[derive(Debug, Error)]
pub enum AssertError<E> {
    /// The underlying computation is still pending, so no value can be
    /// asserted synchronously.
    #[error("attempt has not settled; await it before asserting its value")]
    Unsettled,

    /// The outcome was already taken by awaiting the handle.
    #[error("attempt outcome was already taken by polling")]
    Consumed,

    /// The computation settled with a failure.
    #[error("{0}")]
    Rejected(Fault<E>),
}

//! Trait-based conversions into the crate's error types.

use figment::Error as FigmentError;

use super::{AssertError, PolicyError};
use crate::fault::Fault;

impl From<FigmentError> for PolicyError {
    fn from(e: FigmentError) -> Self {
        Self::Gathering(e.into())
    }
}

impl<E> From<Fault<E>> for AssertError<E> {
    fn from(fault: Fault<E>) -> Self {
        Self::Rejected(fault)
    }
}

impl PolicyError {
    /// Construct a validation error for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt::PolicyError;
    /// let e = PolicyError::validation("label", "must not be blank");
    /// assert_eq!(e.to_string(), "Validation failed for 'label': must not be blank");
    /// ```
    #[must_use]
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }
}

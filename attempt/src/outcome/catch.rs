//! Recovery hook for captured failures.

use super::Outcome;
use crate::fault::{Fault, Panicked};

/// Decision returned by a [`Outcome::catch`] handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery<T, E> {
    /// Replace the failure with a success holding this value.
    Recover(T),
    /// Keep failing, with this (possibly transformed) error.
    Rethrow(E),
}

impl<T, E> From<Recovery<T, E>> for Outcome<T, E> {
    fn from(recovery: Recovery<T, E>) -> Self {
        match recovery {
            Recovery::Recover(value) => Self::Success(value),
            Recovery::Rethrow(error) => Self::Failure(error),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Offers a captured error to `handler` when `predicate` accepts it.
    ///
    /// A success is returned unchanged and neither closure runs. A failure
    /// whose error is rejected by `predicate` is also returned unchanged.
    /// Otherwise the handler consumes the error and either recovers a value
    /// or rethrows a replacement error.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt::{Outcome, Recovery};
    ///
    /// let missing: Outcome<u16, String> = Outcome::failure("not found".into());
    /// let port = missing.catch(
    ///     |err| err.contains("not found"),
    ///     |_| Recovery::Recover(8080),
    /// );
    /// assert_eq!(port, Outcome::success(8080));
    ///
    /// let other: Outcome<u16, String> = Outcome::failure("denied".into());
    /// let unchanged = other.clone().catch(|err| err.contains("not found"), |_| Recovery::Recover(0));
    /// assert_eq!(unchanged, other);
    /// ```
    pub fn catch<P, H>(self, predicate: P, handler: H) -> Self
    where
        P: FnOnce(&E) -> bool,
        H: FnOnce(E) -> Recovery<T, E>,
    {
        match self {
            Self::Failure(error) => {
                if predicate(&error) {
                    handler(error).into()
                } else {
                    Self::Failure(error)
                }
            }
            success @ Self::Success(_) => success,
        }
    }
}

impl<T, E> Outcome<T, Fault<E>> {
    /// Offers a captured panic to `handler`. Successes and raised errors are
    /// returned unchanged.
    pub fn catch_panic<H>(self, handler: H) -> Self
    where
        H: FnOnce(Panicked) -> Recovery<T, Fault<E>>,
    {
        match self {
            Self::Failure(Fault::Panicked(panic)) => handler(panic).into(),
            other => other,
        }
    }

    /// Offers a raised error to `handler` when `predicate` accepts it.
    /// Successes, panics, and unmatched errors are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt::{Recovery, attempt_fn};
    ///
    /// let parsed = attempt_fn(|| "".parse::<i64>()).catch_raised(
    ///     |_| true,
    ///     |_| Recovery::Recover(0),
    /// );
    /// assert_eq!(parsed.value(), Some(&0));
    /// ```
    pub fn catch_raised<P, H>(self, predicate: P, handler: H) -> Self
    where
        P: FnOnce(&E) -> bool,
        H: FnOnce(E) -> Recovery<T, Fault<E>>,
    {
        match self {
            Self::Failure(Fault::Raised(error)) => {
                if predicate(&error) {
                    handler(error).into()
                } else {
                    Self::Failure(Fault::Raised(error))
                }
            }
            other => other,
        }
    }
}

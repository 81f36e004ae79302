//! The two-variant outcome produced by every attempt.
//!
//! An [`Outcome`] is either a [`Outcome::Success`] carrying the computed value
//! or a [`Outcome::Failure`] carrying the captured error. Callers discriminate
//! with `match`, `if let`, or the [`Outcome::resolved`] and
//! [`Outcome::rejected`] predicates before reaching for the payload.

mod catch;
mod status;
mod wire;

pub use catch::Recovery;
pub use status::Status;

/// Result of a computation that has already settled.
///
/// Unlike [`std::result::Result`], an `Outcome` is meant to be inspected
/// where it is produced rather than propagated with `?`. Use
/// [`Outcome::assert_value`] when propagation is what the caller wants.
///
/// # Examples
///
/// ```
/// use attempt::{Outcome, Status};
///
/// let outcome: Outcome<u8, &str> = Outcome::success(42);
/// assert!(outcome.resolved());
/// assert_eq!(outcome.status(), Status::Resolved);
/// if let Outcome::Success(value) = outcome {
///     assert_eq!(value, 42);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "an outcome may hold a captured failure which should be inspected"]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed; the captured error is kept verbatim.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a computed value.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a captured error.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns the settlement status of this outcome.
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Success(_) => Status::Resolved,
            Self::Failure(_) => Status::Rejected,
        }
    }

    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn resolved(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Outcome::Failure`].
    #[must_use]
    pub const fn rejected(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the stored value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the stored error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consumes the outcome, returning the value of a success.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the error of a failure.
    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the value, or raises the stored error by returning it as
    /// `Err` so the caller can propagate it with `?`.
    ///
    /// # Errors
    ///
    /// Returns the captured error when the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt::Outcome;
    ///
    /// fn first_word(outcome: Outcome<String, String>) -> Result<usize, String> {
    ///     let text = outcome.assert_value()?;
    ///     Ok(text.split_whitespace().count())
    /// }
    ///
    /// assert_eq!(first_word(Outcome::success("two words".into())), Ok(2));
    /// assert_eq!(first_word(Outcome::failure("nope".into())), Err("nope".into()));
    /// ```
    pub fn assert_value(self) -> Result<T, E> {
        self.into_result()
    }

    /// Converts the outcome into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the captured error when the outcome is a failure.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Maps the value of a success, leaving a failure untouched.
    pub fn map<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(op(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the error of a failure, leaving a success untouched.
    pub fn map_err<G, F>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(op(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

#[cfg(test)]
mod tests;

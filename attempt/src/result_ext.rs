//! Extensions bridging [`Result`] and [`Outcome`] concisely.
//!
//! These helpers reduce repetitive `match`/`map_err` plumbing at the
//! boundary between code that propagates with `?` and code that inspects
//! outcomes.
//!
//! - Use [`OutcomeExt::into_outcome`] to turn a `Result` into an `Outcome`
//!   without going through an attempt.
//! - Use [`IntoFault::into_fault`] when a `Result` has to line up with the
//!   `Fault<E>` error type produced by attempts.
//! - Use [`RaiseExt::raise`] at the end of a control flow to re-raise a
//!   captured failure: raised errors come back as `Err`, panics resume.
//!
//! # Examples
//!
//! ```
//! use attempt::{RaiseExt, attempt_fn};
//!
//! fn port() -> Result<u16, std::num::ParseIntError> {
//!     let outcome = attempt_fn(|| "8080".parse::<u16>());
//!     outcome.raise()
//! }
//!
//! assert_eq!(port().ok(), Some(8080));
//! ```

use crate::fault::Fault;
use crate::outcome::Outcome;

/// Converts a `Result<T, E>` into an `Outcome<T, E>`.
pub trait OutcomeExt<T, E> {
    /// Convert `Ok` into a success and `Err` into a failure.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> OutcomeExt<T, E> for Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}

/// Lifts the error of a `Result` into a raised [`Fault`].
pub trait IntoFault<T, E> {
    /// Convert `Result<T, E>` into `Result<T, Fault<E>>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`Fault::Raised`].
    fn into_fault(self) -> Result<T, Fault<E>>;
}

impl<T, E> IntoFault<T, E> for Result<T, E> {
    fn into_fault(self) -> Result<T, Fault<E>> {
        self.map_err(Fault::Raised)
    }
}

/// Re-raises a captured failure.
pub trait RaiseExt<T, E> {
    /// Return the value, hand back a raised error, or resume a panic.
    ///
    /// # Errors
    ///
    /// Returns the raised error of a failed outcome.
    ///
    /// # Panics
    ///
    /// Resumes unwinding when the outcome holds a captured panic.
    fn raise(self) -> Result<T, E>;
}

impl<T, E> RaiseExt<T, E> for Outcome<T, Fault<E>> {
    fn raise(self) -> Result<T, E> {
        self.assert_value().map_err(Fault::resume)
    }
}

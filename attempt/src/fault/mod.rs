//! Captured failure payloads.
//!
//! A computation handed to the attempt entry points can fail in two ways: it
//! returns `Err(e)`, or it unwinds. [`Fault`] records which one happened and
//! keeps the original payload so nothing about the failure is lost.

mod panicked;

use std::error::Error;
use std::fmt;

pub use panicked::Panicked;

/// Where a [`Fault`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultOrigin {
    /// The computation returned an error value.
    Raised,
    /// The computation panicked.
    Panicked,
}

impl fmt::Display for FaultOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Raised => "raised",
            Self::Panicked => "panicked",
        })
    }
}

/// A failure captured by an attempt.
///
/// # Examples
///
/// ```
/// use attempt::{Fault, attempt_fn};
///
/// let outcome = attempt_fn(|| "forty-two".parse::<u32>());
/// let fault = outcome.error().expect("parsing words fails");
/// assert!(matches!(fault, Fault::Raised(_)));
/// assert!(!fault.is_panic());
/// ```
#[derive(Debug)]
pub enum Fault<E> {
    /// The computation returned `Err` with this error.
    Raised(E),
    /// The computation unwound.
    Panicked(Panicked),
}

impl<E> Fault<E> {
    /// Reports whether the fault was raised or came from a panic.
    #[must_use]
    pub const fn origin(&self) -> FaultOrigin {
        match self {
            Self::Raised(_) => FaultOrigin::Raised,
            Self::Panicked(_) => FaultOrigin::Panicked,
        }
    }

    /// Returns `true` when the computation panicked.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    /// Borrows the raised error.
    #[must_use]
    pub const fn raised(&self) -> Option<&E> {
        match self {
            Self::Raised(error) => Some(error),
            Self::Panicked(_) => None,
        }
    }

    /// Borrows the captured panic.
    #[must_use]
    pub const fn panicked(&self) -> Option<&Panicked> {
        match self {
            Self::Raised(_) => None,
            Self::Panicked(panic) => Some(panic),
        }
    }

    /// Consumes the fault, returning the raised error.
    #[must_use]
    pub fn into_raised(self) -> Option<E> {
        match self {
            Self::Raised(error) => Some(error),
            Self::Panicked(_) => None,
        }
    }

    /// Transforms the raised error, keeping panics as they are.
    pub fn map<G, F>(self, op: F) -> Fault<G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Raised(error) => Fault::Raised(op(error)),
            Self::Panicked(panic) => Fault::Panicked(panic),
        }
    }

    /// Raises the fault again.
    ///
    /// A raised error is handed back for the caller to return; a panic
    /// resumes unwinding with its original payload.
    ///
    /// # Panics
    ///
    /// Resumes the captured panic for [`Fault::Panicked`].
    #[must_use]
    pub fn resume(self) -> E {
        match self {
            Self::Raised(error) => error,
            Self::Panicked(panic) => panic.resume(),
        }
    }
}

impl<E: fmt::Display> fmt::Display for Fault<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raised(error) => error.fmt(f),
            Self::Panicked(panic) => panic.fmt(f),
        }
    }
}

/// Transparent over the raised error: `Display` prints it and `source` is the
/// raised error's own source, not the raised error itself.
impl<E> Error for Fault<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Raised(error) => error.source(),
            Self::Panicked(_) => None,
        }
    }
}

impl<E: PartialEq> PartialEq for Fault<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Raised(lhs), Self::Raised(rhs)) => lhs == rhs,
            (Self::Panicked(lhs), Self::Panicked(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl<E> From<Panicked> for Fault<E> {
    fn from(panic: Panicked) -> Self {
        Self::Panicked(panic)
    }
}

//! What a callable handed to [`attempt_with`](crate::attempt_with) produces.

use std::fmt;
use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;

/// Explicit tag distinguishing a plain result from a deferred computation.
///
/// # Examples
///
/// ```
/// use attempt::Step;
///
/// let ready: Step<'_, u8, String> = Step::value(7);
/// assert!(ready.is_ready());
///
/// let deferred: Step<'_, u8, String> = Step::deferred(async { Ok(7) });
/// assert!(!deferred.is_ready());
/// ```
pub enum Step<'a, T, E> {
    /// The callable already produced its result.
    Ready(Result<T, E>),
    /// The callable returned work that settles later.
    Deferred(BoxFuture<'a, Result<T, E>>),
}

impl<'a, T, E> Step<'a, T, E> {
    /// A plain result.
    pub const fn ready(result: Result<T, E>) -> Self {
        Self::Ready(result)
    }

    /// A plain successful value.
    pub const fn value(value: T) -> Self {
        Self::Ready(Ok(value))
    }

    /// A deferred computation.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'a,
    {
        Self::Deferred(future.boxed())
    }

    /// Returns `true` when no suspension is needed.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

impl<T, E> From<Result<T, E>> for Step<'_, T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self::Ready(result)
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Step<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(result) => f.debug_tuple("Ready").field(result).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

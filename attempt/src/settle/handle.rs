//! The handle returned by the attempt entry points.

use std::fmt;
use std::future::Future;
use std::mem;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FusedFuture};

use crate::error::AssertError;
use crate::fault::Fault;
use crate::outcome::Outcome;

enum State<'a, T, E> {
    Settled(Outcome<T, Fault<E>>),
    Pending(BoxFuture<'a, Outcome<T, Fault<E>>>),
    Taken,
}

/// An attempt that may or may not have settled yet.
///
/// Awaiting the handle always yields an [`Outcome`]; it never resolves to an
/// error of its own. Handles built from a synchronous source are settled on
/// construction and can be inspected without awaiting via
/// [`Attempt::settled`] or [`Attempt::assert_value`].
///
/// # Examples
///
/// ```
/// use attempt::{Step, attempt_with};
///
/// # futures::executor::block_on(async {
/// let outcome = attempt_with(|| Step::<_, String>::deferred(async { Ok(5) })).await;
/// assert_eq!(outcome.value(), Some(&5));
/// # });
/// ```
#[must_use = "an attempt does nothing unless awaited or inspected"]
pub struct Attempt<'a, T, E> {
    state: State<'a, T, E>,
}

impl<'a, T, E> Attempt<'a, T, E> {
    pub(crate) const fn from_outcome(outcome: Outcome<T, Fault<E>>) -> Self {
        Self {
            state: State::Settled(outcome),
        }
    }

    pub(crate) fn from_future(future: BoxFuture<'a, Outcome<T, Fault<E>>>) -> Self {
        Self {
            state: State::Pending(future),
        }
    }

    /// Returns `true` when the outcome is available without awaiting.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self.state, State::Settled(_))
    }

    /// Takes the outcome if the attempt has settled, otherwise hands the
    /// pending attempt back untouched.
    ///
    /// # Errors
    ///
    /// Returns `self` when the computation has not settled.
    pub fn settled(self) -> Result<Outcome<T, Fault<E>>, Self> {
        match self.state {
            State::Settled(outcome) => Ok(outcome),
            state => Err(Self { state }),
        }
    }

    /// Returns the value of a settled success.
    ///
    /// # Errors
    ///
    /// Returns [`AssertError::Rejected`] for a settled failure,
    /// [`AssertError::Unsettled`] while the computation is still pending,
    /// and [`AssertError::Consumed`] once the outcome has been awaited.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt::{AssertError, Step, attempt_with};
    ///
    /// let ready = attempt_with(|| Step::<_, String>::value(3));
    /// assert_eq!(ready.assert_value().ok(), Some(3));
    ///
    /// let pending = attempt_with(|| Step::<u8, String>::deferred(async { Ok(3) }));
    /// assert!(matches!(pending.assert_value(), Err(AssertError::Unsettled)));
    /// ```
    pub fn assert_value(self) -> Result<T, AssertError<E>> {
        match self.state {
            State::Settled(outcome) => outcome.assert_value().map_err(AssertError::from),
            State::Pending(_) => Err(AssertError::Unsettled),
            State::Taken => Err(AssertError::Consumed),
        }
    }
}

// Pinning never projects into `state`; the pending future is boxed.
impl<T, E> Unpin for Attempt<'_, T, E> {}

impl<T, E> Future for Attempt<'_, T, E> {
    type Output = Outcome<T, Fault<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match mem::replace(&mut this.state, State::Taken) {
            State::Settled(outcome) => Poll::Ready(outcome),
            State::Pending(mut future) => match future.as_mut().poll(cx) {
                Poll::Ready(outcome) => Poll::Ready(outcome),
                Poll::Pending => {
                    this.state = State::Pending(future);
                    Poll::Pending
                }
            },
            State::Taken => panic!("`Attempt` polled after completion"),
        }
    }
}

impl<T, E> FusedFuture for Attempt<'_, T, E> {
    fn is_terminated(&self) -> bool {
        matches!(self.state, State::Taken)
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Attempt<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Settled(outcome) => f.debug_tuple("Attempt::Settled").field(outcome).finish(),
            State::Pending(_) => f.write_str("Attempt::Pending(..)"),
            State::Taken => f.write_str("Attempt::Taken"),
        }
    }
}

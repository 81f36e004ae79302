//! Entry points that run a computation and capture its failure.
//!
//! Three inputs are accepted, each through its own entry point:
//!
//! - [`attempt`] takes a future that is already built;
//! - [`attempt_fn`] takes a callable returning a plain [`Result`] and
//!   settles immediately;
//! - [`attempt_with`] takes a callable returning a [`Step`], which says
//!   whether the result is ready or still to be awaited.
//!
//! Every entry point runs the computation at most once and never reports a
//! failure of its own: returned errors become [`Fault::Raised`] and, unless
//! the policy disables it, panics become [`Fault::Panicked`].
//!
//! Captured panics still pass through the process panic hook, so the default
//! hook prints them to stderr.

mod handle;
mod report;
mod step;

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

pub use handle::Attempt;
pub use step::Step;

use crate::fault::{Fault, Panicked};
use crate::outcome::Outcome;
use crate::policy::AttemptPolicy;

/// Runs computations under an [`AttemptPolicy`].
///
/// The free functions [`attempt`], [`attempt_fn`] and [`attempt_with`] use
/// `Attempter::default()`.
///
/// # Examples
///
/// ```
/// use attempt::{AttemptPolicy, Attempter};
///
/// let attempter = Attempter::new(AttemptPolicy::default().with_label("parse-port"));
/// let outcome = attempter.attempt_fn(|| "8080".parse::<u16>());
/// assert_eq!(outcome.value(), Some(&8080));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Attempter {
    policy: AttemptPolicy,
}

impl Attempter {
    /// Creates an attempter governed by `policy`.
    #[must_use]
    pub const fn new(policy: AttemptPolicy) -> Self {
        Self { policy }
    }

    /// The governing policy.
    #[must_use]
    pub const fn policy(&self) -> &AttemptPolicy {
        &self.policy
    }

    /// Invokes `callable` once and captures its result without suspending.
    pub fn attempt_fn<T, E, F>(&self, callable: F) -> Outcome<T, Fault<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let outcome = match self.invoke(callable) {
            Ok(result) => into_outcome(result),
            Err(panic) => Outcome::Failure(Fault::Panicked(panic)),
        };
        report::report(&self.policy, &outcome);
        outcome
    }

    /// Awaits `future` and captures its result.
    pub fn attempt<'a, T, E, F>(&self, future: F) -> Attempt<'a, T, E>
    where
        F: Future<Output = Result<T, E>> + Send + 'a,
        T: Send + 'a,
        E: Send + 'a,
    {
        let policy = self.policy.clone();
        Attempt::from_future(
            async move {
                let settled = if policy.capture_panics {
                    AssertUnwindSafe(future)
                        .catch_unwind()
                        .await
                        .map_err(Panicked::new)
                } else {
                    Ok(future.await)
                };
                let outcome = match settled {
                    Ok(result) => into_outcome(result),
                    Err(panic) => Outcome::Failure(Fault::Panicked(panic)),
                };
                report::report(&policy, &outcome);
                outcome
            }
            .boxed(),
        )
    }

    /// Invokes `callable` once; awaits its result only if it is deferred.
    ///
    /// A panic raised while invoking the callable, or a ready result,
    /// settles the returned handle immediately.
    pub fn attempt_with<'a, T, E, C>(&self, callable: C) -> Attempt<'a, T, E>
    where
        C: FnOnce() -> Step<'a, T, E>,
        T: Send + 'a,
        E: Send + 'a,
    {
        match self.invoke(callable) {
            Ok(Step::Deferred(future)) => self.attempt(future),
            Ok(Step::Ready(result)) => {
                let outcome = into_outcome(result);
                report::report(&self.policy, &outcome);
                Attempt::from_outcome(outcome)
            }
            Err(panic) => {
                let outcome = Outcome::Failure(Fault::Panicked(panic));
                report::report(&self.policy, &outcome);
                Attempt::from_outcome(outcome)
            }
        }
    }

    fn invoke<R, F>(&self, callable: F) -> Result<R, Panicked>
    where
        F: FnOnce() -> R,
    {
        if self.policy.capture_panics {
            panic::catch_unwind(AssertUnwindSafe(callable)).map_err(Panicked::new)
        } else {
            Ok(callable())
        }
    }
}

fn into_outcome<T, E>(result: Result<T, E>) -> Outcome<T, Fault<E>> {
    match result {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Failure(Fault::Raised(error)),
    }
}

/// Awaits `future` and captures its result.
///
/// # Examples
///
/// ```
/// use attempt::attempt;
///
/// # futures::executor::block_on(async {
/// let outcome = attempt(async { Err::<u8, _>("fail") }).await;
/// assert!(outcome.rejected());
/// assert_eq!(outcome.error().and_then(|fault| fault.raised()), Some(&"fail"));
/// # });
/// ```
pub fn attempt<'a, T, E, F>(future: F) -> Attempt<'a, T, E>
where
    F: Future<Output = Result<T, E>> + Send + 'a,
    T: Send + 'a,
    E: Send + 'a,
{
    Attempter::default().attempt(future)
}

/// Invokes `callable` once and captures its result without suspending.
///
/// # Examples
///
/// ```
/// use attempt::attempt_fn;
///
/// let outcome = attempt_fn(|| -> Result<u8, &str> { panic!("boom") });
/// let panic = outcome.error().and_then(|fault| fault.panicked());
/// assert_eq!(panic.and_then(|p| p.message()), Some("boom"));
/// ```
pub fn attempt_fn<T, E, F>(callable: F) -> Outcome<T, Fault<E>>
where
    F: FnOnce() -> Result<T, E>,
{
    Attempter::default().attempt_fn(callable)
}

/// Invokes `callable` once; awaits its result only if it is deferred.
pub fn attempt_with<'a, T, E, C>(callable: C) -> Attempt<'a, T, E>
where
    C: FnOnce() -> Step<'a, T, E>,
    T: Send + 'a,
    E: Send + 'a,
{
    Attempter::default().attempt_with(callable)
}

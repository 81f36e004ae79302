//! Run fallible computations and always get an inspectable outcome.
//!
//! This crate turns a computation that may fail, whether it returns an error
//! or panics, into an [`Outcome`] that is always produced. The caller then
//! discriminates between [`Outcome::Success`] and [`Outcome::Failure`]
//! before touching the payload, instead of relying on `?` or unwinding to
//! carry failures away from the call site.
//!
//! ```
//! use attempt::{Outcome, attempt_fn};
//!
//! let outcome = attempt_fn(|| "42".parse::<i32>());
//! match outcome {
//!     Outcome::Success(value) => assert_eq!(value, 42),
//!     Outcome::Failure(fault) => panic!("unexpected failure: {fault}"),
//! }
//! ```
//!
//! Asynchronous work goes through [`attempt`] or [`attempt_with`], whose
//! [`Attempt`] handle resolves to the same kind of outcome.

mod error;
mod fault;
mod outcome;
mod policy;
mod result_ext;
mod settle;

pub use error::{AssertError, PolicyError, PolicyResult};
pub use fault::{Fault, FaultOrigin, Panicked};
pub use outcome::{Outcome, Recovery, Status};
pub use policy::{AttemptPolicy, DEFAULT_POLICY_FILE, ENV_PREFIX};
pub use result_ext::{IntoFault, OutcomeExt, RaiseExt};
pub use settle::{Attempt, Attempter, Step, attempt, attempt_fn, attempt_with};

//! `tracing` events for settled attempts.

use tracing::{debug, trace, warn};

use crate::fault::Fault;
use crate::outcome::Outcome;
use crate::policy::AttemptPolicy;

pub(super) fn report<T, E>(policy: &AttemptPolicy, outcome: &Outcome<T, Fault<E>>) {
    let label = policy.label_or_default();
    match outcome {
        Outcome::Success(_) => {
            trace!(target: "attempt", label, status = %outcome.status(), "computation resolved");
        }
        Outcome::Failure(_) if !policy.trace_failures => {}
        Outcome::Failure(Fault::Raised(_)) => debug!(
            target: "attempt",
            label,
            status = %outcome.status(),
            origin = "raised",
            "computation rejected"
        ),
        Outcome::Failure(Fault::Panicked(panic)) => warn!(
            target: "attempt",
            label,
            status = %outcome.status(),
            panic = panic.message().unwrap_or("<non-string payload>"),
            "computation panicked"
        ),
    }
}

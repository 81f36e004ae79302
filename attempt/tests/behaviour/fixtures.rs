//! Shared fixtures for the behavioural scenarios.

use attempt::{Fault, Outcome};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Computation a scenario asks the harness to attempt.
#[derive(Debug, Clone)]
pub enum Source {
    Value(i64),
    Raise(String),
    DeferredRaise(String),
    Panic(String),
}

/// Scenario state shared between steps.
#[derive(Default, ScenarioState)]
pub struct AttemptContext {
    pub source: Slot<Source>,
    pub outcome: Slot<Outcome<i64, Fault<String>>>,
}

/// Creates a clean context for each scenario.
#[fixture]
pub fn attempt_context() -> AttemptContext {
    AttemptContext::default()
}

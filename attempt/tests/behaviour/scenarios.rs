//! Binds the attempt feature file to the step registry.

use crate::fixtures::{AttemptContext, attempt_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/attempt.feature",
    fixtures = [attempt_context: AttemptContext]
);

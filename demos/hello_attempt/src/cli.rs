//! Command-line surface of the demo.

use attempt::AttemptPolicy;
use clap::{Parser, Subcommand};

use crate::error::Result;

/// Run a sample operation through `attempt` and print the outcome.
#[derive(Debug, Parser)]
#[command(name = "hello-attempt", version)]
pub struct Cli {
    /// Label attached to emitted `tracing` events.
    #[arg(long)]
    pub label: Option<String>,
    /// Let panics propagate instead of capturing them.
    #[arg(long)]
    pub no_capture: bool,
    /// Operation to attempt.
    #[command(subcommand)]
    pub command: Operation,
}

/// Sample operations.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Operation {
    /// Run the synchronous operation.
    Sync,
    /// Run the asynchronous operation.
    Async,
    /// Run an operation that returns an error.
    Fail {
        /// Error message to return.
        #[arg(long, default_value = "operation failed")]
        message: String,
    },
    /// Run an operation that panics.
    Panic {
        /// Panic message.
        #[arg(long, default_value = "operation panicked")]
        message: String,
    },
}

impl Cli {
    /// Loads the policy from `attempt.toml` and `ATTEMPT_*` variables, then
    /// applies command-line overrides on top.
    ///
    /// # Errors
    ///
    /// Returns an error when the file or environment layers are invalid.
    pub fn policy(&self) -> Result<AttemptPolicy> {
        let loaded = AttemptPolicy::load()?;
        Ok(self.apply_overrides(loaded))
    }

    fn apply_overrides(&self, mut policy: AttemptPolicy) -> AttemptPolicy {
        if let Some(label) = &self.label {
            policy = policy.with_label(label.clone());
        }
        if self.no_capture {
            policy = policy.with_panic_capture(false);
        }
        policy
    }
}

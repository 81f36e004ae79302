//! Runtime policy governing how attempts capture and report failures.
//!
//! Policies are plain `serde` structs extracted through `figment`, so they
//! can be layered from defaults, an optional TOML file, and
//! `ATTEMPT_`-prefixed environment variables.

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::{PolicyError, PolicyResult};

/// Prefix for environment variables read by [`AttemptPolicy::figment`].
pub const ENV_PREFIX: &str = "ATTEMPT_";

/// File consulted by [`AttemptPolicy::load`] when present.
pub const DEFAULT_POLICY_FILE: &str = "attempt.toml";

/// How attempts capture and report failures.
///
/// # Examples
///
/// ```
/// use attempt::AttemptPolicy;
///
/// let policy = AttemptPolicy::default().with_label("fetch-user");
/// assert!(policy.capture_panics);
/// assert_eq!(policy.label.as_deref(), Some("fetch-user"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttemptPolicy {
    /// Convert unwinding into [`Fault::Panicked`](crate::Fault::Panicked).
    ///
    /// When disabled, panics propagate to the caller (or the poller of an
    /// [`Attempt`](crate::Attempt)); returned errors are always captured.
    pub capture_panics: bool,
    /// Emit `tracing` events when a computation is rejected.
    pub trace_failures: bool,
    /// Name attached to emitted events.
    pub label: Option<String>,
}

impl Default for AttemptPolicy {
    fn default() -> Self {
        Self {
            capture_panics: true,
            trace_failures: true,
            label: None,
        }
    }
}

impl AttemptPolicy {
    /// Sets the label attached to emitted events.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Enables or disables panic capture.
    #[must_use]
    pub const fn with_panic_capture(mut self, enabled: bool) -> Self {
        self.capture_panics = enabled;
        self
    }

    /// Enables or disables failure events.
    #[must_use]
    pub const fn with_failure_tracing(mut self, enabled: bool) -> Self {
        self.trace_failures = enabled;
        self
    }

    /// Layers defaults, [`DEFAULT_POLICY_FILE`], and the environment.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_for(Utf8Path::new(DEFAULT_POLICY_FILE))
    }

    /// Layers defaults, the TOML file at `path`, and the environment.
    ///
    /// A missing file contributes nothing. Environment variables take
    /// precedence over the file.
    #[must_use]
    pub fn figment_for(path: &Utf8Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_std_path()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads the policy from [`AttemptPolicy::figment`].
    ///
    /// # Errors
    ///
    /// Returns a [`PolicyError`] if extraction or validation fails.
    pub fn load() -> PolicyResult<Self> {
        Self::from_figment(&Self::figment())
    }

    /// Loads the policy from the TOML file at `path` and the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`PolicyError`] if the file cannot be parsed or a value
    /// fails validation.
    pub fn load_from(path: impl AsRef<Utf8Path>) -> PolicyResult<Self> {
        Self::from_figment(&Self::figment_for(path.as_ref()))
    }

    /// Extracts and validates a policy from a caller-built figment.
    ///
    /// # Errors
    ///
    /// Returns a [`PolicyError`] if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> PolicyResult<Self> {
        let policy: Self = figment.extract()?;
        policy.validate()?;
        Ok(policy)
    }

    fn validate(&self) -> PolicyResult<()> {
        match self.label.as_deref() {
            Some(label) if label.trim().is_empty() => Err(PolicyError::validation(
                "label",
                "must not be blank when provided",
            )),
            _ => Ok(()),
        }
    }

    pub(crate) fn label_or_default(&self) -> &str {
        self.label.as_deref().unwrap_or("attempt")
    }
}

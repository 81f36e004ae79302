//! Error types produced by policy loading and value assertion.

mod conversions;
mod types;

pub use types::{AssertError, PolicyError};

/// Result alias for policy loading.
pub type PolicyResult<T> = Result<T, PolicyError>;

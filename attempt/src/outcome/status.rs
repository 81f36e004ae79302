//! The discriminant shared by both outcome variants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Settlement status of an [`Outcome`](super::Outcome).
///
/// The status is fixed by the variant that was constructed; there is no way
/// to change it without building a new outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The computation produced a value.
    Resolved,
    /// The computation failed and its error was captured.
    Rejected,
}

impl Status {
    /// Returns the lowercase tag used in logs and serialized outcomes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

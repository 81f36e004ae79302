//! Serialized form of an outcome: `{"status": "resolved", "value": ...}` or
//! `{"status": "rejected", "error": ...}`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Outcome;

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum WireRef<'a, T, E> {
    Resolved { value: &'a T },
    Rejected { error: &'a E },
}

#[derive(Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Wire<T, E> {
    Resolved { value: T },
    Rejected { error: E },
}

impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = match self {
            Self::Success(value) => WireRef::Resolved { value },
            Self::Failure(error) => WireRef::Rejected { error },
        };
        wire.serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Wire::deserialize(deserializer)? {
            Wire::Resolved { value } => Self::Success(value),
            Wire::Rejected { error } => Self::Failure(error),
        })
    }
}

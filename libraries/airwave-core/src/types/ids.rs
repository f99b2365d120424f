/// ID types for Airwave entities
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Track identifier
///
/// The upstream catalog emits ids as JSON numbers or strings depending on
/// the endpoint. Both forms deserialize into this opaque key, so nothing
/// past the ingress boundary ever branches on the id's shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TrackId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TrackId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for TrackId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => TrackId(n.to_string()),
            Raw::Text(s) => TrackId(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_id_from_string() {
        let id = TrackId::new("track-123");
        assert_eq!(id.as_str(), "track-123");
    }

    #[test]
    fn track_id_display() {
        let id = TrackId::new("abc");
        assert_eq!(format!("{}", id), "abc");
    }

    #[test]
    fn numeric_and_string_json_ids_compare_equal() {
        let from_number: TrackId = serde_json::from_str("123456").unwrap();
        let from_string: TrackId = serde_json::from_str("\"123456\"").unwrap();
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn track_id_serializes_as_plain_string() {
        let id = TrackId::from(42u64);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}

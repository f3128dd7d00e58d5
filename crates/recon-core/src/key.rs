//! Scalar record keys and lenient field readers.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A primary or foreign key value as it appeared in the JSON payload.
///
/// Text `"1"` and integer `1` are different keys; no coercion happens between
/// them. Non-scalar or fractional values are kept as their JSON text under
/// [`RecordKey::Other`] so they still participate in equality checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKey {
    Int(i64),
    Text(String),
    Other(String),
}

impl RecordKey {
    /// Convenience constructor for text keys.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::Text(s)),
            Value::Number(n) => Some(n.as_i64().map_or_else(|| Self::Other(n.to_string()), Self::Int)),
            other => Some(Self::Other(other.to_string())),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) | Self::Other(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RecordKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for RecordKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl<'de> Deserialize<'de> for RecordKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).ok_or_else(|| serde::de::Error::custom("record key cannot be null"))
    }
}

impl Serialize for RecordKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Text(s) | Self::Other(s) => serializer.serialize_str(s),
        }
    }
}

/// Deserialize an optional key, treating JSON `null` and absence alike.
pub(crate) fn optional_key<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<RecordKey>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(RecordKey::from_value))
}

/// Deserialize a display field without ever failing on an unexpected type.
///
/// Strings pass through, numbers are stringified, anything else is absent.
pub(crate) fn lenient_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Keep a text value only if it is non-empty.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_and_int_keys_are_distinct() {
        let text: RecordKey = serde_json::from_str(r#""1""#).unwrap();
        let int: RecordKey = serde_json::from_str("1").unwrap();
        assert_eq!(text, RecordKey::text("1"));
        assert_eq!(int, RecordKey::Int(1));
        assert_ne!(text, int);
    }

    #[test]
    fn fractional_and_structured_keys_fall_back_to_other() {
        let float: RecordKey = serde_json::from_str("1.5").unwrap();
        assert_eq!(float, RecordKey::Other("1.5".to_string()));

        let boolean: RecordKey = serde_json::from_str("true").unwrap();
        assert_eq!(boolean, RecordKey::Other("true".to_string()));
    }

    #[test]
    fn display_is_the_bare_value() {
        assert_eq!(RecordKey::text("D1").to_string(), "D1");
        assert_eq!(RecordKey::Int(42).to_string(), "42");
    }

    #[test]
    fn serializes_back_to_scalar_json() {
        assert_eq!(serde_json::to_string(&RecordKey::Int(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&RecordKey::text("V1")).unwrap(), r#""V1""#);
    }

    #[test]
    fn non_empty_drops_empty_strings() {
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("Ana")), Some("Ana"));
        assert_eq!(non_empty(None), None);
    }
}

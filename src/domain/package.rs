use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The subset of a manifest this tool cares about.
///
/// `version` is kept as a raw JSON value so that a malformed entry (a number,
/// `null`, an object) can be reported back to the user exactly as written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackageRecord {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "present")]
    pub version: Option<Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only a missing key is `None`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl PackageRecord {
    /// Package name, empty when the field is absent
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Human-readable rendering of the version field for messages.
    ///
    /// Strings are shown verbatim, other JSON values as JSON text and a
    /// missing field as `undefined`.
    pub fn version_display(&self) -> String {
        match &self.version {
            None => "undefined".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

//! Request parameters keyed by their documented names.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// An insertion-ordered map from parameter name to value.
///
/// Keys keep the casing the API documents (`SUBID`, `label`, ...). A key is
/// either present with a value or absent; optional parameters the caller did
/// not supply are simply never inserted.
///
/// ## Examples
///
/// ```rust
/// use vultr_rest::{Payload, Value};
///
/// let mut payload = Payload::from([("SUBID", Value::from(42))]);
/// let label: Option<&str> = None;
/// if let Some(label) = label {
///     payload.insert("label", label);
/// }
/// assert_eq!(payload.len(), 1);
/// assert!(payload.get("label").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    entries: Vec<(String, Value)>,
}

impl Payload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing an earlier value for the same key.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of parameters present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no parameter is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flattens the payload into query-string pairs.
    ///
    /// Strings are used verbatim, numbers and booleans are stringified,
    /// arrays become repeated `key[]` pairs, objects are sent as JSON text
    /// and nulls are dropped.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    let array_key = format!("{key}[]");
                    pairs.extend(
                        items
                            .iter()
                            .filter_map(scalar_text)
                            .map(|item| (array_key.clone(), item)),
                    );
                }
                other => {
                    if let Some(text) = scalar_text(other) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
        }
        pairs
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

impl<const N: usize> From<[(&str, Value); N]> for Payload {
    fn from(entries: [(&str, Value); N]) -> Self {
        let mut payload = Self::new();
        for (key, value) in entries {
            payload.insert(key, value);
        }
        payload
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

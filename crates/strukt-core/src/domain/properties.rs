//! Canonical property mapping.
//!
//! Structurizr exports encode node properties in two shapes:
//!
//! - List format: `[{"name": "key", "value": "val"}, ...]`
//! - Map format: `{"key": "val", ...}`
//!
//! The duck typing is resolved here, once, into an insertion-ordered
//! string-to-string mapping used everywhere downstream. Normalization is
//! total: an absent, empty, or unrecognized shape degrades to an empty
//! mapping, never an error.

use serde_json::Value;

/// Insertion-ordered property mapping with last-write-wins semantics.
///
/// Property counts per node are tiny, so lookups scan the backing vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
}

impl PropertyMap {
    /// Build the canonical mapping from the raw `properties` value.
    pub fn from_raw(raw: Option<&Value>) -> Self {
        let mut map = Self::default();
        match raw {
            Some(Value::Array(pairs)) => {
                for pair in pairs {
                    let (Some(name), Some(value)) = (pair.get("name"), pair.get("value")) else {
                        continue;
                    };
                    let Some(name) = name.as_str() else { continue };
                    if let Some(value) = scalar_to_string(value) {
                        map.insert(name, value);
                    }
                }
            }
            Some(Value::Object(fields)) => {
                for (name, value) in fields {
                    if let Some(value) = scalar_to_string(value) {
                        map.insert(name, value);
                    }
                }
            }
            _ => {}
        }
        map
    }

    fn insert(&mut self, name: &str, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_owned(), value));
        }
    }

    /// Look up a property by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Property values are strings by contract; numbers and booleans are
/// stringified, anything structured is dropped.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

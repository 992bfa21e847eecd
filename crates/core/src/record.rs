//! Record: field map for one remote entity
//!
//! A record is what the remote platform sends and receives for every entity
//! kind. Fields are kept in a `BTreeMap`, so iteration and serialization
//! order never depend on insertion order.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ID_FIELD, NAME_FIELD};

/// Caller-supplied parameters for an entity instance.
///
/// Parameters share the record representation; they are normalized into a
/// new mapping per kind before any remote call.
pub type Params = Record;

/// One remote entity as a mapping of field name to JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Get a string field
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Get an integer field.
    ///
    /// Platform identifiers are 64-bit integers but some payloads carry them
    /// as strings; both forms are accepted.
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        match self.0.get(field)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Set a field, returning the previous value
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Set a field only if the caller has not supplied it
    pub fn insert_default(&mut self, field: &str, value: impl Into<Value>) {
        if !self.0.contains_key(field) {
            self.0.insert(field.to_string(), value.into());
        }
    }

    /// Remove a field
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Whether the field is present (even if null)
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// The `id` field, if populated
    pub fn id(&self) -> Option<&Value> {
        self.0.get(ID_FIELD).filter(|v| !v.is_null())
    }

    /// The `name` field as a string
    pub fn name(&self) -> Option<&str> {
        self.get_str(NAME_FIELD)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Field names in key order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Convert into a JSON object value
    pub fn into_value(self) -> Value {
        Value::Object(self.0.into_iter().collect())
    }
}

impl From<BTreeMap<String, Value>> for Record {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Record {
    type Error = Value;

    /// Accepts JSON objects; any other value is handed back unchanged.
    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map.into_iter().collect())),
            other => Err(other),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_default_keeps_caller_value() {
        let mut rec = Record::new().with("type", "AGENCY");
        rec.insert_default("type", "ADVERTISER");
        rec.insert_default("name", "acme");
        assert_eq!(rec.get_str("type"), Some("AGENCY"));
        assert_eq!(rec.name(), Some("acme"));
    }

    #[test]
    fn test_get_i64_accepts_numeric_strings() {
        let rec = Record::new().with("a", 42).with("b", "43").with("c", "x");
        assert_eq!(rec.get_i64("a"), Some(42));
        assert_eq!(rec.get_i64("b"), Some(43));
        assert_eq!(rec.get_i64("c"), None);
        assert_eq!(rec.get_i64("d"), None);
    }

    #[test]
    fn test_null_id_is_not_populated() {
        let rec = Record::new().with("id", Value::Null);
        assert!(rec.contains("id"));
        assert!(rec.id().is_none());
    }

    #[test]
    fn test_serialization_ignores_insertion_order() {
        let a = Record::new().with("name", "geo").with("type", "PREDEFINED");
        let b = Record::new().with("type", "PREDEFINED").with("name", "geo");
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_try_from_json() {
        let rec = Record::try_from(json!({"name": "geo", "id": 7})).unwrap();
        assert_eq!(rec.name(), Some("geo"));
        assert_eq!(rec.get_i64("id"), Some(7));
        assert!(Record::try_from(json!([1, 2])).is_err());
    }
}

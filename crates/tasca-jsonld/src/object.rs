//! SchemaObject - an untyped schema.org JSON-LD node.
//!
//! Builders assemble these field by field; the graph combiner and the
//! validator treat them as plain JSON objects.
//!
//! Serializes transparently as the underlying JSON object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The only `@context` this crate emits.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A schema.org node (`@type` plus type-specific fields).
///
/// Field order is insertion order, so documents built with [`document`]
/// always start with `@context` and `@type`.
///
/// [`document`]: SchemaObject::document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaObject(Map<String, Value>);

impl SchemaObject {
    /// A nested node: `@type` only, no `@context`.
    pub fn new(schema_type: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("@type".to_string(), Value::String(schema_type.into()));
        Self(map)
    }

    /// A top-level node: `@context` followed by `@type`.
    pub fn document(schema_type: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert(
            "@context".to_string(),
            Value::String(SCHEMA_CONTEXT.to_string()),
        );
        map.insert("@type".to_string(), Value::String(schema_type.into()));
        Self(map)
    }

    /// Wrap an existing JSON value. Returns `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Set a field.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Set a field only when a value is present. Absent values leave the
    /// field out entirely rather than writing `null`.
    pub fn with_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Set `@id`.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with("@id", id.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn schema_type(&self) -> Option<&str> {
        self.get_str("@type")
    }

    pub fn id(&self) -> Option<&str> {
        self.get_str("@id")
    }

    pub fn context(&self) -> Option<&str> {
        self.get_str("@context")
    }

    /// String field accessor.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Nested object accessor, e.g. `itemReviewed` or `address`.
    pub fn get_object(&self, key: &str) -> Option<SchemaObject> {
        self.0
            .get(key)
            .cloned()
            .and_then(SchemaObject::from_value)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<SchemaObject> for Value {
    fn from(object: SchemaObject) -> Self {
        object.into_value()
    }
}

/// `Some(text)` only for present, non-empty strings. JS-style truthiness for
/// optional CMS text.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

//! Event model: a JSON object whose fields are addressed by dotted keys.
//!
//! `get_value("url.original")` walks into `{"url": {"original": ..}}`, but a
//! top-level key spelled `"url.original"` is found first. `put_value` creates
//! intermediate objects as needed and fails when a segment holds a non-object.

mod error;
mod path;

pub use error::EventError;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record flowing through the transform. `Clone` is a deep copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event {
    fields: Map<String, Value>,
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wraps a JSON object; any other JSON value yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    pub fn get_value(&self, key: &str) -> Result<&Value, EventError> {
        path::find(&self.fields, key)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.get_value(key).is_ok()
    }

    /// Sets `key` to `value`, returning the value it replaced.
    pub fn put_value(&mut self, key: &str, value: Value) -> Result<Option<Value>, EventError> {
        path::put(&mut self.fields, key, value)
    }
}

/// Name of a JSON value's type, for diagnostics.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

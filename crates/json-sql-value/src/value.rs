use std::collections::BTreeMap;
use std::fmt;

use crate::{JsonType, LiteralMarker, TypeCode};

/// Members of a JSON object, kept in sorted key order.
pub type JsonObject = BTreeMap<String, JsonValue>;

/// A fully materialized JSON document node.
///
/// Objects and arrays own their children. Null and booleans are separate
/// variants; [`JsonValue::type_code`] still reports both as a literal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    Object(JsonObject),
    Array(Vec<JsonValue>),
    #[default]
    Null,
    Bool(bool),
    Int64(i64),
    Float64(f64),
    String(String),
}

impl JsonValue {
    /// Type name as returned by `JSON_TYPE`.
    pub fn type_name(&self) -> &'static str {
        self.json_type().as_str()
    }

    pub fn json_type(&self) -> JsonType {
        match self {
            JsonValue::Object(_) => JsonType::Object,
            JsonValue::Array(_) => JsonType::Array,
            JsonValue::Null => JsonType::Null,
            JsonValue::Bool(_) => JsonType::Boolean,
            JsonValue::Int64(_) => JsonType::Integer,
            JsonValue::Float64(_) => JsonType::Double,
            JsonValue::String(_) => JsonType::String,
        }
    }

    /// Type code this value carries in the binary encoding.
    pub fn type_code(&self) -> TypeCode {
        match self {
            JsonValue::Object(_) => TypeCode::Object,
            JsonValue::Array(_) => TypeCode::Array,
            JsonValue::Null | JsonValue::Bool(_) => TypeCode::Literal,
            JsonValue::Int64(_) => TypeCode::Int64,
            JsonValue::Float64(_) => TypeCode::Float64,
            JsonValue::String(_) => TypeCode::String,
        }
    }

    /// Marker distinguishing null from the booleans; `None` for non-literals.
    pub fn literal_marker(&self) -> Option<LiteralMarker> {
        match self {
            JsonValue::Null => Some(LiteralMarker::Null),
            JsonValue::Bool(true) => Some(LiteralMarker::True),
            JsonValue::Bool(false) => Some(LiteralMarker::False),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Wrap `self` in a single-element array, leaving `self` as that array.
    pub fn wrap_in_array(&mut self) {
        let first = std::mem::take(self);
        *self = JsonValue::Array(vec![first]);
    }
}

impl fmt::Display for JsonValue {
    /// Compact JSON text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<i64> for JsonValue {
    fn from(i: i64) -> Self {
        JsonValue::Int64(i)
    }
}

impl From<f64> for JsonValue {
    fn from(f: f64) -> Self {
        JsonValue::Float64(f)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(arr: Vec<JsonValue>) -> Self {
        JsonValue::Array(arr)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(map: JsonObject) -> Self {
        JsonValue::Object(map)
    }
}

//! Path extraction, merge and mutation over [`JsonValue`] trees, the core of
//! the SQL `JSON_*` functions.
//!
//! # Example
//!
//! ```
//! use json_sql_functions::{extract, json_set, merge};
//! use json_sql_path::{PathExpression, PathLeg};
//! use json_sql_value::JsonValue;
//! use serde_json::json;
//!
//! let mut doc = JsonValue::from(json!({"b": 1, "a": 2}));
//!
//! let all = PathExpression::new(vec![PathLeg::any_key()]);
//! assert_eq!(extract(&doc, &[all]).unwrap(), Some(JsonValue::from(json!([2, 1]))));
//!
//! let c = PathExpression::new(vec![PathLeg::key("c")]);
//! json_set(&mut doc, &[c], vec![JsonValue::from("new")]).unwrap();
//! assert_eq!(doc, JsonValue::from(json!({"a": 2, "b": 1, "c": "new"})));
//!
//! merge(&mut doc, vec![JsonValue::Int64(5)]);
//! assert_eq!(doc.type_name(), "ARRAY");
//! ```

mod error;
pub use error::JsonError;

mod options;
pub use options::{JsonFunctions, JsonFunctionsOptions, DEFAULT_MAX_DEPTH};

mod unquote;
pub use unquote::{unquote, unquote_string};

mod extract;
pub use extract::extract;

mod merge;
pub use merge::merge;

mod modify;
pub use modify::{json_insert, json_replace, json_set, set_insert_replace, ModifyType};

use json_sql_value::{JsonType, JsonValue};

/// `JSON_TYPE`.
pub fn json_type(value: &JsonValue) -> &'static str {
    value.type_name()
}

/// `JSON_TYPE` for a value known only by its stored type code and literal
/// marker byte (the marker is ignored unless the code is the literal code).
///
/// # Errors
///
/// [`JsonError::Value`] when `type_code` names no value variant.
pub fn json_type_from_raw(type_code: u8, literal_marker: u8) -> Result<JsonType, JsonError> {
    Ok(JsonType::from_raw(type_code, literal_marker)?)
}

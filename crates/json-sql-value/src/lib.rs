//! JSON value model for the SQL JSON functions.
//!
//! [`JsonValue`] is the tree every path query and mutation operates on.
//! Objects keep their members in a `BTreeMap`, so iterating an object always
//! yields keys in sorted order.
//!
//! # Example
//!
//! ```
//! use json_sql_value::JsonValue;
//! use serde_json::json;
//!
//! let doc = JsonValue::from(json!({"b": 1, "a": [true, null]}));
//! assert_eq!(doc.type_name(), "OBJECT");
//! assert_eq!(doc.to_string(), r#"{"a":[true,null],"b":1}"#);
//! ```

mod error;
pub use error::ValueError;

mod types;
pub use types::{JsonType, LiteralMarker, TypeCode};

mod value;
pub use value::{JsonObject, JsonValue};

mod serde_impl;

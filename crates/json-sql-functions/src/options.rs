//! Engine options.

use json_sql_path::PathExpression;
use json_sql_value::JsonValue;

use crate::error::JsonError;
use crate::modify::ModifyType;

/// Default nesting limit for recursive matching and mutation.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Options for [`JsonFunctions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonFunctionsOptions {
    /// Deepest document level the engine descends into before failing with
    /// [`JsonError::DepthExceeded`].
    pub max_depth: usize,
}

impl Default for JsonFunctionsOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Path query and mutation engine configured with [`JsonFunctionsOptions`].
///
/// The free functions [`crate::extract()`] and [`crate::set_insert_replace()`]
/// run on a default-configured engine.
#[derive(Debug, Clone, Default)]
pub struct JsonFunctions {
    options: JsonFunctionsOptions,
}

impl JsonFunctions {
    pub fn new(options: JsonFunctionsOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &JsonFunctionsOptions {
        &self.options
    }

    /// `JSON_EXTRACT`. See [`crate::extract()`].
    pub fn extract(
        &self,
        value: &JsonValue,
        paths: &[PathExpression],
    ) -> Result<Option<JsonValue>, JsonError> {
        crate::extract::extract_all(value, paths, self.options.max_depth)
    }

    /// `JSON_INSERT` / `JSON_REPLACE` / `JSON_SET`. See [`crate::set_insert_replace()`].
    pub fn set_insert_replace(
        &self,
        doc: &mut JsonValue,
        paths: &[PathExpression],
        values: Vec<JsonValue>,
        modify_type: ModifyType,
    ) -> Result<(), JsonError> {
        crate::modify::apply_all(doc, paths, values, modify_type, self.options.max_depth)
    }
}

use json_sql_value::ValueError;
use thiserror::Error;

pub(crate) const MISSING_CLOSING_QUOTE: &str = "Missing a closing quotation mark in string";
pub(crate) const INVALID_UNICODE: &str = "Invalid unicode";

/// Errors surfaced by the JSON functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("Incorrect parameter count: {paths} path(s) for {values} value(s)")]
    ArgumentCountMismatch { paths: usize, values: usize },

    /// Mutations only accept paths without `*` and `**`.
    #[error("Invalid path expression {path}")]
    InvalidPathForMutation { path: String },

    #[error("{0}")]
    MalformedEscape(String),

    #[error("Invalid modify type {0:#04x}")]
    InvalidModifyType(u8),

    #[error("JSON document nested deeper than {max_depth} levels")]
    DepthExceeded { max_depth: usize },

    #[error(transparent)]
    Value(#[from] ValueError),
}

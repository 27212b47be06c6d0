use thiserror::Error;

/// Errors raised by the value model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A raw type code that no value variant maps to. This is a construction
    /// bug in whatever produced the bytes, not a user-facing condition.
    #[error("unknown type code {type_code:#04x} for JSON value")]
    InvariantViolation { type_code: u8 },
}

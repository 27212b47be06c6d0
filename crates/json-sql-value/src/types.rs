//! Type names and the raw type codes of the binary JSON encoding.

use std::fmt;

use crate::ValueError;

/// Type code byte of the binary JSON encoding.
///
/// Null and the two booleans share [`TypeCode::Literal`] and are told apart
/// by a [`LiteralMarker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeCode {
    Object = 0x01,
    Array = 0x03,
    Literal = 0x04,
    Int64 = 0x09,
    Float64 = 0x0b,
    String = 0x0c,
}

impl TypeCode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for TypeCode {
    type Error = ValueError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x01 => Ok(TypeCode::Object),
            0x03 => Ok(TypeCode::Array),
            0x04 => Ok(TypeCode::Literal),
            0x09 => Ok(TypeCode::Int64),
            0x0b => Ok(TypeCode::Float64),
            0x0c => Ok(TypeCode::String),
            _ => Err(ValueError::InvariantViolation { type_code: code }),
        }
    }
}

/// Marker byte stored with a [`TypeCode::Literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LiteralMarker {
    Null = 0x00,
    True = 0x01,
    False = 0x02,
}

impl LiteralMarker {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// The type reported by `JSON_TYPE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Object,
    Array,
    Null,
    Boolean,
    Integer,
    Double,
    String,
}

impl JsonType {
    /// Resolve a type from raw encoding bytes.
    ///
    /// The literal marker is only consulted for [`TypeCode::Literal`]; any
    /// marker other than null reads as a boolean.
    pub fn from_raw(type_code: u8, literal_marker: u8) -> Result<Self, ValueError> {
        let ty = match TypeCode::try_from(type_code)? {
            TypeCode::Object => JsonType::Object,
            TypeCode::Array => JsonType::Array,
            TypeCode::Literal if literal_marker == LiteralMarker::Null.as_u8() => JsonType::Null,
            TypeCode::Literal => JsonType::Boolean,
            TypeCode::Int64 => JsonType::Integer,
            TypeCode::Float64 => JsonType::Double,
            TypeCode::String => JsonType::String,
        };
        Ok(ty)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::Object => "OBJECT",
            JsonType::Array => "ARRAY",
            JsonType::Null => "NULL",
            JsonType::Boolean => "BOOLEAN",
            JsonType::Integer => "INTEGER",
            JsonType::Double => "DOUBLE",
            JsonType::String => "STRING",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! `JSON_INSERT`, `JSON_REPLACE` and `JSON_SET`.

use json_sql_path::{IndexSelector, KeySelector, PathExpression, PathLeg};
use json_sql_value::JsonValue;

use crate::error::JsonError;
use crate::options::JsonFunctions;

/// What a mutation may do to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ModifyType {
    /// Only create members and elements that do not exist yet.
    Insert = 0x01,
    /// Only overwrite members and elements that already exist.
    Replace = 0x02,
    /// Both.
    Set = 0x03,
}

impl ModifyType {
    pub fn bits(self) -> u8 {
        self as u8
    }

    pub fn allows_insert(self) -> bool {
        self.bits() & ModifyType::Insert.bits() != 0
    }

    pub fn allows_replace(self) -> bool {
        self.bits() & ModifyType::Replace.bits() != 0
    }
}

impl TryFrom<u8> for ModifyType {
    type Error = JsonError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0x01 => Ok(ModifyType::Insert),
            0x02 => Ok(ModifyType::Replace),
            0x03 => Ok(ModifyType::Set),
            _ => Err(JsonError::InvalidModifyType(bits)),
        }
    }
}

/// Write `values[i]` at `paths[i]` for every pair, in order; each write sees
/// the document left by the previous one.
///
/// At an existing slot the write recurses (when `modify_type` allows
/// replacing). At a missing final slot it inserts (when it allows inserting):
/// objects get the key set, arrays get the value appended at the end no
/// matter which index was asked for. Anything else leaves the document as is.
///
/// # Errors
///
/// - [`JsonError::ArgumentCountMismatch`] if the slices differ in length
/// - [`JsonError::InvalidPathForMutation`] if any path contains `*` or `**`
/// - [`JsonError::DepthExceeded`] if a write would descend past the
///   default nesting limit
///
/// Arguments are checked before the first write; on error `doc` is untouched.
pub fn set_insert_replace(
    doc: &mut JsonValue,
    paths: &[PathExpression],
    values: Vec<JsonValue>,
    modify_type: ModifyType,
) -> Result<(), JsonError> {
    JsonFunctions::default().set_insert_replace(doc, paths, values, modify_type)
}

/// `JSON_INSERT`: add values at missing paths only.
pub fn json_insert(
    doc: &mut JsonValue,
    paths: &[PathExpression],
    values: Vec<JsonValue>,
) -> Result<(), JsonError> {
    set_insert_replace(doc, paths, values, ModifyType::Insert)
}

/// `JSON_REPLACE`: overwrite values at existing paths only.
pub fn json_replace(
    doc: &mut JsonValue,
    paths: &[PathExpression],
    values: Vec<JsonValue>,
) -> Result<(), JsonError> {
    set_insert_replace(doc, paths, values, ModifyType::Replace)
}

/// `JSON_SET`: insert or overwrite.
pub fn json_set(
    doc: &mut JsonValue,
    paths: &[PathExpression],
    values: Vec<JsonValue>,
) -> Result<(), JsonError> {
    set_insert_replace(doc, paths, values, ModifyType::Set)
}

pub(crate) fn apply_all(
    doc: &mut JsonValue,
    paths: &[PathExpression],
    values: Vec<JsonValue>,
    modify_type: ModifyType,
    max_depth: usize,
) -> Result<(), JsonError> {
    if paths.len() != values.len() {
        tracing::debug!(
            paths = paths.len(),
            values = values.len(),
            "mutation rejected: argument count mismatch"
        );
        return Err(JsonError::ArgumentCountMismatch {
            paths: paths.len(),
            values: values.len(),
        });
    }
    for path in paths {
        if path.contains_any_asterisk() {
            tracing::debug!(path = %path, "mutation rejected: wildcard in path");
            return Err(JsonError::InvalidPathForMutation {
                path: path.to_string(),
            });
        }
    }

    // A write descends at most one level per leg, so only a path longer than
    // the limit can fail midway. Those run on a scratch copy.
    if paths.iter().any(|path| path.len() > max_depth) {
        let mut scratch = doc.clone();
        apply_pairs(&mut scratch, paths, values, modify_type, max_depth)?;
        *doc = scratch;
        return Ok(());
    }
    apply_pairs(doc, paths, values, modify_type, max_depth)
}

fn apply_pairs(
    doc: &mut JsonValue,
    paths: &[PathExpression],
    values: Vec<JsonValue>,
    modify_type: ModifyType,
    max_depth: usize,
) -> Result<(), JsonError> {
    for (path, value) in paths.iter().zip(values) {
        tracing::trace!(path = %path, ?modify_type, "applying mutation");
        set(doc, path.legs(), value, modify_type, 0, max_depth)?;
    }
    Ok(())
}

fn set(
    target: &mut JsonValue,
    legs: &[PathLeg],
    value: JsonValue,
    modify_type: ModifyType,
    depth: usize,
    max_depth: usize,
) -> Result<(), JsonError> {
    if depth > max_depth {
        tracing::debug!(max_depth, "mutation: nesting limit reached");
        return Err(JsonError::DepthExceeded { max_depth });
    }
    let Some((leg, rest)) = legs.split_first() else {
        *target = value;
        return Ok(());
    };

    match (leg, target) {
        (PathLeg::Index(IndexSelector::At(index)), JsonValue::Array(elems)) => {
            if *index < elems.len() && modify_type.allows_replace() {
                set(&mut elems[*index], rest, value, modify_type, depth + 1, max_depth)?;
            } else if rest.is_empty() && modify_type.allows_insert() {
                elems.push(value);
            }
        }
        (PathLeg::Key(KeySelector::Name(key)), JsonValue::Object(members)) => {
            if modify_type.allows_replace() {
                if let Some(child) = members.get_mut(key) {
                    return set(child, rest, value, modify_type, depth + 1, max_depth);
                }
            }
            if rest.is_empty() && modify_type.allows_insert() {
                members.insert(key.clone(), value);
            }
        }
        _ => {}
    }
    Ok(())
}

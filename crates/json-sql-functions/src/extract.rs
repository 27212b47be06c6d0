//! `JSON_EXTRACT`.

use json_sql_path::{IndexSelector, KeySelector, PathExpression, PathLeg};
use json_sql_value::JsonValue;

use crate::error::JsonError;
use crate::options::JsonFunctions;

/// Match every path expression against `value` and collect the results.
///
/// Returns `None` when nothing matched. A single path with a single match
/// returns that value as is; any other combination is wrapped in an array
/// holding every match in order. Matches are copies, independent of `value`.
///
/// Object members are visited in sorted key order by `.*` and `**`.
///
/// # Errors
///
/// [`JsonError::DepthExceeded`] when `**` descends deeper than the default
/// nesting limit.
pub fn extract(value: &JsonValue, paths: &[PathExpression]) -> Result<Option<JsonValue>, JsonError> {
    JsonFunctions::default().extract(value, paths)
}

pub(crate) fn extract_all(
    value: &JsonValue,
    paths: &[PathExpression],
    max_depth: usize,
) -> Result<Option<JsonValue>, JsonError> {
    let mut matches: Vec<&JsonValue> = Vec::new();
    for path in paths {
        collect_matches(value, path.legs(), 0, max_depth, &mut matches)?;
    }

    let result = match matches.as_slice() {
        [] => None,
        [single] if paths.len() == 1 => Some((*single).clone()),
        _ => Some(JsonValue::Array(matches.iter().map(|v| (*v).clone()).collect())),
    };
    Ok(result)
}

fn collect_matches<'a>(
    value: &'a JsonValue,
    legs: &[PathLeg],
    depth: usize,
    max_depth: usize,
    out: &mut Vec<&'a JsonValue>,
) -> Result<(), JsonError> {
    if depth > max_depth {
        tracing::debug!(max_depth, "extract: nesting limit reached");
        return Err(JsonError::DepthExceeded { max_depth });
    }
    let Some((leg, rest)) = legs.split_first() else {
        out.push(value);
        return Ok(());
    };

    match (leg, value) {
        (PathLeg::Index(IndexSelector::Wildcard), JsonValue::Array(elems)) => {
            for child in elems {
                collect_matches(child, rest, depth + 1, max_depth, out)?;
            }
        }
        (PathLeg::Index(IndexSelector::At(index)), JsonValue::Array(elems)) => {
            if let Some(child) = elems.get(*index) {
                collect_matches(child, rest, depth + 1, max_depth, out)?;
            }
        }
        (PathLeg::Key(KeySelector::Wildcard), JsonValue::Object(members)) => {
            for child in members.values() {
                collect_matches(child, rest, depth + 1, max_depth, out)?;
            }
        }
        (PathLeg::Key(KeySelector::Name(key)), JsonValue::Object(members)) => {
            if let Some(child) = members.get(key) {
                collect_matches(child, rest, depth + 1, max_depth, out)?;
            }
        }
        (PathLeg::DoubleAsterisk, _) => {
            collect_matches(value, rest, depth, max_depth, out)?;
            // Children see `legs` again, so `**` keeps applying below them.
            match value {
                JsonValue::Array(elems) => {
                    for child in elems {
                        collect_matches(child, legs, depth + 1, max_depth, out)?;
                    }
                }
                JsonValue::Object(members) => {
                    for child in members.values() {
                        collect_matches(child, legs, depth + 1, max_depth, out)?;
                    }
                }
                _ => {}
            }
        }
        _ => {}
    }
    Ok(())
}

//! `JSON_MERGE`.

use json_sql_value::JsonValue;

/// Merge `suffixes` into `base`, in order:
///
/// 1. adjacent arrays are merged into a single array;
/// 2. adjacent objects are merged into a single object, later members
///    replacing earlier ones (shallow);
/// 3. a scalar is wrapped as an array before merging;
/// 4. an object merged with anything but an object is wrapped as an array
///    first, then the same suffix is merged into that array.
pub fn merge<I>(base: &mut JsonValue, suffixes: I)
where
    I: IntoIterator<Item = JsonValue>,
{
    if !matches!(base, JsonValue::Array(_) | JsonValue::Object(_)) {
        base.wrap_in_array();
    }
    for suffix in suffixes {
        merge_suffix(base, suffix);
    }
}

fn merge_suffix(base: &mut JsonValue, suffix: JsonValue) {
    let suffix = match (&mut *base, suffix) {
        (JsonValue::Array(elems), JsonValue::Array(more)) => {
            elems.extend(more);
            return;
        }
        (JsonValue::Array(elems), other) => {
            elems.push(other);
            return;
        }
        (JsonValue::Object(members), JsonValue::Object(more)) => {
            members.extend(more);
            return;
        }
        (_, other) => other,
    };
    tracing::trace!(suffix_type = suffix.type_name(), "merge: wrapping base into array");
    base.wrap_in_array();
    merge_suffix(base, suffix);
}

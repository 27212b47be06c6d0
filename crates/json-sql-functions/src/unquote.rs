//! `JSON_UNQUOTE`.

use json_sql_value::JsonValue;

use crate::error::{JsonError, INVALID_UNICODE, MISSING_CLOSING_QUOTE};

/// Unquote a value: strings have their escape sequences decoded, anything
/// else comes back as its JSON text.
pub fn unquote(value: &JsonValue) -> Result<String, JsonError> {
    match value {
        JsonValue::String(s) => unquote_string(s),
        other => Ok(other.to_string()),
    }
}

/// Decode the escape sequences recognized by `JSON_UNQUOTE`:
/// `\"`, `\b`, `\f`, `\n`, `\r`, `\t`, `\\` and `\uXXXX`.
///
/// A backslash followed by any other byte yields that byte unchanged.
///
/// # Errors
///
/// - a trailing `\` with nothing after it
/// - a `\u` without four hex digits, or naming a surrogate that is not part
///   of a high `\uD800`-`\uDBFF` plus low `\uDC00`-`\uDFFF` pair
pub fn unquote_string(s: &str) -> Result<String, JsonError> {
    let bytes = s.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }
        i += 1;
        let Some(&selector) = bytes.get(i) else {
            return Err(JsonError::MalformedEscape(MISSING_CLOSING_QUOTE.to_string()));
        };
        match selector {
            b'"' => out.push(b'"'),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0c),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'\\' => out.push(b'\\'),
            b'u' => {
                let (ch, consumed) = decode_unicode_escape(&bytes[i + 1..])
                    .ok_or_else(|| JsonError::MalformedEscape(INVALID_UNICODE.to_string()))?;
                let mut buf = [0u8; 4];
                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                i += consumed;
            }
            other => out.push(other),
        }
        i += 1;
    }
    // Only whole escapes are replaced, so the output stays valid UTF-8.
    String::from_utf8(out).map_err(|_| JsonError::MalformedEscape(INVALID_UNICODE.to_string()))
}

/// Decode the digits following `\u`, joining a high surrogate with the low
/// surrogate escape right after it. Returns the character and the number of
/// bytes consumed after the `u`.
fn decode_unicode_escape(rest: &[u8]) -> Option<(char, usize)> {
    let unit = hex_unit(rest.get(..4)?)?;
    if !(0xD800..=0xDBFF).contains(&unit) {
        return char::from_u32(unit).map(|ch| (ch, 4));
    }
    let low = match rest.get(4..10)? {
        [b'\\', b'u', digits @ ..] => hex_unit(digits)?,
        _ => return None,
    };
    if !(0xDC00..=0xDFFF).contains(&low) {
        return None;
    }
    let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(code).map(|ch| (ch, 10))
}

fn hex_unit(hex: &[u8]) -> Option<u32> {
    if !hex.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let digits = std::str::from_utf8(hex).ok()?;
    u32::from_str_radix(digits, 16).ok()
}

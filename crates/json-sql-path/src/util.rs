//! Path expression rendering.

use std::fmt;

use crate::types::{IndexSelector, KeySelector, PathExpression, PathLeg};

/// Render a path expression in canonical text form, e.g. `$.a[0]**."b c"`.
pub fn path_expression_to_string(path: &PathExpression) -> String {
    let mut out = String::from("$");
    for leg in path.legs() {
        out.push_str(&leg_to_string(leg));
    }
    out
}

fn leg_to_string(leg: &PathLeg) -> String {
    match leg {
        PathLeg::Key(KeySelector::Name(name)) => {
            if is_identifier(name) {
                format!(".{}", name)
            } else {
                format!(".{}", serde_json::Value::String(name.clone()))
            }
        }
        PathLeg::Key(KeySelector::Wildcard) => String::from(".*"),
        PathLeg::Index(IndexSelector::At(index)) => format!("[{}]", index),
        PathLeg::Index(IndexSelector::Wildcard) => String::from("[*]"),
        PathLeg::DoubleAsterisk => String::from("**"),
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&path_expression_to_string(self))
    }
}

use crate::scanner::{split_segments, template_keys, Segment};
use serde::Serialize;
use std::collections::BTreeMap;

/// Resolved values keyed by token name.
pub type ValueMap = BTreeMap<String, String>;

/// Substitutes every token whose name is a key of `values` with the mapped
/// value; tokens without a value keep their literal span (delimiters
/// included) in the output.
///
/// Substitution is a single pass and never recurses: a substituted value
/// that itself contains `{{...}}` text is not re-matched. The operation is
/// therefore only idempotent when no value looks like a token.
#[must_use]
pub fn interpolate(template: &str, values: &ValueMap) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in split_segments(template) {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Token(token) => match values.get(&token.name) {
                Some(value) => out.push_str(value),
                None => out.push_str(&token.raw),
            },
        }
    }
    out
}

/// True iff at least one distinct token name in the template has no entry
/// in `values`. Uses the same token extraction as [`template_keys`], so
/// repeated tokens count once.
#[must_use]
pub fn has_unresolved_keys(template: &str, values: &ValueMap) -> bool {
    template_keys(template)
        .iter()
        .any(|key| !values.contains_key(key))
}

/// Merges the static global map with dynamically fetched values; dynamic
/// entries win on key collision.
#[must_use]
pub fn merge_values(global: &ValueMap, dynamic: &ValueMap) -> ValueMap {
    let mut merged = global.clone();
    for (key, value) in dynamic {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// An interpolated pattern plus whether any token stayed unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub output: String,
    pub unresolved: bool,
}

/// Interpolates and flags unresolved tokens in one call.
#[must_use]
pub fn render(template: &str, values: &ValueMap) -> Rendered {
    Rendered {
        output: interpolate(template, values),
        unresolved: has_unresolved_keys(template, values),
    }
}

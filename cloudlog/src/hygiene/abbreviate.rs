//! Truncation of long string leaves in JSON-shaped payloads.
//!
//! Log backends cap the size of a single entry, so long strings inside a
//! payload are shortened before logging. Strings are measured in Unicode
//! scalar values and never split inside a character.
//!
//! Only mappings are traversed. Arrays, numbers and booleans are copied as
//! they are. A `null` nested value is treated as an empty mapping and comes
//! out as `{}`. Recursion depth follows the input's nesting depth.

use std::borrow::Cow;

use serde_json::{Map, Value as JsonValue};

/// Strings at least this long are abbreviated.
pub const ABBREVIATION_THRESHOLD: usize = 80;

/// Number of leading characters kept from an abbreviated string.
pub const ABBREVIATED_PREFIX_LEN: usize = 76;

/// Marker appended to abbreviated strings.
pub const ELLIPSIS: &str = "...";

/// Abbreviates a single string.
///
/// Returns the input unchanged when it is shorter than
/// [`ABBREVIATION_THRESHOLD`]; otherwise the first
/// [`ABBREVIATED_PREFIX_LEN`] characters followed by [`ELLIPSIS`].
#[must_use]
pub fn abbreviate_str(value: &str) -> Cow<'_, str> {
    if value.chars().count() < ABBREVIATION_THRESHOLD {
        return Cow::Borrowed(value);
    }
    let cut = value
        .char_indices()
        .nth(ABBREVIATED_PREFIX_LEN)
        .map_or(value.len(), |(index, _)| index);
    let mut abbreviated = String::with_capacity(cut + ELLIPSIS.len());
    abbreviated.push_str(&value[..cut]);
    abbreviated.push_str(ELLIPSIS);
    Cow::Owned(abbreviated)
}

/// Returns a copy of `value` with every long string in nested mappings
/// abbreviated.
///
/// A top-level value that is not a mapping yields an empty mapping.
///
/// ```
/// use cloudlog::abbreviate_strings;
/// use serde_json::json;
///
/// let long = "x".repeat(100);
/// let out = abbreviate_strings(&json!({"body": long, "status": 200}));
/// assert_eq!(out["body"].as_str().unwrap().len(), 79);
/// assert_eq!(out["status"], 200);
/// ```
#[must_use]
pub fn abbreviate_strings(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(map) => JsonValue::Object(abbreviate_map(map)),
        _ => JsonValue::Object(Map::new()),
    }
}

fn abbreviate_map(map: &Map<String, JsonValue>) -> Map<String, JsonValue> {
    map.iter()
        .map(|(key, value)| (key.clone(), abbreviate_entry(value)))
        .collect()
}

fn abbreviate_entry(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::String(text) => JsonValue::String(abbreviate_str(text).into_owned()),
        JsonValue::Object(map) => JsonValue::Object(abbreviate_map(map)),
        JsonValue::Null => JsonValue::Object(Map::new()),
        other => other.clone(),
    }
}

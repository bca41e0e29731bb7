//! Credential masking for header maps.
//!
//! Header values are copied into a new map with the values of well-known
//! credential-bearing headers replaced by [`REDACTED_HEADER_VALUE`]. Only the
//! key is inspected; key casing is preserved in the output and the input map
//! is left untouched.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use serde_json::{Map, Value as JsonValue};

/// Replacement value for redacted headers.
pub const REDACTED_HEADER_VALUE: &str = "<REDACTED>";

/// Lower-case names of the headers whose values are redacted.
pub const CREDENTIAL_HEADERS: [&str; 4] =
    ["authorization", "proxy-authorization", "cookie", "set-cookie"];

/// Returns `true` if the lower-case form of `name` is a credential-bearing
/// header.
///
/// Lower-casing uses full Unicode case mapping, so `"COO\u{212A}IE"` (with a
/// Kelvin sign) matches `cookie`.
#[must_use]
pub fn is_credential_header(name: &str) -> bool {
    let name = name.to_lowercase();
    CREDENTIAL_HEADERS.contains(&name.as_str())
}

/// Produces a copy of a header map with credential values masked.
pub trait RedactHeaders {
    #[must_use]
    fn redact_headers(&self) -> Self;
}

impl RedactHeaders for Map<String, JsonValue> {
    fn redact_headers(&self) -> Self {
        self.iter()
            .map(|(name, value)| {
                let value = if is_credential_header(name) {
                    JsonValue::String(REDACTED_HEADER_VALUE.to_string())
                } else {
                    value.clone()
                };
                (name.clone(), value)
            })
            .collect()
    }
}

impl<S> RedactHeaders for HashMap<String, String, S>
where
    S: BuildHasher + Clone,
{
    fn redact_headers(&self) -> Self {
        let mut result = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.extend(self.iter().map(|(name, value)| (name.clone(), mask(name, value))));
        result
    }
}

impl RedactHeaders for BTreeMap<String, String> {
    fn redact_headers(&self) -> Self {
        self.iter()
            .map(|(name, value)| (name.clone(), mask(name, value)))
            .collect()
    }
}

fn mask(name: &str, value: &str) -> String {
    if is_credential_header(name) {
        REDACTED_HEADER_VALUE.to_string()
    } else {
        value.to_string()
    }
}

/// Returns a copy of `headers` with credential-bearing values masked.
///
/// ```
/// use cloudlog::redact_headers;
/// use serde_json::json;
///
/// let headers = json!({"Authorization": "Bearer token", "Accept": "*/*"});
/// let redacted = redact_headers(headers.as_object().unwrap());
/// assert_eq!(redacted["Authorization"], "<REDACTED>");
/// assert_eq!(redacted["Accept"], "*/*");
/// ```
#[must_use]
pub fn redact_headers<H: RedactHeaders>(headers: &H) -> H {
    headers.redact_headers()
}

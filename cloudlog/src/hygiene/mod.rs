//! Helpers for making payloads safe and compact before they are logged.
//!
//! - **`headers`**: credential masking for header maps
//! - **`abbreviate`**: truncation of long strings in nested payloads

mod abbreviate;
mod headers;

pub use abbreviate::{
    ABBREVIATED_PREFIX_LEN, ABBREVIATION_THRESHOLD, ELLIPSIS, abbreviate_str, abbreviate_strings,
};
pub use headers::{
    CREDENTIAL_HEADERS, REDACTED_HEADER_VALUE, RedactHeaders, is_credential_header,
    redact_headers,
};

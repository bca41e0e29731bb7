//! Severity-filtered structured logging with log-hygiene helpers.
//!
//! This crate provides:
//! - **Severity**: the Google Cloud Logging severity scale and its five
//!   callable tiers.
//! - **Logger**: a facade that filters by threshold and writes one JSON line
//!   per record, `{"severity":..,"message":..,...payload}`, to a [`Sink`].
//! - **Registry**: a lazily created process-wide logger with module-level
//!   shortcuts (`cloudlog::log_info(..)`).
//! - **Hygiene helpers**: credential masking for header maps and truncation
//!   of long strings in payloads.
//! - **Error normalization**: turns any failure value into an error whose
//!   display form is `Error: <message>`.
//!
//! What it does not do:
//! - add timestamps or any envelope around records
//! - buffer, batch, or ship records anywhere
//!
//! Integrations with `tracing` and `slog` live behind feature flags.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod error;
mod hygiene;
mod logger;
mod record;
pub mod registry;
mod severity;
pub mod sink;
#[cfg(feature = "slog")]
pub mod slog;
mod thrown;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use error::{EmitError, InitError};
pub use hygiene::{
    ABBREVIATED_PREFIX_LEN, ABBREVIATION_THRESHOLD, CREDENTIAL_HEADERS, ELLIPSIS,
    REDACTED_HEADER_VALUE, RedactHeaders, abbreviate_str, abbreviate_strings,
    is_credential_header, redact_headers,
};
pub use logger::{DefaultLogger, Logger, LoggerConfig, LoggerExt, create_default_logger};
pub use record::LogRecord;
pub use registry::{
    instance, log_debug, log_debug_with, log_error, log_error_with, log_info, log_info_with,
    log_notice, log_notice_with, log_warning, log_warning_with, set_severity, try_init,
};
pub use severity::{Channel, ParseSeverityError, Severity, Tier};
pub use sink::{ConsoleSink, MemorySink, Sink};
pub use thrown::{
    LoggedError, Thrown, UNKNOWN_SHAPE_MESSAGE, error_from_unknown, error_message_from_unknown,
};

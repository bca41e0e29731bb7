//! A [`Sink`] that forwards encoded lines to `tracing`.
//!
//! Each line becomes one event with target `cloudlog`: the normal channel at
//! `INFO`, the warning channel at `WARN`, the error channel at `ERROR`. The
//! line is already a complete JSON record, so it is passed through as the
//! event message without further fields.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use cloudlog::{DefaultLogger, Logger, Severity, tracing::TracingSink};
//!
//! let logger = DefaultLogger::with_sink(Severity::INFO, Arc::new(TracingSink));
//! logger.log_info("started")?;
//! ```

use std::io;

use crate::sink::Sink;

/// Sink emitting lines as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn write_normal(&self, line: &str) -> io::Result<()> {
        ::tracing::info!(target: "cloudlog", "{line}");
        Ok(())
    }

    fn write_warning(&self, line: &str) -> io::Result<()> {
        ::tracing::warn!(target: "cloudlog", "{line}");
        Ok(())
    }

    fn write_error(&self, line: &str) -> io::Result<()> {
        ::tracing::error!(target: "cloudlog", "{line}");
        Ok(())
    }
}

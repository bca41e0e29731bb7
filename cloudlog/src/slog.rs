//! Adapters for routing records through `slog`.
//!
//! This module is responsible for:
//! - [`SlogSink`], a [`Sink`] that hands each encoded line to a `slog::Logger`
//!   at `Info`, `Warning` or `Error` depending on the channel.
//! - A `slog::Value` implementation for [`Severity`], so thresholds and levels
//!   can be attached to `slog` records as key-value pairs.
//!
//! It does not configure `slog` drains or filter records; filtering has
//! already happened in the logger by the time a line reaches the sink.

use std::{fmt, io};

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{severity::Severity, sink::Sink};

/// Sink that forwards lines to a `slog::Logger`.
#[derive(Clone)]
pub struct SlogSink {
    logger: slog::Logger,
}

impl fmt::Debug for SlogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlogSink").finish_non_exhaustive()
    }
}

impl SlogSink {
    #[must_use]
    pub fn new(logger: slog::Logger) -> Self {
        Self { logger }
    }

    #[must_use]
    pub fn logger(&self) -> &slog::Logger {
        &self.logger
    }
}

impl Sink for SlogSink {
    fn write_normal(&self, line: &str) -> io::Result<()> {
        slog::info!(self.logger, "{}", line);
        Ok(())
    }

    fn write_warning(&self, line: &str) -> io::Result<()> {
        slog::warn!(self.logger, "{}", line);
        Ok(())
    }

    fn write_error(&self, line: &str) -> io::Result<()> {
        slog::error!(self.logger, "{}", line);
        Ok(())
    }
}

impl SlogValue for Severity {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        match self.name() {
            Some(name) => serializer.emit_str(key, name),
            None => serializer.emit_i32(key, self.level()),
        }
    }
}

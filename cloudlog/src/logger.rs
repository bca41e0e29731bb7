//! Severity-filtered JSON logger.
//!
//! A [`DefaultLogger`] holds a mutable threshold and a sink fixed at
//! construction. Each `log_*` call builds a [`LogRecord`] and writes it to
//! the tier's channel if `threshold <= tier severity`. Filtered calls do no
//! encoding and no I/O.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicI32, Ordering},
    },
};

use serde::{Deserialize, Serialize};

use crate::{
    error::EmitError,
    record::LogRecord,
    severity::{Severity, Tier},
    sink::{ConsoleSink, Sink},
};

// =============================================================================
// LoggerConfig
// =============================================================================

/// Construction-time settings for a [`DefaultLogger`].
///
/// Only the threshold is read from configuration files; the sink is set in
/// code.
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    #[serde(alias = "severity")]
    pub threshold: Severity,
    #[serde(skip)]
    pub sink: Option<Arc<dyn Sink>>,
}

impl LoggerConfig {
    #[must_use]
    pub fn with_threshold(mut self, threshold: impl Into<Severity>) -> Self {
        self.threshold = threshold.into();
        self
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("threshold", &self.threshold)
            .field("sink", &self.sink.as_ref().map(|_| "<sink>"))
            .finish()
    }
}

// =============================================================================
// Logger trait
// =============================================================================

/// The logging facade: a threshold setter and one call per tier.
///
/// Implementors provide [`Logger::set_severity`], [`Logger::enabled`] and
/// [`Logger::emit`]; the tier calls are provided on top of `emit`.
pub trait Logger: Send + Sync {
    /// Replaces the threshold. Any level is accepted.
    fn set_severity(&self, severity: Severity);

    /// Whether a call at `tier` would currently be emitted.
    fn enabled(&self, tier: Tier) -> bool;

    /// Emits `message` at `tier`, spreading `payload` into the record.
    fn emit(
        &self,
        tier: Tier,
        message: &str,
        payload: Option<&serde_json::Value>,
    ) -> Result<(), EmitError>;

    fn log_debug(&self, message: &str) -> Result<(), EmitError> {
        self.emit(Tier::Debug, message, None)
    }

    fn log_info(&self, message: &str) -> Result<(), EmitError> {
        self.emit(Tier::Info, message, None)
    }

    fn log_notice(&self, message: &str) -> Result<(), EmitError> {
        self.emit(Tier::Notice, message, None)
    }

    fn log_warning(&self, message: &str) -> Result<(), EmitError> {
        self.emit(Tier::Warning, message, None)
    }

    fn log_error(&self, message: &str) -> Result<(), EmitError> {
        self.emit(Tier::Error, message, None)
    }
}

/// Payload-carrying variants of the tier calls, for any [`Logger`].
pub trait LoggerExt: Logger {
    /// Serializes `payload` and emits it with `message` at `tier`.
    ///
    /// The payload is not serialized when the tier is filtered out.
    fn emit_with<P>(&self, tier: Tier, message: &str, payload: &P) -> Result<(), EmitError>
    where
        P: Serialize + ?Sized,
    {
        if !self.enabled(tier) {
            return Ok(());
        }
        let payload = serde_json::to_value(payload)?;
        self.emit(tier, message, Some(&payload))
    }

    fn log_debug_with<P: Serialize + ?Sized>(
        &self,
        message: &str,
        payload: &P,
    ) -> Result<(), EmitError> {
        self.emit_with(Tier::Debug, message, payload)
    }

    fn log_info_with<P: Serialize + ?Sized>(
        &self,
        message: &str,
        payload: &P,
    ) -> Result<(), EmitError> {
        self.emit_with(Tier::Info, message, payload)
    }

    fn log_notice_with<P: Serialize + ?Sized>(
        &self,
        message: &str,
        payload: &P,
    ) -> Result<(), EmitError> {
        self.emit_with(Tier::Notice, message, payload)
    }

    fn log_warning_with<P: Serialize + ?Sized>(
        &self,
        message: &str,
        payload: &P,
    ) -> Result<(), EmitError> {
        self.emit_with(Tier::Warning, message, payload)
    }

    fn log_error_with<P: Serialize + ?Sized>(
        &self,
        message: &str,
        payload: &P,
    ) -> Result<(), EmitError> {
        self.emit_with(Tier::Error, message, payload)
    }
}

impl<L: Logger + ?Sized> LoggerExt for L {}

// =============================================================================
// DefaultLogger
// =============================================================================

/// Threshold-filtering logger writing JSON lines to a [`Sink`].
pub struct DefaultLogger {
    threshold: AtomicI32,
    sink: Arc<dyn Sink>,
}

impl DefaultLogger {
    /// Creates a logger. Without a configured sink, a [`ConsoleSink`] is
    /// captured now and used for the logger's lifetime.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        let sink = match config.sink {
            Some(sink) => sink,
            None => Arc::new(ConsoleSink::new()),
        };
        Self {
            threshold: AtomicI32::new(config.threshold.level()),
            sink,
        }
    }

    /// Creates a logger with the given threshold writing to `sink`.
    #[must_use]
    pub fn with_sink(threshold: impl Into<Severity>, sink: Arc<dyn Sink>) -> Self {
        Self::new(
            LoggerConfig::default()
                .with_threshold(threshold)
                .with_sink(sink),
        )
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        Severity::from_level(self.threshold.load(Ordering::Relaxed))
    }

    fn write(&self, tier: Tier, record: &LogRecord) -> Result<(), EmitError> {
        let line = record.to_line()?;
        self.sink.write(tier.channel(), &line)?;
        Ok(())
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for DefaultLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultLogger")
            .field("threshold", &self.severity())
            .finish_non_exhaustive()
    }
}

impl Logger for DefaultLogger {
    fn set_severity(&self, severity: Severity) {
        self.threshold.store(severity.level(), Ordering::Relaxed);
    }

    fn enabled(&self, tier: Tier) -> bool {
        tier.passes(self.severity())
    }

    fn emit(
        &self,
        tier: Tier,
        message: &str,
        payload: Option<&serde_json::Value>,
    ) -> Result<(), EmitError> {
        if !self.enabled(tier) {
            return Ok(());
        }
        let record = LogRecord::new(tier, message);
        let record = match payload {
            Some(payload) => record.with_payload(payload)?,
            None => record,
        };
        self.write(tier, &record)
    }
}

/// Creates a [`DefaultLogger`] with the default configuration.
#[must_use]
pub fn create_default_logger() -> DefaultLogger {
    DefaultLogger::default()
}

//! The process-wide logger and its module-level shortcuts.
//!
//! The shared [`DefaultLogger`] is created on first access with the default
//! configuration (threshold `DEFAULT`, console sink). Call [`try_init`]
//! before any logging to install a configured logger instead.

use std::sync::OnceLock;

use serde::Serialize;

use crate::{
    error::{EmitError, InitError},
    logger::{DefaultLogger, Logger, LoggerConfig, LoggerExt},
    severity::Severity,
};

static INSTANCE: OnceLock<DefaultLogger> = OnceLock::new();

/// Returns the process-wide logger, creating it on first use.
pub fn instance() -> &'static DefaultLogger {
    INSTANCE.get_or_init(DefaultLogger::default)
}

/// Installs the process-wide logger from `config`.
///
/// Fails if the logger was already created, either by an earlier `try_init`
/// or by a logging call.
pub fn try_init(config: LoggerConfig) -> Result<&'static DefaultLogger, InitError> {
    let mut config = Some(config);
    let logger = INSTANCE.get_or_init(|| DefaultLogger::new(config.take().unwrap_or_default()));
    if config.is_some() {
        return Err(InitError::AlreadyInitialized);
    }
    Ok(logger)
}

pub fn set_severity(severity: Severity) {
    instance().set_severity(severity);
}

pub fn log_debug(message: &str) -> Result<(), EmitError> {
    instance().log_debug(message)
}

pub fn log_info(message: &str) -> Result<(), EmitError> {
    instance().log_info(message)
}

pub fn log_notice(message: &str) -> Result<(), EmitError> {
    instance().log_notice(message)
}

pub fn log_warning(message: &str) -> Result<(), EmitError> {
    instance().log_warning(message)
}

pub fn log_error(message: &str) -> Result<(), EmitError> {
    instance().log_error(message)
}

pub fn log_debug_with<P: Serialize + ?Sized>(message: &str, payload: &P) -> Result<(), EmitError> {
    instance().log_debug_with(message, payload)
}

pub fn log_info_with<P: Serialize + ?Sized>(message: &str, payload: &P) -> Result<(), EmitError> {
    instance().log_info_with(message, payload)
}

pub fn log_notice_with<P: Serialize + ?Sized>(
    message: &str,
    payload: &P,
) -> Result<(), EmitError> {
    instance().log_notice_with(message, payload)
}

pub fn log_warning_with<P: Serialize + ?Sized>(
    message: &str,
    payload: &P,
) -> Result<(), EmitError> {
    instance().log_warning_with(message, payload)
}

pub fn log_error_with<P: Serialize + ?Sized>(message: &str, payload: &P) -> Result<(), EmitError> {
    instance().log_error_with(message, payload)
}

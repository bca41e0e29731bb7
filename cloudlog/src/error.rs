//! Errors surfaced by logging calls and logger installation.
//!
//! The logger does not catch failures from the layers below it. Encoding a
//! payload and writing to the sink are the only fallible steps, and their
//! errors reach the caller wrapped in [`EmitError`].

use std::{error::Error as StdError, fmt, io};

/// Failure while emitting a record.
#[derive(Debug)]
pub enum EmitError {
    /// The payload could not be converted to JSON.
    Encode(serde_json::Error),
    /// The sink rejected the line.
    Write(io::Error),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::Encode(err) => write!(f, "failed to encode log record: {err}"),
            EmitError::Write(err) => write!(f, "failed to write log record: {err}"),
        }
    }
}

impl StdError for EmitError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            EmitError::Encode(err) => Some(err),
            EmitError::Write(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for EmitError {
    fn from(err: serde_json::Error) -> Self {
        EmitError::Encode(err)
    }
}

impl From<io::Error> for EmitError {
    fn from(err: io::Error) -> Self {
        EmitError::Write(err)
    }
}

/// Failure while installing the process-wide logger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitError {
    /// The process-wide logger was already created.
    AlreadyInitialized,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::AlreadyInitialized => f.write_str("the process logger is already initialized"),
        }
    }
}

impl StdError for InitError {}

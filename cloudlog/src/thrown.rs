//! Normalization of arbitrary failure values into a loggable error.
//!
//! Failures reach logging code in many shapes: real error values, bare
//! strings, numeric codes, structured payloads from other services, or panic
//! payloads. [`Thrown`] classifies such a value and [`error_from_unknown`]
//! turns it into a [`LoggedError`] whose display form is always
//! `Error: <message>`.
//!
//! Classification is ordered, first match wins:
//!
//! 1. an error value is kept as is
//! 2. a string becomes the message
//! 3. a number becomes its decimal form
//! 4. a JSON object with a string `message` field contributes that field
//! 5. anything else becomes [`UNKNOWN_SHAPE_MESSAGE`]

use std::{any::Any, borrow::Cow, error::Error as StdError, fmt};

use serde_json::Value as JsonValue;

/// Message used when a failure value has no recognizable shape.
pub const UNKNOWN_SHAPE_MESSAGE: &str = "Error of unknown shape";

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

// =============================================================================
// Thrown - the shapes a failure value can take
// =============================================================================

/// A failure value of unknown shape.
#[derive(Debug)]
pub enum Thrown {
    /// An existing error value.
    Error(BoxError),
    Text(String),
    /// An integer, kept exact.
    Integer(i128),
    Float(f64),
    /// A structured value, inspected for a string `message` field.
    Value(JsonValue),
    /// A value with no inspectable shape.
    Opaque,
}

impl Thrown {
    /// Wraps an existing error.
    pub fn error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Thrown::Error(Box::new(error))
    }

    /// Classifies a panic payload as captured by `std::panic::catch_unwind`.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<&'static str>() {
            Ok(text) => Thrown::Text((*text).to_string()),
            Err(payload) => match payload.downcast::<String>() {
                Ok(text) => Thrown::Text(*text),
                Err(_) => Thrown::Opaque,
            },
        }
    }
}

impl From<BoxError> for Thrown {
    fn from(error: BoxError) -> Self {
        Thrown::Error(error)
    }
}

impl From<std::io::Error> for Thrown {
    fn from(error: std::io::Error) -> Self {
        Thrown::error(error)
    }
}

impl From<&str> for Thrown {
    fn from(text: &str) -> Self {
        Thrown::Text(text.to_string())
    }
}

impl From<String> for Thrown {
    fn from(text: String) -> Self {
        Thrown::Text(text)
    }
}

impl From<JsonValue> for Thrown {
    fn from(value: JsonValue) -> Self {
        Thrown::Value(value)
    }
}

macro_rules! thrown_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Thrown {
                fn from(number: $ty) -> Self {
                    Thrown::Integer(i128::from(number))
                }
            }
        )*
    };
}

thrown_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f64> for Thrown {
    fn from(number: f64) -> Self {
        Thrown::Float(number)
    }
}

impl From<f32> for Thrown {
    fn from(number: f32) -> Self {
        // Widen through the shortest decimal form so `0.1_f32` stays `0.1`.
        let widened = number
            .to_string()
            .parse::<f64>()
            .unwrap_or_else(|_| f64::from(number));
        Thrown::Float(widened)
    }
}

// =============================================================================
// LoggedError - the normalized error
// =============================================================================

/// A normalized error. Displays as `Error: <message>`.
#[derive(Debug)]
pub struct LoggedError {
    repr: Repr,
}

#[derive(Debug)]
enum Repr {
    Wrapped(BoxError),
    Message(String),
}

impl LoggedError {
    /// Creates an error carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            repr: Repr::Message(message.into()),
        }
    }

    /// The error message, without the `Error: ` prefix.
    #[must_use]
    pub fn message(&self) -> Cow<'_, str> {
        match &self.repr {
            Repr::Wrapped(error) => Cow::Owned(error.to_string()),
            Repr::Message(message) => Cow::Borrowed(message),
        }
    }

    /// The original error, if the failure value already was one.
    #[must_use]
    pub fn wrapped(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match &self.repr {
            Repr::Wrapped(error) => Some(error.as_ref()),
            Repr::Message(_) => None,
        }
    }

    /// Consumes `self`, returning the original error if there was one.
    #[must_use]
    pub fn into_wrapped(self) -> Option<BoxError> {
        match self.repr {
            Repr::Wrapped(error) => Some(error),
            Repr::Message(_) => None,
        }
    }
}

impl fmt::Display for LoggedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message())
    }
}

impl StdError for LoggedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.repr {
            Repr::Wrapped(error) => Some(error.as_ref()),
            Repr::Message(_) => None,
        }
    }
}

// =============================================================================
// Normalization entrypoints
// =============================================================================

/// Converts any failure value into a [`LoggedError`].
///
/// ```
/// use cloudlog::{error_from_unknown, Thrown};
/// use serde_json::json;
///
/// assert_eq!(error_from_unknown("boom").message(), "boom");
/// assert_eq!(error_from_unknown(3).message(), "3");
/// assert_eq!(error_from_unknown(json!({"message": "y"})).message(), "y");
/// assert_eq!(error_from_unknown(Thrown::Opaque).message(), "Error of unknown shape");
/// ```
pub fn error_from_unknown(thrown: impl Into<Thrown>) -> LoggedError {
    let repr = match thrown.into() {
        Thrown::Error(error) => Repr::Wrapped(error),
        Thrown::Text(text) => Repr::Message(text),
        Thrown::Integer(number) => Repr::Message(number.to_string()),
        Thrown::Float(number) => Repr::Message(format_number(number)),
        Thrown::Value(value) => Repr::Message(message_from_value(value)),
        Thrown::Opaque => Repr::Message(UNKNOWN_SHAPE_MESSAGE.to_string()),
    };
    LoggedError { repr }
}

/// Returns the display form of [`error_from_unknown`]: `Error: <message>`.
pub fn error_message_from_unknown(thrown: impl Into<Thrown>) -> String {
    error_from_unknown(thrown).to_string()
}

fn message_from_value(value: JsonValue) -> String {
    match value {
        JsonValue::String(text) => text,
        JsonValue::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() => format_number(float),
            _ => number.to_string(),
        },
        JsonValue::Object(mut map) => match map.remove("message") {
            Some(JsonValue::String(message)) => message,
            _ => UNKNOWN_SHAPE_MESSAGE.to_string(),
        },
        _ => UNKNOWN_SHAPE_MESSAGE.to_string(),
    }
}

fn format_number(number: f64) -> String {
    if number.is_infinite() {
        return if number.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // `0.0` and `-0.0` both print as "0".
    if number == 0.0 {
        return "0".to_string();
    }
    number.to_string()
}

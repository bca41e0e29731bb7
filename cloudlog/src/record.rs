//! Log record construction and encoding.
//!
//! A record is `{"severity": .., "message": .., ...payload}` encoded as a
//! single JSON line. Keys keep insertion order. Payload fields are spread
//! after the fixed fields, so a payload field named `severity` or `message`
//! replaces the fixed value in place.
//!
//! Spreading follows the rules of a JavaScript object spread applied to the
//! payload's JSON form:
//!
//! - an object contributes its fields in order
//! - a string contributes one entry per character, keyed `"0"`, `"1"`, ...
//! - an array contributes one entry per element, keyed the same way
//! - `null`, numbers and booleans contribute nothing

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::{error::EmitError, severity::Tier};

/// A single record, built per call and encoded immediately.
#[derive(Clone, Debug, PartialEq)]
pub struct LogRecord {
    fields: Map<String, JsonValue>,
}

impl LogRecord {
    /// Creates a record with only the fixed fields.
    #[must_use]
    pub fn new(tier: Tier, message: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("severity".to_string(), JsonValue::from(tier.name()));
        fields.insert("message".to_string(), JsonValue::from(message));
        Self { fields }
    }

    /// Serializes `payload` and spreads its fields into the record.
    pub fn with_payload<P>(mut self, payload: &P) -> Result<Self, EmitError>
    where
        P: Serialize + ?Sized,
    {
        self.spread(serde_json::to_value(payload)?);
        Ok(self)
    }

    fn spread(&mut self, payload: JsonValue) {
        match payload {
            JsonValue::Object(map) => {
                for (key, value) in map {
                    self.fields.insert(key, value);
                }
            }
            JsonValue::String(text) => {
                for (index, ch) in text.chars().enumerate() {
                    self.fields
                        .insert(index.to_string(), JsonValue::String(ch.to_string()));
                }
            }
            JsonValue::Array(items) => {
                for (index, item) in items.into_iter().enumerate() {
                    self.fields.insert(index.to_string(), item);
                }
            }
            JsonValue::Null | JsonValue::Bool(_) | JsonValue::Number(_) => {}
        }
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, JsonValue> {
        &self.fields
    }

    /// Encodes the record as one line of JSON.
    pub fn to_line(&self) -> Result<String, EmitError> {
        Ok(serde_json::to_string(&self.fields)?)
    }
}

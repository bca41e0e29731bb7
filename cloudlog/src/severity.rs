//! Severity scale, callable tiers, and sink channels.
//!
//! [`Severity`] follows the Google Cloud Logging `LogSeverity` values. The
//! scale is open: any integer is a valid severity, and the nine named points
//! are spaced by 100 so intermediate levels can be added without renumbering.
//!
//! Reference: <https://cloud.google.com/logging/docs/reference/v2/rest/v2/LogEntry#LogSeverity>

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// =============================================================================
// Severity - ordered integer level
// =============================================================================

/// An ordered log severity. Lower values are more verbose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Severity(i32);

impl Severity {
    pub const DEFAULT: Severity = Severity(0);
    pub const DEBUG: Severity = Severity(100);
    pub const INFO: Severity = Severity(200);
    pub const NOTICE: Severity = Severity(300);
    pub const WARNING: Severity = Severity(400);
    pub const ERROR: Severity = Severity(500);
    pub const CRITICAL: Severity = Severity(600);
    pub const ALERT: Severity = Severity(700);
    pub const EMERGENCY: Severity = Severity(800);

    /// The nine named points in ascending order.
    pub const NAMED: [Severity; 9] = [
        Severity::DEFAULT,
        Severity::DEBUG,
        Severity::INFO,
        Severity::NOTICE,
        Severity::WARNING,
        Severity::ERROR,
        Severity::CRITICAL,
        Severity::ALERT,
        Severity::EMERGENCY,
    ];

    /// Creates a severity from a raw level. No validation is applied.
    #[must_use]
    pub const fn from_level(level: i32) -> Self {
        Self(level)
    }

    #[must_use]
    pub const fn level(self) -> i32 {
        self.0
    }

    /// Returns the upper-case name for the nine named points.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("DEFAULT"),
            100 => Some("DEBUG"),
            200 => Some("INFO"),
            300 => Some("NOTICE"),
            400 => Some("WARNING"),
            500 => Some("ERROR"),
            600 => Some("CRITICAL"),
            700 => Some("ALERT"),
            800 => Some("EMERGENCY"),
            _ => None,
        }
    }
}

impl From<i32> for Severity {
    fn from(level: i32) -> Self {
        Self(level)
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

impl From<Tier> for Severity {
    fn from(tier: Tier) -> Self {
        tier.severity()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Error returned when a string names no severity and is not an integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseSeverityError {
    input: String,
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized severity `{}`", self.input)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a severity name (case-insensitive) or a decimal level.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(named) = Severity::NAMED
            .into_iter()
            .find(|named| named.name().is_some_and(|name| name.eq_ignore_ascii_case(trimmed)))
        {
            return Ok(named);
        }
        trimmed
            .parse::<i32>()
            .map(Severity)
            .map_err(|_| ParseSeverityError {
                input: s.to_string(),
            })
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_i32(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeverityVisitor;

        impl de::Visitor<'_> for SeverityVisitor {
            type Value = Severity;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a severity name or an integer level")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Severity, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Severity, E> {
                i32::try_from(v)
                    .map(Severity)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Severity, E> {
                i32::try_from(v)
                    .map(Severity)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }
        }

        deserializer.deserialize_any(SeverityVisitor)
    }
}

// =============================================================================
// Channel - sink output stream
// =============================================================================

/// The sink stream a record is written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Normal,
    Warning,
    Error,
}

// =============================================================================
// Tier - the callable log levels
// =============================================================================

/// The five severities a logger exposes a call for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Debug,
    Info,
    Notice,
    Warning,
    Error,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Debug,
        Tier::Info,
        Tier::Notice,
        Tier::Warning,
        Tier::Error,
    ];

    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Tier::Debug => Severity::DEBUG,
            Tier::Info => Severity::INFO,
            Tier::Notice => Severity::NOTICE,
            Tier::Warning => Severity::WARNING,
            Tier::Error => Severity::ERROR,
        }
    }

    /// The value written to a record's `severity` field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Tier::Debug => "DEBUG",
            Tier::Info => "INFO",
            Tier::Notice => "NOTICE",
            Tier::Warning => "WARNING",
            Tier::Error => "ERROR",
        }
    }

    #[must_use]
    pub const fn channel(self) -> Channel {
        match self {
            Tier::Debug | Tier::Info | Tier::Notice => Channel::Normal,
            Tier::Warning => Channel::Warning,
            Tier::Error => Channel::Error,
        }
    }

    /// Whether a record of this tier passes `threshold`.
    #[must_use]
    pub fn passes(self, threshold: Severity) -> bool {
        threshold <= self.severity()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_points_are_strictly_ascending() {
        for pair in Severity::NAMED.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[1].level() - pair[0].level(), 100);
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for severity in Severity::NAMED {
            let name = severity.name().unwrap();
            assert_eq!(name.parse::<Severity>().unwrap(), severity);
            assert_eq!(name.to_lowercase().parse::<Severity>().unwrap(), severity);
        }
    }

    #[test]
    fn unnamed_levels_parse_and_display_as_integers() {
        let severity: Severity = "250".parse().unwrap();
        assert_eq!(severity.level(), 250);
        assert_eq!(severity.name(), None);
        assert_eq!(severity.to_string(), "250");
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn tier_names_match_severity_names() {
        for tier in Tier::ALL {
            assert_eq!(tier.severity().name(), Some(tier.name()));
        }
    }

    #[test]
    fn tiers_route_to_expected_channels() {
        assert_eq!(Tier::Debug.channel(), Channel::Normal);
        assert_eq!(Tier::Info.channel(), Channel::Normal);
        assert_eq!(Tier::Notice.channel(), Channel::Normal);
        assert_eq!(Tier::Warning.channel(), Channel::Warning);
        assert_eq!(Tier::Error.channel(), Channel::Error);
    }

    #[test]
    fn serde_uses_names_for_named_points() {
        assert_eq!(
            serde_json::to_string(&Severity::WARNING).unwrap(),
            "\"WARNING\""
        );
        assert_eq!(
            serde_json::to_string(&Severity::from_level(450)).unwrap(),
            "450"
        );
        let parsed: Severity = serde_json::from_str("\"notice\"").unwrap();
        assert_eq!(parsed, Severity::NOTICE);
        let parsed: Severity = serde_json::from_str("-5").unwrap();
        assert_eq!(parsed.level(), -5);
    }
}

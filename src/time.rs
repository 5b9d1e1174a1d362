//! Time-of-day values for itinerary schedules.
//!
//! Schedules distinguish between a time that has been agreed with the
//! carrier and a slot that is still open. Both states share one type:
//! - [`ClockTime`]: a validated, zero-padded `"HH:MM"` wall-clock time
//! - [`TimeOfDay`]: either a `ClockTime` or the not-yet-defined marker
//!
//! "Not yet defined" is ordinary data here, not an error. The audit
//! engine reports open slots as findings; nothing in this crate treats
//! them as failures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A zero-padded `"HH:MM"` wall-clock time.
///
/// Ordering is lexicographic, which coincides with chronological order
/// for zero-padded same-day times. Overnight routes that cross midnight
/// are not modeled; a 23:50 departure followed by a 00:10 arrival will
/// read as a sequencing error.
///
/// # Examples
///
/// ```
/// use itinerary_core::ClockTime;
///
/// let depart = ClockTime::parse("08:30").unwrap();
/// let arrive = ClockTime::parse("13:00").unwrap();
/// assert!(depart < arrive);
///
/// assert!(ClockTime::parse("8:30").is_err());  // not zero-padded
/// assert!(ClockTime::parse("25:00").is_err()); // out of range
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(String);

impl ClockTime {
    /// Parses a `"HH:MM"` string into a clock time.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTime`] unless the input is exactly five
    /// characters, zero-padded, with hours 00-23 and minutes 00-59.
    pub fn parse(value: &str) -> Result<Self, InvalidTime> {
        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b':'
            && bytes[0].is_ascii_digit()
            && bytes[1].is_ascii_digit()
            && bytes[3].is_ascii_digit()
            && bytes[4].is_ascii_digit();

        if !well_formed {
            return Err(InvalidTime::new(value));
        }

        let hours = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let minutes = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
        if hours > 23 || minutes > 59 {
            return Err(InvalidTime::new(value));
        }

        Ok(Self(value.to_string()))
    }

    /// Returns the `"HH:MM"` representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = InvalidTime;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.0
    }
}

/// A schedule slot: either a confirmed clock time or still open.
///
/// The two states are distinct variants, so a real time can never
/// collide with the open-slot marker and open slots can never leak
/// into chronological comparisons by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    /// The slot has not been agreed yet.
    Undefined,
    /// A confirmed wall-clock time.
    At(ClockTime),
}

impl TimeOfDay {
    /// Convenience constructor parsing a `"HH:MM"` string into a
    /// confirmed slot.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTime`] if the string is not a well-formed
    /// clock time. Use [`TimeOfDay::Undefined`] directly for open slots.
    pub fn at(value: &str) -> Result<Self, InvalidTime> {
        ClockTime::parse(value).map(Self::At)
    }

    /// Returns the confirmed time, if the slot has one.
    pub fn as_clock(&self) -> Option<&ClockTime> {
        match self {
            Self::Undefined => None,
            Self::At(time) => Some(time),
        }
    }

    /// Returns true when the slot is still open.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("TBD"),
            Self::At(time) => time.fmt(f),
        }
    }
}

/// Error returned when a string is not a valid `"HH:MM"` clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTime {
    /// The rejected input.
    pub value: String,
}

impl InvalidTime {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl fmt::Display for InvalidTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid clock time '{}': expected zero-padded HH:MM",
            self.value
        )
    }
}

impl std::error::Error for InvalidTime {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_zero_padded_times() {
        assert!(ClockTime::parse("00:00").is_ok());
        assert!(ClockTime::parse("08:30").is_ok());
        assert!(ClockTime::parse("23:59").is_ok());
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for bad in ["8:30", "0830", "24:00", "12:60", "12:3", "ab:cd", "", "12:34:56"] {
            assert!(ClockTime::parse(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn ordering_matches_chronology_same_day() {
        let morning = ClockTime::parse("09:15").unwrap();
        let noon = ClockTime::parse("12:00").unwrap();
        let evening = ClockTime::parse("21:45").unwrap();

        assert!(morning < noon);
        assert!(noon < evening);
    }

    #[test]
    fn open_slot_never_compares_as_a_time() {
        let slot = TimeOfDay::Undefined;
        assert!(slot.as_clock().is_none());
        assert!(slot.is_undefined());
    }

    #[test]
    fn display_formats() {
        assert_eq!(TimeOfDay::at("07:05").unwrap().to_string(), "07:05");
        assert_eq!(TimeOfDay::Undefined.to_string(), "TBD");
    }

    #[test]
    fn serde_round_trips_as_plain_string() {
        let time = ClockTime::parse("13:00").unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"13:00\"");

        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, time);
    }

    #[test]
    fn serde_rejects_malformed_clock_time() {
        let result: Result<ClockTime, _> = serde_json::from_str("\"9:00\"");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_time_display_names_the_input() {
        let err = ClockTime::parse("99:99").unwrap_err();
        assert!(err.to_string().contains("99:99"));
    }
}

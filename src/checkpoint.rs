//! Checkpoints on the critical route.
//!
//! A route is an ordered list of checkpoints. Position carries meaning:
//! the first checkpoint is the pickup point and the last one is the
//! destination. There is no separate role field; insertion order is the
//! physical stop order and stays authoritative for sequencing checks.

use crate::time::TimeOfDay;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display location of a checkpoint.
///
/// A location is either a concrete named place or still undefined. An
/// operator who has only named the origin city has not yet given an
/// exact pickup point; the audit engine treats that the same as an
/// undefined location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    /// No place has been agreed yet.
    Undefined,
    /// A concrete place name or address.
    Named(String),
}

impl Location {
    /// Convenience constructor for a named place.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Returns the place name, if one has been set.
    pub fn as_named(&self) -> Option<&str> {
        match self {
            Self::Undefined => None,
            Self::Named(name) => Some(name),
        }
    }

    /// Returns true when no place has been set.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("TBD"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// One stop on the critical route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Identifier, unique within the route.
    pub id: String,
    /// Display location of the stop.
    pub location: Location,
    /// Scheduled arrival time.
    pub arrival: TimeOfDay,
    /// Scheduled departure time.
    pub departure: TimeOfDay,
    /// Marks a rigid meal stop whose slot must honor the meal window.
    #[serde(default)]
    pub meal_stop: bool,
}

impl Checkpoint {
    /// Creates a checkpoint with both schedule slots open.
    pub fn new(id: impl Into<String>, location: Location) -> Self {
        Self {
            id: id.into(),
            location,
            arrival: TimeOfDay::Undefined,
            departure: TimeOfDay::Undefined,
            meal_stop: false,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: TimeOfDay) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the departure time.
    pub fn with_departure(mut self, departure: TimeOfDay) -> Self {
        self.departure = departure;
        self
    }

    /// Marks the checkpoint as a rigid meal stop.
    pub fn as_meal_stop(mut self) -> Self {
        self.meal_stop = true;
        self
    }

    /// Returns true while either schedule slot is still open.
    pub fn has_open_times(&self) -> bool {
        self.arrival.is_undefined() || self.departure.is_undefined()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_checkpoint_starts_with_open_times() {
        let cp = Checkpoint::new("stop-1", Location::Undefined);
        assert!(cp.has_open_times());
        assert!(!cp.meal_stop);
    }

    #[test]
    fn times_close_once_both_slots_are_set() {
        let cp = Checkpoint::new("stop-2", Location::named("Plaza de Armas"))
            .with_arrival(TimeOfDay::at("09:00").unwrap())
            .with_departure(TimeOfDay::at("09:20").unwrap());

        assert!(!cp.has_open_times());
    }

    #[test]
    fn one_open_slot_keeps_the_schedule_open() {
        let cp = Checkpoint::new("stop-3", Location::named("Caseta 57"))
            .with_arrival(TimeOfDay::at("11:00").unwrap());

        assert!(cp.has_open_times());
    }

    #[test]
    fn location_display() {
        assert_eq!(Location::Undefined.to_string(), "TBD");
        assert_eq!(Location::named("Terminal QRO").to_string(), "Terminal QRO");
    }

    #[test]
    fn meal_stop_flag_defaults_to_false_in_json() {
        let json = r#"{
            "id": "stop-1",
            "location": {"Named": "Terminal QRO"},
            "arrival": "Undefined",
            "departure": "Undefined"
        }"#;

        let cp: Checkpoint = serde_json::from_str(json).unwrap();
        assert!(!cp.meal_stop);
    }
}

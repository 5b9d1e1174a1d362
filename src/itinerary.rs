//! The itinerary aggregate.

use crate::checkpoint::Checkpoint;
use crate::time::TimeOfDay;
use crate::verdict::AuditResult;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Enforcement mode of an itinerary.
///
/// The audit engine runs the same rules in both modes; the mode decides
/// whether completeness findings are advisory or blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Drafting phase. Completeness findings are advisory.
    Planning,
    /// Release gate. Completeness findings block operation.
    Certification,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Planning => write!(f, "planning"),
            Mode::Certification => write!(f, "certification"),
        }
    }
}

/// Negotiated meal window for the route's rigid meal stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealWindow {
    /// Start of the window.
    pub start: TimeOfDay,
    /// End of the window.
    pub end: TimeOfDay,
}

impl MealWindow {
    /// A window that has not been negotiated yet.
    pub fn undefined() -> Self {
        Self {
            start: TimeOfDay::Undefined,
            end: TimeOfDay::Undefined,
        }
    }

    /// A negotiated window.
    pub fn between(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Returns true while the window start is still open.
    pub fn is_undefined(&self) -> bool {
        self.start.is_undefined()
    }
}

/// A full outbound-trip record.
///
/// The audit verdict is a function of `mode`, `origin_city`,
/// `meal_window`, `capacity_required` and `critical_route` alone. The
/// remaining fields identify the trip and carry the last stored
/// verdict; editing them never changes what the engine reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Trip identifier, e.g. `SAL-QUE-20260314-K3F9`.
    pub trip_id: String,
    /// City the trip departs from. A pickup location equal to this bare
    /// city name counts as "no exact pickup point yet".
    pub origin_city: String,
    /// Display name of the final destination.
    pub destination: String,
    /// Service date of the outbound trip.
    pub service_date: NaiveDate,
    /// When the draft was created.
    pub created_at: DateTime<Utc>,
    /// Current enforcement mode.
    pub mode: Mode,
    /// Negotiated meal window.
    pub meal_window: MealWindow,
    /// Passenger seats required. Zero means not yet specified.
    pub capacity_required: u32,
    /// Ordered stops. Index 0 is the pickup point, the last entry is
    /// the destination. Must never be empty.
    pub critical_route: Vec<Checkpoint>,
    /// Verdict stored by the last audit run.
    pub audit: AuditResult,
}

impl Itinerary {
    /// Returns the pickup point, the first checkpoint of the route.
    pub fn pickup_point(&self) -> Option<&Checkpoint> {
        self.critical_route.first()
    }

    /// Returns the destination stop, the last checkpoint of the route.
    pub fn destination_stop(&self) -> Option<&Checkpoint> {
        self.critical_route.last()
    }
}

//! Completeness rules.
//!
//! The four mode-gated rules live in one table. Each rule knows its
//! category, message, evidence hint and trigger predicate; severity is
//! derived from the itinerary mode at evaluation time, so there is a
//! single rule set rather than one per mode. Chronological consistency
//! is not part of this table: it is always blocking and can emit more
//! than one finding, so the engine runs it as a separate pass.

use crate::finding::{Finding, FindingCategory};
use crate::itinerary::{Itinerary, Mode};

/// Severity of a finding at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    /// Surfaced but does not block release.
    Advisory,
    /// Blocks operational release.
    Blocking,
}

impl Severity {
    pub(crate) fn is_blocking(self) -> bool {
        matches!(self, Severity::Blocking)
    }
}

/// The completeness rules, evaluated in the order of [`EVALUATION_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompletenessRule {
    /// The meal window has not been negotiated.
    MealWindow,
    /// The first checkpoint has no exact pickup location.
    PickupPoint,
    /// Required capacity has not been specified.
    Capacity,
    /// At least one checkpoint has an open schedule slot.
    StopSchedule,
}

/// Fixed evaluation order. The findings list follows this sequence.
pub(crate) const EVALUATION_ORDER: [CompletenessRule; 4] = [
    CompletenessRule::MealWindow,
    CompletenessRule::PickupPoint,
    CompletenessRule::Capacity,
    CompletenessRule::StopSchedule,
];

impl CompletenessRule {
    /// Whether the rule fires against the given itinerary.
    ///
    /// Callers must have checked that the route is non-empty; the
    /// pickup-point rule inspects the first checkpoint directly.
    pub(crate) fn triggered(self, itinerary: &Itinerary) -> bool {
        match self {
            CompletenessRule::MealWindow => itinerary.meal_window.is_undefined(),
            CompletenessRule::PickupPoint => {
                let pickup = itinerary
                    .pickup_point()
                    .expect("route checked non-empty before rules run");
                // A location naming only the origin city is still
                // pending: the operator has not given an exact point.
                match pickup.location.as_named() {
                    None => true,
                    Some(name) => name == itinerary.origin_city,
                }
            }
            CompletenessRule::Capacity => itinerary.capacity_required == 0,
            CompletenessRule::StopSchedule => itinerary
                .critical_route
                .iter()
                .any(|cp| cp.has_open_times()),
        }
    }

    /// Severity of this rule under the given mode.
    pub(crate) fn severity_for(self, mode: Mode) -> Severity {
        // All completeness rules share the same gating: advisory while
        // planning, blocking at certification.
        match mode {
            Mode::Planning => Severity::Advisory,
            Mode::Certification => Severity::Blocking,
        }
    }

    fn category(self) -> FindingCategory {
        match self {
            CompletenessRule::MealWindow | CompletenessRule::StopSchedule => {
                FindingCategory::Schedule
            }
            CompletenessRule::PickupPoint => FindingCategory::Route,
            CompletenessRule::Capacity => FindingCategory::Logistics,
        }
    }

    fn message(self) -> &'static str {
        match self {
            CompletenessRule::MealWindow => "Meal window not yet defined.",
            CompletenessRule::PickupPoint => "Exact pickup point not yet defined.",
            CompletenessRule::Capacity => "Required capacity not specified.",
            CompletenessRule::StopSchedule => "Pending schedule times in route.",
        }
    }

    fn evidence(self) -> &'static str {
        match self {
            CompletenessRule::MealWindow => "Set the negotiated meal window",
            CompletenessRule::PickupPoint => "Specify a pickup address or landmark",
            CompletenessRule::Capacity => "Set the required passenger count",
            CompletenessRule::StopSchedule => "Complete the stop schedule",
        }
    }

    /// Builds the finding this rule emits under the given mode.
    pub(crate) fn finding_for(self, mode: Mode) -> Finding {
        Finding::new(
            self.category(),
            self.message(),
            self.severity_for(mode).is_blocking(),
        )
        .with_evidence(self.evidence())
    }
}

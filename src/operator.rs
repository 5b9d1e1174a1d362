//! Operator edits and the certification flow.
//!
//! Every operation here follows the same discipline: apply the edit,
//! then re-run the audit engine and store the fresh verdict before
//! returning. A stored verdict is never trusted across a write; each
//! mutation re-derives it from current state.

use crate::engine::audit;
use crate::itinerary::{Itinerary, MealWindow, Mode};
use crate::time::TimeOfDay;
use crate::verdict::AuditResult;
use std::collections::HashMap;

/// Arrival/departure pair for one checkpoint in a schedule update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopSchedule {
    /// New arrival time.
    pub arrival: TimeOfDay,
    /// New departure time.
    pub departure: TimeOfDay,
}

impl StopSchedule {
    /// Creates a schedule entry.
    pub fn new(arrival: TimeOfDay, departure: TimeOfDay) -> Self {
        Self { arrival, departure }
    }
}

/// Re-runs the audit and stores the verdict on the itinerary.
///
/// The named operations below call this after every edit. It is public
/// so callers that merge arbitrary field patches themselves can honor
/// the same rule: every accepted write is followed by a re-audit.
pub fn reaudit(itinerary: &mut Itinerary) -> &AuditResult {
    itinerary.audit = audit(itinerary);
    &itinerary.audit
}

/// Sets the negotiated meal window and re-audits.
pub fn set_meal_window(
    itinerary: &mut Itinerary,
    start: TimeOfDay,
    end: TimeOfDay,
) -> &AuditResult {
    itinerary.meal_window = MealWindow::between(start, end);
    tracing::debug!(trip_id = %itinerary.trip_id, "meal window updated");
    reaudit(itinerary)
}

/// Sets the exact pickup location on the first checkpoint and re-audits.
///
/// Does nothing to the route if it is empty; the re-audit will then
/// panic on the empty-route contract, same as any other audit call.
pub fn define_pickup_point(itinerary: &mut Itinerary, location: impl Into<String>) -> &AuditResult {
    if let Some(pickup) = itinerary.critical_route.first_mut() {
        pickup.location = crate::checkpoint::Location::Named(location.into());
    }
    tracing::debug!(trip_id = %itinerary.trip_id, "pickup point updated");
    reaudit(itinerary)
}

/// Sets the required seat count and re-audits.
pub fn set_capacity(itinerary: &mut Itinerary, capacity: u32) -> &AuditResult {
    itinerary.capacity_required = capacity;
    tracing::debug!(trip_id = %itinerary.trip_id, capacity, "capacity updated");
    reaudit(itinerary)
}

/// Applies per-checkpoint schedule times keyed by checkpoint id, then
/// re-audits.
///
/// Ids in the map that match no checkpoint are ignored. The re-audit
/// still runs even when nothing matched, so the stored verdict always
/// reflects current state.
pub fn update_schedule<'a>(
    itinerary: &'a mut Itinerary,
    times: &HashMap<String, StopSchedule>,
) -> &'a AuditResult {
    for checkpoint in &mut itinerary.critical_route {
        if let Some(entry) = times.get(&checkpoint.id) {
            checkpoint.arrival = entry.arrival.clone();
            checkpoint.departure = entry.departure.clone();
        }
    }
    tracing::debug!(
        trip_id = %itinerary.trip_id,
        updates = times.len(),
        "schedule updated"
    );
    reaudit(itinerary)
}

/// Outcome of a certification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationOutcome {
    /// True when the re-audit cleared the itinerary for operation.
    pub granted: bool,
    /// The verdict that was stored on the itinerary.
    pub audit: AuditResult,
}

/// Switches the itinerary to certification mode and re-audits under the
/// stricter gating.
///
/// A blocked or incomplete result is stored on the itinerary rather
/// than rolled back, so callers can surface the findings to the
/// operator. Release is granted only when the re-audit lands on
/// [`ReadyToOperate`](crate::AuditStatus::ReadyToOperate).
///
/// # Examples
///
/// ```
/// use itinerary_core::{certify, draft, DraftRequest, Mode};
///
/// let mut itinerary = draft(DraftRequest::new(
///     "Querétaro",
///     "Peña de Bernal",
///     "2026-03-14".parse().unwrap(),
/// ));
///
/// // A fresh draft cannot be certified: every completeness rule fires.
/// let outcome = certify(&mut itinerary);
/// assert!(!outcome.granted);
/// assert_eq!(itinerary.mode, Mode::Certification);
/// ```
pub fn certify(itinerary: &mut Itinerary) -> CertificationOutcome {
    itinerary.mode = Mode::Certification;
    let verdict = reaudit(itinerary).clone();
    let granted = verdict.status.permits_release();

    if granted {
        tracing::info!(
            trip_id = %itinerary.trip_id,
            "itinerary certified, cleared for operation"
        );
    } else {
        tracing::warn!(
            trip_id = %itinerary.trip_id,
            status = %verdict.status,
            findings = verdict.findings.len(),
            "certification refused"
        );
    }

    CertificationOutcome {
        granted,
        audit: verdict,
    }
}

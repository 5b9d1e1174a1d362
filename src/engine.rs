//! The itinerary audit engine.
//!
//! A single pure function inspects an itinerary snapshot and produces a
//! verdict: derived status plus the findings that led to it, in fixed
//! rule-evaluation order. Every rule group is always evaluated; nothing
//! short-circuits. The engine holds no state, performs no I/O and never
//! mutates its input, so it can be called concurrently from any number
//! of callers without coordination.

use crate::checkpoint::Checkpoint;
use crate::finding::{Finding, FindingCategory};
use crate::itinerary::{Itinerary, Mode};
use crate::rules::EVALUATION_ORDER;
use crate::verdict::{AuditResult, AuditStatus};

/// Audits an itinerary snapshot and returns a fresh verdict.
///
/// Evaluation runs in a fixed order that also fixes the findings
/// sequence: meal window, pickup point, capacity, per-stop schedule
/// completeness, then chronological consistency. The first four rules
/// emit at most one finding each and are advisory in planning mode but
/// blocking at certification. Chronology findings are blocking under
/// any mode and may fire once per offending checkpoint or pair.
///
/// Two calls on the same snapshot yield the same status and findings;
/// only the timestamp differs. The caller is responsible for writing
/// the result back onto its own itinerary state.
///
/// # Panics
///
/// Panics if `critical_route` is empty. A route without a pickup point
/// is a caller contract violation, not a recoverable condition; the
/// draft generator always seeds a non-empty route.
///
/// # Examples
///
/// ```
/// use itinerary_core::{audit, draft, AuditStatus, DraftRequest};
///
/// let itinerary = draft(DraftRequest::new(
///     "Querétaro",
///     "Peña de Bernal",
///     "2026-03-14".parse().unwrap(),
/// ));
///
/// let verdict = audit(&itinerary);
/// assert_eq!(verdict.status, AuditStatus::Incomplete);
/// ```
pub fn audit(itinerary: &Itinerary) -> AuditResult {
    assert!(
        !itinerary.critical_route.is_empty(),
        "itinerary {} has an empty route; a route must carry at least a pickup point",
        itinerary.trip_id
    );

    let mut findings = Vec::new();

    // 1. Completeness rules, fixed order, at most one finding each.
    for rule in EVALUATION_ORDER {
        if rule.triggered(itinerary) {
            findings.push(rule.finding_for(itinerary.mode));
        }
    }

    // 2. Chronological consistency, blocking under any mode.
    check_chronology(&itinerary.critical_route, &mut findings);

    // 3. Derive the status from the collected findings.
    let status = derive_status(itinerary.mode, &findings);

    tracing::debug!(
        trip_id = %itinerary.trip_id,
        mode = %itinerary.mode,
        status = %status,
        findings = findings.len(),
        "itinerary audited"
    );

    AuditResult::new(status, findings)
}

/// Emits one finding per chronological defect.
///
/// A checkpoint is only inspected once both of its own times are set;
/// open slots are the schedule-completeness rule's concern. The
/// sequencing comparison additionally needs the previous checkpoint's
/// departure to be set.
fn check_chronology(route: &[Checkpoint], findings: &mut Vec<Finding>) {
    for (index, current) in route.iter().enumerate() {
        let (arrival, departure) = match (current.arrival.as_clock(), current.departure.as_clock())
        {
            (Some(arrival), Some(departure)) => (arrival, departure),
            _ => continue,
        };

        if arrival > departure {
            findings.push(Finding::new(
                FindingCategory::Route,
                format!("Arrival later than departure at {}.", current.location),
                true,
            ));
        }

        if index > 0 {
            let previous = &route[index - 1];
            if let Some(previous_departure) = previous.departure.as_clock() {
                if previous_departure > arrival {
                    findings.push(Finding::new(
                        FindingCategory::Route,
                        format!(
                            "Sequence error between {} and {}.",
                            previous.location, current.location
                        ),
                        true,
                    ));
                }
            }
        }
    }
}

fn derive_status(mode: Mode, findings: &[Finding]) -> AuditStatus {
    let has_critical = findings.iter().any(|f| f.is_critical);
    let has_advisory = findings.iter().any(|f| !f.is_critical);

    if has_critical {
        AuditStatus::Blocked
    } else if has_advisory {
        AuditStatus::Incomplete
    } else if mode == Mode::Planning {
        // A clean planning-phase itinerary is validated, never released.
        AuditStatus::Validated
    } else {
        AuditStatus::ReadyToOperate
    }
}

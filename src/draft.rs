//! Draft generation.
//!
//! A draft is a planning-mode itinerary with every key datum still
//! undefined: the route skeleton is in place but the pickup point,
//! schedule, capacity and meal window all start open. The generator
//! runs the audit engine once before handing the draft out, so the
//! stored verdict is never the placeholder.

use crate::checkpoint::{Checkpoint, Location};
use crate::engine::audit;
use crate::itinerary::{Itinerary, MealWindow, Mode};
use crate::verdict::AuditResult;
use chrono::{NaiveDate, Utc};

/// Input for generating a new draft itinerary.
///
/// # Examples
///
/// ```
/// use itinerary_core::{draft, DraftRequest, Mode};
///
/// let request = DraftRequest::new(
///     "Querétaro",
///     "Peña de Bernal",
///     "2026-03-14".parse().unwrap(),
/// )
/// .with_estimated_capacity(38);
///
/// let itinerary = draft(request);
/// assert_eq!(itinerary.mode, Mode::Planning);
/// assert_eq!(itinerary.capacity_required, 38);
/// ```
#[derive(Debug, Clone)]
pub struct DraftRequest {
    /// City the trip departs from.
    pub origin_city: String,
    /// Display name of the final destination.
    pub destination: String,
    /// Service date of the outbound trip.
    pub service_date: NaiveDate,
    /// Estimated seats, if the operator already has a number.
    pub estimated_capacity: Option<u32>,
}

impl DraftRequest {
    /// Creates a request with no capacity estimate.
    pub fn new(
        origin_city: impl Into<String>,
        destination: impl Into<String>,
        service_date: NaiveDate,
    ) -> Self {
        Self {
            origin_city: origin_city.into(),
            destination: destination.into(),
            service_date,
            estimated_capacity: None,
        }
    }

    /// Sets the estimated seat count.
    pub fn with_estimated_capacity(mut self, capacity: u32) -> Self {
        self.estimated_capacity = Some(capacity);
        self
    }
}

/// Generates a draft itinerary and seeds its initial audit verdict.
///
/// The route skeleton has five stops: the pickup point (location still
/// undefined so the pickup rule fires until an exact address is given),
/// two intermediate checkpoints, a rigid meal stop, and the
/// destination. Capacity defaults to zero when no estimate was given,
/// which keeps the capacity rule live until someone sets a real count.
pub fn draft(request: DraftRequest) -> Itinerary {
    let created_at = Utc::now();
    let trip_id = trip_id(&request.origin_city, request.service_date, created_at.timestamp_millis());

    let critical_route = vec![
        Checkpoint::new("stop-1", Location::Undefined),
        Checkpoint::new("stop-2", Location::named("Checkpoint 1")),
        Checkpoint::new("stop-3", Location::named("Meal stop (rigid)")).as_meal_stop(),
        Checkpoint::new("stop-4", Location::named("Checkpoint 2")),
        Checkpoint::new("stop-5", Location::named(request.destination.clone())),
    ];

    let mut itinerary = Itinerary {
        trip_id,
        origin_city: request.origin_city,
        destination: request.destination,
        service_date: request.service_date,
        created_at,
        mode: Mode::Planning,
        meal_window: MealWindow::undefined(),
        capacity_required: request.estimated_capacity.unwrap_or(0),
        critical_route,
        audit: AuditResult::pending(),
    };

    // Seed the real verdict; the placeholder never leaves this function.
    itinerary.audit = audit(&itinerary);

    tracing::info!(
        trip_id = %itinerary.trip_id,
        status = %itinerary.audit.status,
        "itinerary draft generated"
    );

    itinerary
}

/// Builds a trip id of the form `SAL-QUE-20260314-K3F9`: a three-letter
/// origin prefix, the service date, and a base-36 suffix derived from
/// the creation timestamp.
fn trip_id(origin_city: &str, service_date: NaiveDate, timestamp_millis: i64) -> String {
    let prefix: String = origin_city
        .chars()
        .take(3)
        .collect::<String>()
        .to_uppercase();

    format!(
        "SAL-{}-{}-{}",
        prefix,
        service_date.format("%Y%m%d"),
        base36_suffix(timestamp_millis)
    )
}

/// Last four base-36 digits of the timestamp, zero-padded.
fn base36_suffix(timestamp_millis: i64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    let mut value = timestamp_millis.unsigned_abs();
    let mut encoded = [b'0'; 4];
    for slot in encoded.iter_mut().rev() {
        *slot = DIGITS[(value % 36) as usize];
        value /= 36;
    }

    String::from_utf8_lossy(&encoded).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::FindingCategory;
    use crate::verdict::AuditStatus;

    fn request() -> DraftRequest {
        DraftRequest::new(
            "Querétaro",
            "Peña de Bernal",
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        )
    }

    #[test]
    fn trip_id_shape() {
        let id = trip_id(
            "Querétaro",
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            1_773_500_000_000,
        );

        assert!(id.starts_with("SAL-QUE-20260314-"));
        let suffix = id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn trip_id_handles_short_city_names() {
        let id = trip_id("Ur", NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(), 0);
        assert!(id.starts_with("SAL-UR-20260314-"));
    }

    #[test]
    fn draft_route_skeleton() {
        let itinerary = draft(request());

        assert_eq!(itinerary.critical_route.len(), 5);
        assert!(itinerary.pickup_point().unwrap().location.is_undefined());
        assert!(itinerary.critical_route[2].meal_stop);
        assert_eq!(
            itinerary.destination_stop().unwrap().location.as_named(),
            Some("Peña de Bernal")
        );
        assert!(itinerary
            .critical_route
            .iter()
            .all(|cp| cp.has_open_times()));
    }

    #[test]
    fn draft_starts_in_planning_with_everything_open() {
        let itinerary = draft(request());

        assert_eq!(itinerary.mode, Mode::Planning);
        assert!(itinerary.meal_window.is_undefined());
        assert_eq!(itinerary.capacity_required, 0);
    }

    #[test]
    fn draft_audit_is_seeded_not_pending() {
        let itinerary = draft(request());

        // All four completeness rules fire, advisory in planning mode.
        assert_eq!(itinerary.audit.status, AuditStatus::Incomplete);
        assert_eq!(itinerary.audit.findings.len(), 4);
        assert!(itinerary.audit.findings.iter().all(|f| !f.is_critical));

        let categories: Vec<_> = itinerary.audit.findings.iter().map(|f| f.category).collect();
        assert_eq!(
            categories,
            vec![
                FindingCategory::Schedule,
                FindingCategory::Route,
                FindingCategory::Logistics,
                FindingCategory::Schedule,
            ]
        );
    }

    #[test]
    fn capacity_estimate_is_honored() {
        let itinerary = draft(request().with_estimated_capacity(38));
        assert_eq!(itinerary.capacity_required, 38);

        // The capacity rule no longer fires.
        assert!(itinerary
            .audit
            .findings
            .iter()
            .all(|f| f.category != FindingCategory::Logistics));
    }
}

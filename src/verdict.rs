//! Audit verdicts.
//!
//! The engine's output value: a status, the ordered findings that led
//! to it, and the computation timestamp. Callers store the verdict back
//! onto the itinerary; the engine itself never mutates anything.

use crate::finding::Finding;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of an itinerary audit.
///
/// `ReadyToOperate` is reachable only from certification mode with zero
/// findings. A fully clean itinerary in planning mode stops at
/// `Validated`; readiness is a certification-time property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditStatus {
    /// At least one critical finding blocks release.
    Blocked,
    /// Only advisory findings remain.
    Incomplete,
    /// Zero findings in planning mode.
    Validated,
    /// Zero findings in certification mode; cleared for operation.
    ReadyToOperate,
}

impl AuditStatus {
    /// Returns true when the itinerary is cleared for operation.
    pub fn permits_release(&self) -> bool {
        matches!(self, AuditStatus::ReadyToOperate)
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditStatus::Blocked => write!(f, "blocked"),
            AuditStatus::Incomplete => write!(f, "incomplete"),
            AuditStatus::Validated => write!(f, "validated"),
            AuditStatus::ReadyToOperate => write!(f, "ready_to_operate"),
        }
    }
}

/// Result of one audit computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResult {
    /// Derived status.
    pub status: AuditStatus,
    /// Findings in rule-evaluation order, not severity order.
    pub findings: Vec<Finding>,
    /// When this result was computed.
    pub audited_at: DateTime<Utc>,
}

impl AuditResult {
    /// Creates a result stamped with the current time.
    pub fn new(status: AuditStatus, findings: Vec<Finding>) -> Self {
        Self {
            status,
            findings,
            audited_at: Utc::now(),
        }
    }

    /// Placeholder verdict for a freshly constructed itinerary that has
    /// not been through the engine yet. Draft generation replaces it
    /// with a real result before the itinerary is handed out.
    pub fn pending() -> Self {
        Self::new(AuditStatus::Incomplete, Vec::new())
    }

    /// Returns true when any finding is critical.
    pub fn has_critical(&self) -> bool {
        self.findings.iter().any(|f| f.is_critical)
    }

    /// Iterates over the critical findings only.
    pub fn critical_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_critical)
    }
}

impl fmt::Display for AuditResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} findings)", self.status, self.findings.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::FindingCategory;

    #[test]
    fn status_display() {
        assert_eq!(AuditStatus::Blocked.to_string(), "blocked");
        assert_eq!(AuditStatus::ReadyToOperate.to_string(), "ready_to_operate");
    }

    #[test]
    fn only_ready_to_operate_permits_release() {
        assert!(AuditStatus::ReadyToOperate.permits_release());
        assert!(!AuditStatus::Validated.permits_release());
        assert!(!AuditStatus::Incomplete.permits_release());
        assert!(!AuditStatus::Blocked.permits_release());
    }

    #[test]
    fn pending_result_is_incomplete_and_empty() {
        let pending = AuditResult::pending();
        assert_eq!(pending.status, AuditStatus::Incomplete);
        assert!(pending.findings.is_empty());
        assert!(!pending.has_critical());
    }

    #[test]
    fn critical_findings_are_filtered() {
        let result = AuditResult::new(
            AuditStatus::Blocked,
            vec![
                Finding::new(FindingCategory::Schedule, "Pending times.", false),
                Finding::new(FindingCategory::Route, "Sequence error.", true),
            ],
        );

        assert!(result.has_critical());
        assert_eq!(result.critical_findings().count(), 1);
    }
}

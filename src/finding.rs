//! Audit findings.
//!
//! A finding is one observation produced by the audit engine: which
//! area of the itinerary it concerns, a human-readable message, whether
//! it blocks operational release, and optionally what evidence would
//! resolve it. Criticality is computed at evaluation time from the
//! itinerary mode, not baked into the rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Area of the itinerary a finding concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingCategory {
    /// Route layout: pickup point, stop ordering.
    Route,
    /// Schedule: meal window, per-stop times.
    Schedule,
    /// Logistics: capacity and related operational data.
    Logistics,
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingCategory::Route => write!(f, "route"),
            FindingCategory::Schedule => write!(f, "schedule"),
            FindingCategory::Logistics => write!(f, "logistics"),
        }
    }
}

/// One audit observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Area of the itinerary this concerns.
    pub category: FindingCategory,
    /// Human-readable description.
    pub message: String,
    /// Whether this finding blocks operational release.
    pub is_critical: bool,
    /// Hint describing what would resolve the finding, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_required: Option<String>,
}

impl Finding {
    /// Creates a finding without an evidence hint.
    pub fn new(category: FindingCategory, message: impl Into<String>, is_critical: bool) -> Self {
        Self {
            category,
            message: message.into(),
            is_critical,
            evidence_required: None,
        }
    }

    /// Attaches a hint describing what would resolve the finding.
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence_required = Some(evidence.into());
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}{}] {}",
            self.category,
            if self.is_critical { ", critical" } else { "" },
            self.message
        )?;

        if let Some(evidence) = &self.evidence_required {
            write!(f, " (resolve: {})", evidence)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display() {
        assert_eq!(FindingCategory::Route.to_string(), "route");
        assert_eq!(FindingCategory::Schedule.to_string(), "schedule");
        assert_eq!(FindingCategory::Logistics.to_string(), "logistics");
    }

    #[test]
    fn display_includes_criticality_and_evidence() {
        let finding = Finding::new(FindingCategory::Logistics, "Capacity not specified.", true)
            .with_evidence("Set the passenger count");

        let text = finding.to_string();
        assert!(text.contains("logistics"));
        assert!(text.contains("critical"));
        assert!(text.contains("Capacity not specified."));
        assert!(text.contains("Set the passenger count"));
    }

    #[test]
    fn advisory_display_omits_critical_marker() {
        let finding = Finding::new(FindingCategory::Schedule, "Pending times.", false);
        assert!(!finding.to_string().contains("critical"));
    }

    #[test]
    fn evidence_is_omitted_from_json_when_absent() {
        let finding = Finding::new(FindingCategory::Route, "Sequence error.", true);
        let json = serde_json::to_string(&finding).unwrap();
        assert!(!json.contains("evidence_required"));
    }
}

//! Audit verdict walkthrough.
//!
//! This example shows:
//! 1. How the same findings read under planning vs certification mode
//! 2. Chronology defects blocking release under any mode
//! 3. Rejection of malformed schedule input at the parsing boundary
//!
//! Run with: `cargo run --example audit_findings`

use itinerary_core::{audit, draft, ClockTime, DraftRequest, Error, Mode, TimeOfDay};

fn main() {
    println!("=== Audit Findings Example ===\n");

    let mut itinerary = draft(DraftRequest::new(
        "Querétaro",
        "Peña de Bernal",
        "2026-03-14".parse().expect("valid date"),
    ));

    // Scenario 1: the same snapshot under both modes
    println!("--- Scenario 1: Mode Gating ---");
    println!("Planning verdict: {}", itinerary.audit);

    itinerary.mode = Mode::Certification;
    let strict = audit(&itinerary);
    println!("Certification verdict: {}", strict);
    for finding in strict.critical_findings() {
        println!("  {}", finding);
    }

    // Scenario 2: a schedule inversion is critical even while planning
    println!("\n--- Scenario 2: Chronology ---");
    itinerary.mode = Mode::Planning;
    itinerary.critical_route[0].arrival = TimeOfDay::at("09:00").expect("valid time");
    itinerary.critical_route[0].departure = TimeOfDay::at("08:00").expect("valid time");

    let verdict = audit(&itinerary);
    println!("Planning verdict with inversion: {}", verdict);
    for finding in verdict.critical_findings() {
        println!("  {}", finding);
    }

    // Scenario 3: malformed operator input never reaches the schedule
    println!("\n--- Scenario 3: Input Validation ---");
    for raw in ["7:00", "25:00", "07:00"] {
        match ClockTime::parse(raw).map_err(Error::from) {
            Ok(time) => println!("  '{}' accepted as {}", raw, time),
            Err(e) => println!("  '{}' rejected: {}", raw, e),
        }
    }
}

//! Full itinerary lifecycle demonstration.
//!
//! This example shows:
//! 1. Draft generation with every key datum still undefined
//! 2. Operator edits, each followed by an automatic re-audit
//! 3. A premature certification attempt being refused
//! 4. A successful certification once the itinerary is complete
//!
//! Run with: `cargo run --example draft_lifecycle`

use itinerary_core::{certify, draft, operator, DraftRequest, StopSchedule, TimeOfDay};
use std::collections::HashMap;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Itinerary Lifecycle Example ===\n");

    // Scenario 1: a fresh draft
    println!("--- Scenario 1: Draft Generation ---");
    let mut itinerary = draft(DraftRequest::new(
        "Querétaro",
        "Peña de Bernal",
        "2026-03-14".parse().expect("valid date"),
    ));

    println!("Trip {} created", itinerary.trip_id);
    println!("Status: {}", itinerary.audit.status);
    for finding in &itinerary.audit.findings {
        println!("  {}", finding);
    }

    // Scenario 2: certification before the data is in
    println!("\n--- Scenario 2: Premature Certification ---");
    let outcome = certify(&mut itinerary);
    println!(
        "Release granted: {} (status: {})",
        outcome.granted, outcome.audit.status
    );

    // Scenario 3: fill in the itinerary step by step
    println!("\n--- Scenario 3: Operator Edits ---");
    operator::set_meal_window(
        &mut itinerary,
        TimeOfDay::at("13:00").expect("valid time"),
        TimeOfDay::at("14:00").expect("valid time"),
    );
    println!("Meal window set, {} findings left", itinerary.audit.findings.len());

    operator::define_pickup_point(&mut itinerary, "Terminal QRO, Andén 4");
    println!("Pickup point set, {} findings left", itinerary.audit.findings.len());

    operator::set_capacity(&mut itinerary, 40);
    println!("Capacity set, {} findings left", itinerary.audit.findings.len());

    let times: HashMap<String, StopSchedule> = [
        ("stop-1", "07:00", "07:15"),
        ("stop-2", "08:00", "08:10"),
        ("stop-3", "13:00", "14:00"),
        ("stop-4", "15:00", "15:10"),
        ("stop-5", "16:30", "18:00"),
    ]
    .iter()
    .map(|(id, arrival, departure)| {
        (
            id.to_string(),
            StopSchedule::new(
                TimeOfDay::at(arrival).expect("valid time"),
                TimeOfDay::at(departure).expect("valid time"),
            ),
        )
    })
    .collect();
    operator::update_schedule(&mut itinerary, &times);
    println!("Schedule set, {} findings left", itinerary.audit.findings.len());

    // Scenario 4: certification now goes through
    println!("\n--- Scenario 4: Certification ---");
    let outcome = certify(&mut itinerary);
    println!(
        "Release granted: {} (status: {})",
        outcome.granted, outcome.audit.status
    );
}

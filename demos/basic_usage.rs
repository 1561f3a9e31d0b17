//! Basic usage example for gazetteer-rs
//!
//! This example demonstrates how to:
//! - Build the in-memory store from a record sequence
//! - Run exact, prefix and substring filters
//! - Run a typo-tolerant search

use gazetteer_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Gazetteer-RS Basic Usage Example ===\n");

    // Build the store. A real application would load this from its dataset
    // (see `PlaceDb::load_from_path`); the store is immutable either way.
    let db = PlaceDb::from_records(vec![
        PlaceRecord::<StandardBackend>::new("Paris", "Ile-de-France", "France"),
        PlaceRecord::new("London", "England", "United Kingdom"),
        PlaceRecord::new("Londonderry", "Northern Ireland", "United Kingdom"),
        PlaceRecord::new("Berlin", "Berlin", "Germany"),
        PlaceRecord::new("Munich", "Bavaria", "Germany"),
        PlaceRecord::new("Nuremberg", "Bavaria", "Germany"),
        PlaceRecord::new("Lyon", "Auvergne-Rhone-Alpes", "France"),
    ]);
    println!("✓ Store built with {} records\n", db.len());

    // Example 1: Dataset statistics
    println!("--- Example 1: Statistics ---");
    let stats = db.stats();
    println!("Records: {}", stats.records);
    println!("States/Regions: {}", stats.states);
    println!("Countries: {}\n", stats.countries);

    // Example 2: Exact lookup, messy input
    println!("--- Example 2: Exact city lookup ---");
    for r in db.find_by_city("  BERLIN ") {
        println!("Found: {} ({}, {})", r.city(), r.state(), r.country());
    }
    println!();

    // Example 3: Distinct states of a country
    println!("--- Example 3: States in Germany ---");
    for s in db.states_in_country("germany") {
        println!("- {s}");
    }
    println!();

    // Example 4: Prefix autocomplete
    println!("--- Example 4: Cities starting with 'lond' ---");
    for r in db.find_cities_starting_with("lond", DEFAULT_LIMIT) {
        println!("- {}, {}", r.city(), r.country());
    }
    println!();

    // Example 5: Substring search
    println!("--- Example 5: Cities containing 'on' ---");
    for r in db.find_cities_containing("on", DEFAULT_LIMIT) {
        println!("- {}", r.city());
    }
    println!();

    // Example 6: Typo-tolerant search
    println!("--- Example 6: Fuzzy search for 'Berlim' ---");
    for hit in db.search_typo_tolerant("Berlim", DEFAULT_MAX_DISTANCE, DEFAULT_FUZZY_LIMIT) {
        println!(
            "- {} ({}, {}) at distance {}",
            hit.record.city(),
            hit.record.state(),
            hit.record.country(),
            hit.distance
        );
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}

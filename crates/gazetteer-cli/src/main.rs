//! gazetteer-cli — Command-line interface for gazetteer-core
//!
//! This binary is a thin adapter: it translates argv into the query calls of
//! `gazetteer-core` and prints the returned sequences. It holds no query
//! logic of its own.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ gazetteer-cli --input data/places.json stats
//!
//! - Exact lookups (case- and whitespace-insensitive)
//!   $ gazetteer-cli city berlin
//!   $ gazetteer-cli state bavaria
//!   $ gazetteer-cli country germany
//!
//! - Distinct states of a country, optionally by prefix
//!   $ gazetteer-cli states germany
//!   $ gazetteer-cli states germany --prefix ba
//!
//! - Substring and prefix city search
//!   $ gazetteer-cli cities lond
//!   $ gazetteer-cli complete lond --limit 5
//!
//! - Typo-tolerant search
//!   $ gazetteer-cli fuzzy berlim --max-distance 2
//!
//! Data source
//! -----------
//!
//! The CLI loads a JSON array of place records (`--input`, default
//! `data/places.json`); `.json.gz` works when the `compact` feature is
//! enabled. The dataset is read once, queries run against the in-memory
//! store.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use gazetteer_core::{PlaceDb, PlaceRecord, PlaceSearch, StandardBackend};

fn print_records(records: &[&PlaceRecord<StandardBackend>]) {
    if records.is_empty() {
        println!("No matching records");
        return;
    }
    for r in records {
        println!("{} — {}, {}", r.city(), r.state(), r.country());
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let db = PlaceDb::<StandardBackend>::load_from_path(&args.input)?;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Records: {}", stats.records);
            println!("  States/Regions: {}", stats.states);
            println!("  Countries: {}", stats.countries);
        }

        Commands::State { state } => {
            print_records(&db.find_by_state(&state));
        }

        Commands::City { city } => {
            print_records(&db.find_by_city(&city));
        }

        Commands::Country { country } => {
            print_records(&db.find_by_country(&country));
        }

        Commands::States {
            country,
            prefix,
            limit,
        } => {
            let states = match prefix {
                Some(p) => db.find_states_starting_with(&p, &country, limit),
                None => db.states_in_country(&country),
            };
            if states.is_empty() {
                println!("No states found for: {country}");
            } else {
                for s in states {
                    println!("- {s}");
                }
            }
        }

        Commands::Cities { query, limit } => {
            print_records(&db.find_cities_containing(&query, limit));
        }

        Commands::Complete { prefix, limit } => {
            print_records(&db.find_cities_starting_with(&prefix, limit));
        }

        Commands::Fuzzy {
            query,
            max_distance,
            limit,
        } => {
            let hits = db.search_typo_tolerant(&query, max_distance, limit);
            if hits.is_empty() {
                println!("No cities within distance {max_distance} of: {query}");
            } else {
                for hit in hits {
                    let r = hit.record;
                    println!(
                        "{} — {}, {} (distance {})",
                        r.city(),
                        r.state(),
                        r.country(),
                        hit.distance
                    );
                }
            }
        }
    }

    Ok(())
}

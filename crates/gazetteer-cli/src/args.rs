use clap::{Parser, Subcommand};
use gazetteer_core::{DEFAULT_FUZZY_LIMIT, DEFAULT_LIMIT, DEFAULT_MAX_DISTANCE};

/// CLI arguments for gazetteer-cli
#[derive(Debug, Parser)]
#[command(
    name = "gazetteer",
    version,
    about = "CLI for querying a place-name dataset (exact, prefix, substring and typo-tolerant)"
)]
pub struct CliArgs {
    /// Path to the input JSON (or JSON.gz) array of place records
    #[arg(short = 'i', long = "input", global = true, default_value = "data/places.json")]
    pub input: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// List records whose state matches exactly (case-insensitive)
    State {
        /// State/region name (e.g. Bavaria)
        state: String,
    },

    /// List records whose city matches exactly (case-insensitive)
    City {
        /// City name (e.g. Berlin)
        city: String,
    },

    /// List records in a country
    Country {
        /// Country name (e.g. Germany)
        country: String,
    },

    /// List the distinct states of a country
    States {
        /// Country name
        country: String,

        /// Only states starting with this prefix
        #[arg(short, long)]
        prefix: Option<String>,

        /// Maximum number of states to print when --prefix is given
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Search cities containing a substring
    Cities {
        /// Substring to search (case-insensitive)
        query: String,

        /// Maximum number of records to print
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Autocomplete city names by prefix
    Complete {
        /// City name prefix
        prefix: String,

        /// Maximum number of records to print
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Typo-tolerant city search ranked by edit distance
    Fuzzy {
        /// Possibly misspelled city name
        query: String,

        /// Maximum edit distance to accept
        #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DISTANCE)]
        max_distance: usize,

        /// Maximum number of records to print
        #[arg(short, long, default_value_t = DEFAULT_FUZZY_LIMIT)]
        limit: usize,
    },
}

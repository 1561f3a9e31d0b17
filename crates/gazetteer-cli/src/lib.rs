//! gazetteer-cli
//! =============
//!
//! Command-line interface for the `gazetteer-core` place-name database.
//!
//! This crate primarily provides a binary (`gazetteer-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! gazetteer-cli --help
//! gazetteer-cli --input data/places.json stats
//! gazetteer-cli --input data/places.json city berlin
//! gazetteer-cli --input data/places.json fuzzy berlim
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! `gazetteer-core` crate directly.

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.

//! gazetteer-rs — workspace façade crate.
//!
//! Re-exports the `gazetteer-core` API so demos and quick experiments can
//! depend on a single crate. For real use, depend on `gazetteer-core`
//! directly.

pub use gazetteer_core::*;

/// One-stop imports for the demos.
pub mod prelude {
    pub use gazetteer_core::{
        DbStats, DefaultBackend, GazetteerError, NameMatch, PlaceDb, PlaceRecord, PlaceSearch,
        Result, ScoredRecord, StandardBackend, DEFAULT_FUZZY_LIMIT, DEFAULT_LIMIT,
        DEFAULT_MAX_DISTANCE,
    };
}

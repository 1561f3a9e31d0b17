// crates/gazetteer-core/src/lib.rs

pub mod common;
pub mod distance;
pub mod error;
#[cfg(feature = "json")]
pub mod loader; // The public loader
pub mod model;
pub mod search; // Query logic lives here; the trait definition is in traits.rs
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::distance::edit_distance;
pub use crate::error::{GazetteerError, Result};
// Export the Model Types
pub use crate::model::{
    DefaultBackend, DefaultPlaceDb, PlaceDb, PlaceRecord, ScoredRecord, StandardBackend,
};
// Export the Search Trait (Crucial for users!)
pub use crate::search::{DEFAULT_FUZZY_LIMIT, DEFAULT_LIMIT, DEFAULT_MAX_DISTANCE};
// Export Text Utils
pub use crate::text::{normalize, normalize_opt};
pub use crate::traits::{NameMatch, PlaceSearch, StoreBackend};

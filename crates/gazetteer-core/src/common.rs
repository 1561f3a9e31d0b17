use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded store.
///
/// Returned by [`crate::PlaceSearch::stats`]; the state and country counts
/// are distinct normalized values, not raw record counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub records: usize,
    pub states: usize,
    pub countries: usize,
}

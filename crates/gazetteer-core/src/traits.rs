// crates/gazetteer-core/src/traits.rs
use crate::common::DbStats;
use crate::model::{PlaceRecord, ScoredRecord};
use crate::text::normalize;
use serde::{Deserialize, Serialize};

/// Storage backend for strings and floats used by the store.
///
/// This abstraction allows the crate to swap how textual and floating-point
/// data are stored internally (for example to use more compact types) without
/// changing the public API of accessors that return `&str`/`f64` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated types can be serialized/deserialized so stores can be written
/// out with serde.
pub trait StoreBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;
    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize + for<'de> Deserialize<'de>;

    fn str_from(s: &str) -> Self::Str;
    fn float_from(f: f64) -> Self::Float;
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
    fn float_to_f64(v: Self::Float) -> f64;
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes case-insensitive, whitespace-insensitive
/// comparisons based on [`normalize`]. Implementors provide a `&str` view of
/// their canonical name via [`NameMatch::name_str`], and get convenient
/// helpers:
/// - [`NameMatch::is_named`] — equality on normalized form
/// - [`NameMatch::name_contains`] — substring match on normalized form
/// - [`NameMatch::name_starts_with`] — prefix match on normalized form
///
/// # Examples
/// ```rust
/// use gazetteer_core::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Berlin").is_named("  BERLIN "));
/// assert!(Place("Londonderry").name_starts_with("Lond"));
/// assert!(Place("Londonderry").name_contains("donde"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive, whitespace-trimmed name equality.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        normalize(self.name_str()) == normalize(q)
    }

    /// Case-insensitive substring match on the normalized name.
    ///
    /// The empty query matches every name.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        normalize(self.name_str()).contains(&normalize(q))
    }

    /// Case-insensitive prefix match on the normalized name.
    ///
    /// The empty prefix matches every name.
    #[inline]
    fn name_starts_with(&self, q: &str) -> bool {
        normalize(self.name_str()).starts_with(&normalize(q))
    }
}

/// The Logic Trait.
/// Defines the query operations available on the store.
///
/// Every method is a pure read: results are newly allocated sequences of
/// borrowed records in store order, and no call mutates the store. All
/// string comparisons go through [`normalize`], so casing and surrounding
/// whitespace never affect a match. A `limit` of `0` yields an empty
/// result; limits apply after filtering and deduplication.
pub trait PlaceSearch<B: StoreBackend> {
    fn stats(&self) -> DbStats;

    /// Records whose state equals `state` (normalized), in store order.
    fn find_by_state(&self, state: &str) -> Vec<&PlaceRecord<B>>;

    /// Records whose city equals `city` (normalized, exact), in store order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gazetteer_core::{DefaultBackend, PlaceDb, PlaceRecord, PlaceSearch};
    ///
    /// let db = PlaceDb::from_records(vec![
    ///     PlaceRecord::<DefaultBackend>::new("Paris", "Ile-de-France", "France"),
    /// ]);
    /// let hits = db.find_by_city("  PARIS ");
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].state(), "Ile-de-France");
    /// ```
    fn find_by_city(&self, city: &str) -> Vec<&PlaceRecord<B>>;

    /// Records whose country equals `country` (normalized), in store order.
    fn find_by_country(&self, country: &str) -> Vec<&PlaceRecord<B>>;

    /// Conjunction of [`PlaceSearch::find_by_state`] and
    /// [`PlaceSearch::find_by_country`].
    fn find_by_state_and_country(&self, state: &str, country: &str) -> Vec<&PlaceRecord<B>>;

    /// Distinct state names among the records of `country`, in
    /// first-occurrence order.
    fn states_in_country(&self, country: &str) -> Vec<&str>;

    /// Records whose city contains `query` as a substring, truncated to
    /// `limit`, in store order. The empty query matches everything.
    fn find_cities_containing(&self, query: &str, limit: usize) -> Vec<&PlaceRecord<B>>;

    /// Records whose city starts with `prefix`, truncated to `limit`, in
    /// store order. The empty prefix matches everything.
    fn find_cities_starting_with(&self, prefix: &str, limit: usize) -> Vec<&PlaceRecord<B>>;

    /// Distinct state names containing `query` as a substring, in
    /// first-occurrence order, truncated to `limit`.
    fn find_states_containing(&self, query: &str, limit: usize) -> Vec<&str>;

    /// Distinct state names of `country` starting with `prefix`, in
    /// first-occurrence order, truncated to `limit`.
    fn find_states_starting_with(&self, prefix: &str, country: &str, limit: usize) -> Vec<&str>;

    /// Typo-tolerant city search: every record whose city is within
    /// `max_distance` edits of `query`, sorted ascending by distance with
    /// store order as the tie-break, truncated to `limit`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gazetteer_core::{DefaultBackend, PlaceDb, PlaceRecord, PlaceSearch};
    ///
    /// let db = PlaceDb::from_records(vec![
    ///     PlaceRecord::<DefaultBackend>::new("Berlin", "Berlin", "Germany"),
    ///     PlaceRecord::new("Bern", "Bern", "Switzerland"),
    /// ]);
    /// let hits = db.search_typo_tolerant("Berlim", 2, 5);
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].record.city(), "Berlin");
    /// assert_eq!(hits[0].distance, 1);
    /// ```
    fn search_typo_tolerant(
        &self,
        query: &str,
        max_distance: usize,
        limit: usize,
    ) -> Vec<ScoredRecord<'_, B>>;
}

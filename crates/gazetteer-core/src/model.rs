use crate::traits::{NameMatch, StoreBackend};
use serde::{Deserialize, Serialize};

/// Raw place structure as it comes from JSON.
///
/// Every field may be absent in the source; absent strings become empty
/// strings when the store is built, so queries never see missing values.
#[derive(Debug, Deserialize)]
pub struct PlaceRaw {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub population: Option<u32>,
    #[serde(default)]
    pub timezone: Option<String>,
}

pub type PlacesRaw = Vec<PlaceRaw>;

/// Default backend: plain `String` + `f64`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl StoreBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}

/// A single place entry: city, state and country names plus passthrough
/// metadata carried from the source dataset. The metadata is never
/// interpreted by any query.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceRecord<B: StoreBackend> {
    pub city: B::Str,
    pub state: B::Str,
    pub country: B::Str,
    pub latitude: Option<B::Float>,
    pub longitude: Option<B::Float>,
    pub population: Option<u32>,
    pub timezone: Option<B::Str>,
}

impl<B: StoreBackend> PlaceRecord<B> {
    /// Build a record with name fields only; metadata stays empty.
    pub fn new(city: &str, state: &str, country: &str) -> Self {
        Self {
            city: B::str_from(city),
            state: B::str_from(state),
            country: B::str_from(country),
            latitude: None,
            longitude: None,
            population: None,
            timezone: None,
        }
    }

    pub fn city(&self) -> &str {
        self.city.as_ref()
    }

    pub fn state(&self) -> &str {
        self.state.as_ref()
    }

    pub fn country(&self) -> &str {
        self.country.as_ref()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude.map(B::float_to_f64)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude.map(B::float_to_f64)
    }

    pub fn population(&self) -> Option<u32> {
        self.population
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_ref().map(|s| s.as_ref())
    }
}

impl<B: StoreBackend> NameMatch for PlaceRecord<B> {
    fn name_str(&self) -> &str {
        self.city()
    }
}

/// A place record annotated with its edit distance from a query.
///
/// Produced only by [`crate::PlaceSearch::search_typo_tolerant`]; transient
/// per query, never stored.
#[derive(Clone, Debug)]
pub struct ScoredRecord<'a, B: StoreBackend> {
    pub record: &'a PlaceRecord<B>,
    pub distance: usize,
}

/// Top-level store: an immutable, ordered sequence of place records.
///
/// Built once (from a raw dataset or directly from records), then only ever
/// read. Queries return borrowed records in store order; nothing reorders
/// or mutates the store after construction, so a `&PlaceDb` may be shared
/// freely across threads.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceDb<B: StoreBackend> {
    records: Vec<PlaceRecord<B>>,
}

impl<B: StoreBackend> PlaceDb<B> {
    /// Wrap an already-materialized record sequence. Order is preserved.
    pub fn from_records(records: Vec<PlaceRecord<B>>) -> Self {
        Self { records }
    }

    /// All records, in load order.
    pub fn records(&self) -> &[PlaceRecord<B>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_opt_f64(s: &Option<String>) -> Option<f64> {
    s.as_ref().and_then(|v| v.trim().parse::<f64>().ok())
}

/// Convert raw JSON data into a `PlaceDb` using the given backend.
///
/// Absent name fields become empty strings, coordinates are parsed from
/// their string form (unparseable values become `None`), and source order
/// is preserved.
pub fn build_db<B: StoreBackend>(raw: PlacesRaw) -> PlaceDb<B> {
    let records = raw
        .into_iter()
        .map(|r| PlaceRecord::<B> {
            city: B::str_from(r.city.as_deref().unwrap_or("")),
            state: B::str_from(r.state.as_deref().unwrap_or("")),
            country: B::str_from(r.country.as_deref().unwrap_or("")),
            latitude: parse_opt_f64(&r.latitude).map(B::float_from),
            longitude: parse_opt_f64(&r.longitude).map(B::float_from),
            population: r.population,
            timezone: r.timezone.as_deref().map(B::str_from),
        })
        .collect();

    PlaceDb { records }
}

/// Convenient alias for the default backend.
pub type DefaultPlaceDb = PlaceDb<DefaultBackend>;
/// Convenient alias used in the demos.
pub type StandardBackend = DefaultBackend;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_db_maps_absent_fields_to_empty() {
        let raw = vec![PlaceRaw {
            city: None,
            state: Some("Bavaria".into()),
            country: None,
            latitude: Some(" 48.14 ".into()),
            longitude: Some("n/a".into()),
            population: Some(1_512_000),
            timezone: None,
        }];

        let db = build_db::<DefaultBackend>(raw);
        let r = &db.records()[0];
        assert_eq!(r.city(), "");
        assert_eq!(r.state(), "Bavaria");
        assert_eq!(r.country(), "");
        assert_eq!(r.latitude(), Some(48.14));
        assert_eq!(r.longitude(), None);
        assert_eq!(r.population(), Some(1_512_000));
    }

    #[test]
    fn build_db_preserves_source_order() {
        let raw: PlacesRaw = ["B", "A", "C"]
            .into_iter()
            .map(|name| PlaceRaw {
                city: Some(name.into()),
                state: None,
                country: None,
                latitude: None,
                longitude: None,
                population: None,
                timezone: None,
            })
            .collect();

        let db = build_db::<DefaultBackend>(raw);
        let cities: Vec<&str> = db.records().iter().map(|r| r.city()).collect();
        assert_eq!(cities, ["B", "A", "C"]);
    }
}

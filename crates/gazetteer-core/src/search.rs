// crates/gazetteer-core/src/search.rs
use std::collections::HashSet;

use crate::common::DbStats;
use crate::distance::edit_distance;
use crate::model::{PlaceDb, PlaceRecord, ScoredRecord};
use crate::text::normalize;
use crate::traits::{NameMatch, PlaceSearch, StoreBackend};

/// Default truncation for substring and prefix queries.
pub const DEFAULT_LIMIT: usize = 10;
/// Default edit-distance threshold for typo-tolerant search.
pub const DEFAULT_MAX_DISTANCE: usize = 2;
/// Default truncation for typo-tolerant search.
pub const DEFAULT_FUZZY_LIMIT: usize = 5;

impl<B: StoreBackend> PlaceSearch<B> for PlaceDb<B> {
    fn stats(&self) -> DbStats {
        let mut states = HashSet::new();
        let mut countries = HashSet::new();
        for r in self.records() {
            states.insert(normalize(r.state()));
            countries.insert(normalize(r.country()));
        }
        DbStats {
            records: self.records().len(),
            states: states.len(),
            countries: countries.len(),
        }
    }

    fn find_by_state(&self, state: &str) -> Vec<&PlaceRecord<B>> {
        let q = normalize(state);
        self.records()
            .iter()
            .filter(|r| normalize(r.state()) == q)
            .collect()
    }

    fn find_by_city(&self, city: &str) -> Vec<&PlaceRecord<B>> {
        self.records().iter().filter(|r| r.is_named(city)).collect()
    }

    fn find_by_country(&self, country: &str) -> Vec<&PlaceRecord<B>> {
        let q = normalize(country);
        self.records()
            .iter()
            .filter(|r| normalize(r.country()) == q)
            .collect()
    }

    fn find_by_state_and_country(&self, state: &str, country: &str) -> Vec<&PlaceRecord<B>> {
        let qs = normalize(state);
        let qc = normalize(country);
        self.records()
            .iter()
            .filter(|r| normalize(r.state()) == qs && normalize(r.country()) == qc)
            .collect()
    }

    fn states_in_country(&self, country: &str) -> Vec<&str> {
        // Membership via normalized keys; output keeps first-occurrence order.
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for r in self.find_by_country(country) {
            if seen.insert(normalize(r.state())) {
                out.push(r.state());
            }
        }
        out
    }

    fn find_cities_containing(&self, query: &str, limit: usize) -> Vec<&PlaceRecord<B>> {
        let q = normalize(query);
        self.records()
            .iter()
            .filter(|r| normalize(r.city()).contains(&q))
            .take(limit)
            .collect()
    }

    fn find_cities_starting_with(&self, prefix: &str, limit: usize) -> Vec<&PlaceRecord<B>> {
        let q = normalize(prefix);
        self.records()
            .iter()
            .filter(|r| normalize(r.city()).starts_with(&q))
            .take(limit)
            .collect()
    }

    fn find_states_containing(&self, query: &str, limit: usize) -> Vec<&str> {
        if limit == 0 {
            return Vec::new();
        }
        let q = normalize(query);
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for r in self.records() {
            let key = normalize(r.state());
            if key.contains(&q) && seen.insert(key) {
                out.push(r.state());
                if out.len() == limit {
                    break;
                }
            }
        }
        out
    }

    fn find_states_starting_with(&self, prefix: &str, country: &str, limit: usize) -> Vec<&str> {
        if limit == 0 {
            return Vec::new();
        }
        let qp = normalize(prefix);
        let qc = normalize(country);
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for r in self.records() {
            if normalize(r.country()) != qc {
                continue;
            }
            let key = normalize(r.state());
            if key.starts_with(&qp) && seen.insert(key) {
                out.push(r.state());
                if out.len() == limit {
                    break;
                }
            }
        }
        out
    }

    fn search_typo_tolerant(
        &self,
        query: &str,
        max_distance: usize,
        limit: usize,
    ) -> Vec<ScoredRecord<'_, B>> {
        let q = normalize(query);
        let mut hits: Vec<ScoredRecord<'_, B>> = self
            .records()
            .iter()
            .map(|r| ScoredRecord {
                record: r,
                distance: edit_distance(&q, &normalize(r.city())),
            })
            .filter(|s| s.distance <= max_distance)
            .collect();

        // Stable sort: equal distances keep store order.
        hits.sort_by_key(|s| s.distance);
        hits.truncate(limit);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DefaultBackend;

    fn record(city: &str, state: &str, country: &str) -> PlaceRecord<DefaultBackend> {
        PlaceRecord::new(city, state, country)
    }

    fn sample_db() -> PlaceDb<DefaultBackend> {
        PlaceDb::from_records(vec![
            record("Berlin", "Berlin", "Germany"),
            record("Munich", "Bavaria", "Germany"),
            record("Nuremberg", "Bavaria", "Germany"),
            record("Bern", "Bern", "Switzerland"),
            record("London", "England", "United Kingdom"),
            record("Londonderry", "Northern Ireland", "United Kingdom"),
        ])
    }

    fn cities(records: &[&PlaceRecord<DefaultBackend>]) -> Vec<String> {
        records.iter().map(|r| r.city().to_string()).collect()
    }

    #[test]
    fn stats_counts_distinct_normalized_values() {
        let s = sample_db().stats();
        assert_eq!(s.records, 6);
        assert_eq!(s.states, 5);
        assert_eq!(s.countries, 3);
    }

    #[test]
    fn find_by_state_is_normalized_equality() {
        let db = sample_db();
        assert_eq!(cities(&db.find_by_state(" BAVARIA ")), ["Munich", "Nuremberg"]);
        assert!(db.find_by_state("bavari").is_empty());
    }

    #[test]
    fn find_by_city_exact_with_messy_input() {
        let db = sample_db();
        assert_eq!(cities(&db.find_by_city("  bErLiN ")), ["Berlin"]);
        // Prefix of a city name is not an exact match.
        assert!(db.find_by_city("Lond").is_empty());
    }

    #[test]
    fn find_by_state_and_country_is_a_conjunction() {
        let db = sample_db();
        assert_eq!(
            cities(&db.find_by_state_and_country("bern", "switzerland")),
            ["Bern"]
        );
        assert!(db.find_by_state_and_country("bern", "germany").is_empty());
    }

    #[test]
    fn states_in_country_dedups_in_first_occurrence_order() {
        let db = sample_db();
        assert_eq!(db.states_in_country("germany"), ["Berlin", "Bavaria"]);
        assert!(db.states_in_country("france").is_empty());
    }

    #[test]
    fn cities_containing_keeps_store_order_and_limit() {
        let db = sample_db();
        assert_eq!(
            cities(&db.find_cities_containing("on", 10)),
            ["London", "Londonderry"]
        );
        assert_eq!(cities(&db.find_cities_containing("on", 1)), ["London"]);
        assert!(db.find_cities_containing("on", 0).is_empty());
    }

    #[test]
    fn empty_substring_matches_everything() {
        let db = sample_db();
        assert_eq!(
            cities(&db.find_cities_containing("", 3)),
            ["Berlin", "Munich", "Nuremberg"]
        );
    }

    #[test]
    fn cities_starting_with_is_a_subset_of_containing() {
        let db = sample_db();
        let prefixed = cities(&db.find_cities_starting_with("lond", 10));
        let containing = cities(&db.find_cities_containing("lond", 100));
        assert_eq!(prefixed, ["London", "Londonderry"]);
        for c in &prefixed {
            assert!(containing.contains(c));
        }
    }

    #[test]
    fn states_containing_dedups_and_limits() {
        let db = sample_db();
        assert_eq!(db.find_states_containing("er", 10), ["Berlin", "Bern", "Northern Ireland"]);
        assert_eq!(db.find_states_containing("er", 2), ["Berlin", "Bern"]);
        assert!(db.find_states_containing("er", 0).is_empty());
    }

    #[test]
    fn states_starting_with_is_scoped_to_the_country() {
        let db = sample_db();
        assert_eq!(
            db.find_states_starting_with("b", "germany", 10),
            ["Berlin", "Bavaria"]
        );
        assert_eq!(db.find_states_starting_with("b", "switzerland", 10), ["Bern"]);
        assert!(db.find_states_starting_with("b", "france", 10).is_empty());
        // Empty prefix lists every state of the country.
        assert_eq!(
            db.find_states_starting_with("", "united kingdom", 10),
            ["England", "Northern Ireland"]
        );
    }

    #[test]
    fn typo_search_ranks_by_distance() {
        let db = sample_db();
        let hits = db.search_typo_tolerant("Berlim", 2, 5);
        let got: Vec<(&str, usize)> = hits.iter().map(|s| (s.record.city(), s.distance)).collect();
        // berlin is 1 edit away, bern is 3 and stays out.
        assert_eq!(got, [("Berlin", 1)]);

        // Ascending by distance: exact hit first, then the 2-edit neighbor.
        let hits = db.search_typo_tolerant("bern", 2, 5);
        let got: Vec<(&str, usize)> = hits.iter().map(|s| (s.record.city(), s.distance)).collect();
        assert_eq!(got, [("Bern", 0), ("Berlin", 2)]);
    }

    #[test]
    fn typo_search_tie_break_is_store_order() {
        let db = PlaceDb::from_records(vec![
            record("Bonn", "North Rhine-Westphalia", "Germany"),
            record("Bona", "Occitanie", "France"),
        ]);
        // Both are exactly one edit from "bon"; store order breaks the tie.
        let hits = db.search_typo_tolerant("Bon", 1, 5);
        let got: Vec<(&str, usize)> = hits.iter().map(|s| (s.record.city(), s.distance)).collect();
        assert_eq!(got, [("Bonn", 1), ("Bona", 1)]);

        // Reversing the store reverses the tie.
        let db = PlaceDb::from_records(vec![
            record("Bona", "Occitanie", "France"),
            record("Bonn", "North Rhine-Westphalia", "Germany"),
        ]);
        let got: Vec<&str> = db
            .search_typo_tolerant("Bon", 1, 5)
            .iter()
            .map(|s| s.record.city())
            .collect();
        assert_eq!(got, ["Bona", "Bonn"]);
    }

    #[test]
    fn typo_search_zero_limit_or_no_match_is_empty() {
        let db = sample_db();
        assert!(db.search_typo_tolerant("zzzzzz", 2, 5).is_empty());
        assert!(db.search_typo_tolerant("berlin", 2, 0).is_empty());
    }

    #[test]
    fn typo_search_distance_zero_means_equal_city() {
        let db = sample_db();
        let hits = db.search_typo_tolerant("  LONDON ", 0, 5);
        let got: Vec<(&str, usize)> = hits.iter().map(|s| (s.record.city(), s.distance)).collect();
        assert_eq!(got, [("London", 0)]);
    }

    #[test]
    fn every_query_is_empty_on_an_empty_store() {
        let db: PlaceDb<DefaultBackend> = PlaceDb::from_records(Vec::new());
        assert!(db.find_by_city("berlin").is_empty());
        assert!(db.find_cities_containing("", 10).is_empty());
        assert!(db.states_in_country("germany").is_empty());
        assert!(db.search_typo_tolerant("berlin", 2, 5).is_empty());
        assert_eq!(db.stats().records, 0);
    }
}

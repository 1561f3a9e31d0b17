// crates/gazetteer-core/src/loader.rs
use crate::error::{GazetteerError, Result};
use crate::model::{build_db, PlaceDb, PlacesRaw};
use crate::traits::StoreBackend;
#[cfg(feature = "compact")]
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

impl<B: StoreBackend> PlaceDb<B> {
    /// Load a store from a JSON array of place records.
    ///
    /// With the `compact` feature enabled, paths ending in `.gz` are
    /// transparently gunzipped before decoding. Record order in the file is
    /// the store order every query preserves.
    ///
    /// This is the whole I/O surface of the crate; once the store is built,
    /// queries never touch the filesystem again.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gazetteer_core::{DefaultBackend, PlaceDb};
    ///
    /// let db = PlaceDb::<DefaultBackend>::load_from_path("data/places.json")?;
    /// println!("{} records", db.len());
    /// # Ok::<(), gazetteer_core::GazetteerError>(())
    /// ```
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|_| {
            GazetteerError::NotFound(format!("dataset not found at path: {}", path.display()))
        })?;

        let raw = read_raw(path, file)?;
        Ok(build_db::<B>(raw))
    }
}

fn is_gz(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(feature = "compact")]
fn read_raw(path: &Path, file: File) -> Result<PlacesRaw> {
    if is_gz(path) {
        let reader = BufReader::new(GzDecoder::new(file));
        Ok(serde_json::from_reader(reader)?)
    } else {
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

#[cfg(not(feature = "compact"))]
fn read_raw(path: &Path, file: File) -> Result<PlacesRaw> {
    if is_gz(path) {
        return Err(GazetteerError::Unsupported(format!(
            "gzip support not compiled in (enable the `compact` feature): {}",
            path.display()
        )));
    }
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DefaultBackend;

    #[test]
    fn missing_file_is_a_not_found_error() {
        let err = PlaceDb::<DefaultBackend>::load_from_path("/no/such/places.json").unwrap_err();
        assert!(matches!(err, GazetteerError::NotFound(_)));
    }

    #[test]
    fn decodes_a_plain_json_array() {
        let dir = std::env::temp_dir();
        let path = dir.join("gazetteer-loader-test.json");
        std::fs::write(
            &path,
            r#"[
                {"city": "Paris", "state": "Ile-de-France", "country": "France", "latitude": "48.8566"},
                {"state": "Nowhere"}
            ]"#,
        )
        .unwrap();

        let db = PlaceDb::<DefaultBackend>::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(db.len(), 2);
        assert_eq!(db.records()[0].city(), "Paris");
        assert_eq!(db.records()[0].latitude(), Some(48.8566));
        // Absent fields come through as empty strings.
        assert_eq!(db.records()[1].city(), "");
        assert_eq!(db.records()[1].state(), "Nowhere");
    }
}

// crates/globalism-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, gzip) and hands plain JSON to the
//! raw → domain conversion in [`crate::model::convert`].

use crate::error::{GlobalismError, Result};
use crate::model::convert::from_raw;
use crate::model::CountryDb;
use crate::raw::DatasetRaw;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod common_io;

pub use common_io::{is_compressed, open_stream};

/// The dataset compiled into the crate.
const EMBEDDED_DATASET: &str = include_str!("../../data/globalism.json");

static EMBEDDED_DB: OnceCell<Arc<CountryDb>> = OnceCell::new();

impl CountryDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "globalism.json"
    }

    /// The embedded dataset, parsed once per process and shared.
    ///
    /// ```
    /// use globalism_core::{CountryDb, CountryLookup};
    ///
    /// let db = CountryDb::load()?;
    /// assert!(db.find_country_by_code("US").is_some());
    /// # Ok::<(), globalism_core::GlobalismError>(())
    /// ```
    pub fn load() -> Result<Arc<Self>> {
        EMBEDDED_DB
            .get_or_try_init(|| {
                log::debug!("Parsing embedded dataset ({} bytes)", EMBEDDED_DATASET.len());
                Self::from_json_str(EMBEDDED_DATASET).map(Arc::new)
            })
            .cloned()
    }

    /// Parses a dataset document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_str(json)?;
        Self::from_dataset(raw, None)
    }

    /// Parses a dataset from any reader of plain JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_reader(reader)?;
        Self::from_dataset(raw, None)
    }

    /// Loads a JSON or `.json.gz` dataset from disk.
    ///
    /// `filter` keeps only the listed alpha-2 codes (case-insensitive);
    /// languages and groups are kept whole.
    pub fn load_from_path(path: impl AsRef<Path>, filter: Option<&[&str]>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading dataset from {}", path.display());
        let reader = open_stream(path)?;
        let raw: DatasetRaw = serde_json::from_reader(reader)?;
        Self::from_dataset(raw, filter)
    }

    /// The embedded dataset restricted to `alpha2` codes. Always a fresh
    /// copy; the shared instance from [`CountryDb::load`] is untouched.
    pub fn load_filtered_by_alpha2(alpha2: &[&str]) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_str(EMBEDDED_DATASET)?;
        Self::from_dataset(raw, Some(alpha2))
    }

    fn from_dataset(mut raw: DatasetRaw, filter: Option<&[&str]>) -> Result<Self> {
        if let Some(codes) = filter {
            let before = raw.countries.len();
            raw.countries.retain(|c| {
                codes
                    .iter()
                    .any(|code| c.alpha2.trim().eq_ignore_ascii_case(code.trim()))
            });
            log::debug!("Filter kept {} of {} countries", raw.countries.len(), before);
        }
        let db = from_raw(raw);
        if db.countries.is_empty() {
            return Err(GlobalismError::InvalidData(
                "dataset contains no countries".to_owned(),
            ));
        }
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CountryLookup;

    #[test]
    fn embedded_dataset_is_shared() {
        let a = CountryDb::load().expect("embedded dataset parses");
        let b = CountryDb::load().expect("embedded dataset parses");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn filter_keeps_requested_countries() {
        let db = CountryDb::load_filtered_by_alpha2(&["us", " GB "]).expect("filtered load");
        assert_eq!(db.countries().len(), 2);
        assert!(db.find_country_by_code("DE").is_none());
        assert!(!db.languages().is_empty());
    }

    #[test]
    fn empty_result_is_invalid_data() {
        let err = CountryDb::load_filtered_by_alpha2(&["ZZ"]).err();
        assert!(matches!(err, Some(GlobalismError::InvalidData(_))));
    }

    #[test]
    fn blank_template_survives_loading() {
        use crate::address::AddressComponents;

        let db = CountryDb::from_json_str(
            r#"{ "countries": [ { "alpha2": "XX", "alpha3": "XXX", "name": "Test",
                                  "addressFormat": ["", "   "] } ] }"#,
        )
        .expect("valid dataset");
        let country = db.find_country_by_code("XX").expect("XX loaded");
        assert_eq!(country.format_address_lines(&AddressComponents::new()), Some(vec![]));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = CountryDb::from_json_str("{ not json").err();
        assert!(matches!(err, Some(GlobalismError::Json(_))));
    }

    #[test]
    fn reads_from_default_data_dir() {
        let path = CountryDb::default_data_dir().join(CountryDb::default_dataset_filename());
        let db = CountryDb::load_from_path(path, Some(&["JP"][..])).expect("dataset on disk");
        assert_eq!(db.countries()[0].alpha3(), "JPN");
    }

    #[cfg(feature = "compact")]
    #[test]
    fn reads_gzip_datasets() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let path = std::env::temp_dir().join(format!("globalism-{}.json.gz", std::process::id()));
        let file = std::fs::File::create(&path).expect("temp file");
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(EMBEDDED_DATASET.as_bytes())
            .expect("compress dataset");
        encoder.finish().expect("finish gzip stream");

        let db = CountryDb::load_from_path(&path, None);
        let _ = std::fs::remove_file(&path);
        let db = db.expect("gzip dataset loads");
        assert_eq!(db.stats(), CountryDb::load().expect("embedded").stats());
    }
}

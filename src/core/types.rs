use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Internal document id, assigned sequentially in ingestion order within
/// one index generation. All "ascending id" tie-breaks use this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub u64);

impl DocId {
    pub fn new(id: u64) -> Self {
        DocId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId(id)
    }
}

/// A fully typed film record. Optional numeric fields default rather than
/// fail: runtime 0, revenue 0, vote average 0.0, release date absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmRecord {
    pub id: String,
    pub title: String,
    pub overview: String,
    pub runtime: i32,
    pub tagline: String,
    pub revenue: i64,
    pub vote_average: f64,
    pub release_date: Option<NaiveDate>,
}

/// One raw row from a record source, all fields still strings. Parsing the
/// tabular container (CSV or otherwise) happens outside the engine.
#[derive(Debug, Clone, Default)]
pub struct RawFilmRow {
    pub id: String,
    pub title: String,
    pub overview: String,
    pub runtime: String,
    pub tagline: String,
    pub revenue: String,
    pub vote_average: String,
    pub release_date: String,
}

/// Stored per-document state inside a generation: the hydratable record
/// plus derived values used for scoring and date filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDoc {
    pub record: FilmRecord,
    /// Combined-text length in tokens, after analysis.
    pub token_count: u32,
    /// Release date as a `YYYYMMDD` key; `None` never matches a date clause.
    pub date_key: Option<String>,
}

impl StoredDoc {
    pub fn new(record: FilmRecord, token_count: u32) -> Self {
        let date_key = record
            .release_date
            .map(|d| d.format("%Y%m%d").to_string());
        StoredDoc {
            record,
            token_count,
            date_key,
        }
    }
}

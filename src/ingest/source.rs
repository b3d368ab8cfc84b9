use crate::core::error::Result;
use crate::core::types::RawFilmRow;

/// Produces the raw rows a rebuild ingests. Row production — CSV files,
/// databases, fixtures — lives outside the engine; the builder only sees
/// string-keyed rows.
pub trait RecordSource {
    fn fetch(&mut self) -> Result<Vec<RawFilmRow>>;
}

/// In-memory source for embedding and tests.
pub struct VecSource {
    rows: Vec<RawFilmRow>,
}

impl VecSource {
    pub fn new(rows: Vec<RawFilmRow>) -> Self {
        VecSource { rows }
    }
}

impl RecordSource for VecSource {
    fn fetch(&mut self) -> Result<Vec<RawFilmRow>> {
        Ok(self.rows.clone())
    }
}

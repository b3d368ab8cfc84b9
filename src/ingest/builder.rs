use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::analysis::analyzer::Analyzer;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::RawFilmRow;
use crate::index::generation::IndexGeneration;
use crate::index::store::IndexStore;
use crate::index::writer::GenerationWriter;
use crate::ingest::coerce;
use crate::storage::codec;
use crate::storage::layout::StorageLayout;

/// Counts reported by one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub indexed: usize,
    pub skipped: usize,
}

/// Builds whole index generations: stage every document, then one commit
/// (persist + install). There is no per-document flush and no incremental
/// update path; a build either replaces the current generation completely
/// or leaves it untouched.
pub struct IndexBuilder {
    analyzer: Arc<Analyzer>,
    storage: Arc<StorageLayout>,
    store: Arc<IndexStore>,
}

impl IndexBuilder {
    pub fn new(
        analyzer: Arc<Analyzer>,
        storage: Arc<StorageLayout>,
        store: Arc<IndexStore>,
    ) -> Self {
        IndexBuilder {
            analyzer,
            storage,
            store,
        }
    }

    /// Coerces and indexes every usable row. Rows without a usable id are
    /// skipped and counted, never fatal. The staged generation becomes
    /// visible only after the persist succeeds.
    pub fn populate_from_rows(&self, rows: Vec<RawFilmRow>) -> Result<BuildSummary> {
        let version = self.store.allocate_version();
        let mut writer = GenerationWriter::new(version, self.analyzer.clone());
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut skipped = 0usize;

        for row in rows {
            if let Err(err) = validate_row(&row, &mut seen_ids) {
                warn!(row_id = %row.id, %err, "skipping malformed record");
                skipped += 1;
                continue;
            }
            writer.add_document(coerce::film_record(&row));
        }

        let generation = writer.finish()?;
        let indexed = generation.doc_count;
        codec::persist(&self.storage, &generation)?;
        self.store.install(generation);

        info!(version, indexed, skipped, "index generation committed");
        Ok(BuildSummary { indexed, skipped })
    }

    /// Commits an empty generation. Idempotent: clearing an already-empty
    /// index is a no-op success.
    pub fn delete_all(&self) -> Result<()> {
        let version = self.store.allocate_version();
        let generation = IndexGeneration::empty(version);
        codec::persist(&self.storage, &generation)?;
        self.store.install(generation);

        info!(version, "index cleared");
        Ok(())
    }
}

fn validate_row(row: &RawFilmRow, seen_ids: &mut HashSet<String>) -> Result<()> {
    let id = row.id.trim();
    if id.is_empty() {
        return Err(Error::new(ErrorKind::MalformedRecord, "row has no id"));
    }
    if !seen_ids.insert(id.to_string()) {
        return Err(Error::new(
            ErrorKind::MalformedRecord,
            format!("duplicate id {}", id),
        ));
    }
    Ok(())
}

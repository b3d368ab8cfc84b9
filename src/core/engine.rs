use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::analysis::analyzer::Analyzer;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::index::generation::IndexGeneration;
use crate::index::store::IndexStore;
use crate::ingest::builder::{BuildSummary, IndexBuilder};
use crate::ingest::source::RecordSource;
use crate::query::correction::{NoCorrection, TermCorrector};
use crate::query::planner::QueryPlanner;
use crate::query::request::SearchRequest;
use crate::search::executor::QueryExecutor;
use crate::search::results::SearchResults;
use crate::search::suggest::SuggestionEngine;
use crate::storage::codec;
use crate::storage::layout::StorageLayout;

/// The caller-facing engine: one explicit object created at service start
/// and torn down at service stop. Searches and suggestions run lock-free
/// against generation snapshots; rebuilds serialize on a mutex so two
/// rebuilds can never race a commit.
pub struct SearchEngine {
    config: Config,
    storage: Arc<StorageLayout>,
    store: Arc<IndexStore>,
    builder: IndexBuilder,
    planner: QueryPlanner,
    executor: QueryExecutor,
    suggester: SuggestionEngine,
    corrector: Box<dyn TermCorrector>,
    rebuild_lock: Mutex<()>,
}

impl SearchEngine {
    /// Opens the index at the configured path, loading the committed
    /// current generation if one survives from a previous run.
    pub fn open(config: Config) -> Result<Self> {
        let storage = Arc::new(StorageLayout::new(config.index_path.clone())?);
        let initial = codec::load_current(&storage)?
            .unwrap_or_else(|| IndexGeneration::empty(0));
        let store = Arc::new(IndexStore::new(initial));

        let analyzer = Arc::new(Analyzer::film_text());
        let builder = IndexBuilder::new(analyzer.clone(), storage.clone(), store.clone());

        Ok(SearchEngine {
            planner: QueryPlanner::new(analyzer),
            executor: QueryExecutor::new(config.hits_limit),
            suggester: SuggestionEngine::new(config.suggestion_limit),
            corrector: Box::new(NoCorrection),
            rebuild_lock: Mutex::new(()),
            builder,
            storage,
            store,
            config,
        })
    }

    /// Swaps in a spelling-correction strategy for the query path.
    pub fn with_corrector(mut self, corrector: Box<dyn TermCorrector>) -> Self {
        self.corrector = corrector;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn doc_count(&self) -> usize {
        self.store.snapshot().doc_count
    }

    /// Ranked, paged search over one consistent generation snapshot.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResults> {
        debug!(
            text = %request.text,
            start_page = request.start_page,
            rows_per_page = request.rows_per_page,
            "search"
        );

        let mut corrected = request.clone();
        corrected.text = self.corrector.correct(&request.text);

        let plan = self.planner.plan(&corrected);
        let snapshot = self.store.snapshot();
        self.executor.execute(&plan, &corrected, &snapshot)
    }

    /// Up to `suggestion_limit` distinct titles completing `term`.
    pub fn suggest(&self, term: &str) -> Result<Vec<String>> {
        let snapshot = self.store.snapshot();
        Ok(self.suggester.suggest(term, &snapshot))
    }

    /// Delete-then-populate as one logical operation: the new generation
    /// replaces whatever was committed before, atomically. In-flight
    /// readers keep their snapshot.
    pub fn rebuild_index(&self, source: &mut dyn RecordSource) -> Result<BuildSummary> {
        let _guard = self.rebuild_lock.lock();
        let rows = source.fetch()?;
        self.builder.populate_from_rows(rows)
    }

    /// Clears the index to an empty committed generation.
    pub fn delete_index(&self) -> Result<()> {
        let _guard = self.rebuild_lock.lock();
        self.builder.delete_all()
    }

    pub fn storage(&self) -> &StorageLayout {
        &self.storage
    }
}

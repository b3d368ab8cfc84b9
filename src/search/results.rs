use crate::core::types::FilmRecord;

/// One page of ranked matches. Built fresh per query, never cached.
#[derive(Debug, Clone)]
pub struct SearchResults {
    /// Documents that satisfied every clause, clipped at the hit cap.
    pub total_hits: usize,
    pub films: Vec<ScoredFilm>,
}

/// Film hydrated from stored fields, with its relevance score.
#[derive(Debug, Clone)]
pub struct ScoredFilm {
    pub record: FilmRecord,
    pub score: f32,
}

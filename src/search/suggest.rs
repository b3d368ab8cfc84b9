use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::core::types::DocId;
use crate::index::generation::IndexGeneration;

/// Prefix autocomplete over film titles.
pub struct SuggestionEngine {
    limit: usize,
}

impl SuggestionEngine {
    pub fn new(limit: usize) -> Self {
        SuggestionEngine { limit }
    }

    /// Expands the lowercased term to every title token it prefixes,
    /// scores the matched documents with the same TF-IDF rule as search,
    /// takes the top `limit` raw matches and only then deduplicates by
    /// exact title. Fewer than `limit` distinct titles can come back even
    /// when more raw matches exist; callers rely on that shape.
    pub fn suggest(&self, term: &str, generation: &IndexGeneration) -> Vec<String> {
        let prefix = term.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }

        let mut scores: BTreeMap<DocId, f32> = BTreeMap::new();
        for matched_term in generation.prefix.search_prefix(&prefix) {
            let Some(doc_ids) = generation.title_terms.get(&matched_term) else {
                continue;
            };
            for &doc_id in doc_ids {
                *scores.entry(doc_id).or_insert(0.0) +=
                    generation.term_score(&matched_term, doc_id);
            }
        }

        let mut ranked: Vec<(DocId, f32)> = scores.into_iter().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(self.limit);

        let mut titles = Vec::new();
        for (doc_id, _) in ranked {
            let Some(stored) = generation.doc(doc_id) else {
                continue;
            };
            if !titles.contains(&stored.record.title) {
                titles.push(stored.record.title.clone());
            }
        }
        titles
    }
}

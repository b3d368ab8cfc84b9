use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{DocId, StoredDoc};
use crate::index::posting::PostingList;
use crate::search::prefix::PrefixIndex;

/// One immutable index generation: postings and stored fields for every
/// document committed in a single build. A rebuild produces a whole new
/// generation; nothing here is ever mutated after commit.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct IndexGeneration {
    pub version: u64,
    /// Term -> posting list over the combined title/tagline/overview text.
    pub postings: HashMap<String, PostingList>,
    /// Stored documents, ordered by ascending doc id.
    pub docs: BTreeMap<DocId, StoredDoc>,
    /// Title term -> doc ids, feeding the autocomplete prefix index.
    pub title_terms: BTreeMap<String, Vec<DocId>>,
    pub doc_count: usize,
    pub total_tokens: u64,
    /// Derived fst over `title_terms`; rebuilt after load, never persisted.
    #[serde(skip)]
    pub prefix: PrefixIndex,
}

impl IndexGeneration {
    pub fn empty(version: u64) -> Self {
        IndexGeneration {
            version,
            ..IndexGeneration::default()
        }
    }

    pub fn posting(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    pub fn doc(&self, doc_id: DocId) -> Option<&StoredDoc> {
        self.docs.get(&doc_id)
    }

    /// Inverse document frequency: `1 + ln(N / (df + 1))`. Strictly
    /// positive for any non-empty collection, so a term occurring in every
    /// document still separates long documents from short ones.
    pub fn idf(&self, term: &str) -> f32 {
        if self.doc_count == 0 {
            return 0.0;
        }
        let doc_freq = self
            .posting(term)
            .map(|list| list.doc_freq())
            .unwrap_or(0);
        1.0 + (self.doc_count as f32 / (doc_freq as f32 + 1.0)).ln()
    }

    /// TF-IDF contribution of one term to one document's score.
    pub fn term_score(&self, term: &str, doc_id: DocId) -> f32 {
        let Some(posting) = self.posting(term).and_then(|list| list.get(doc_id)) else {
            return 0.0;
        };
        let Some(stored) = self.doc(doc_id) else {
            return 0.0;
        };
        if stored.token_count == 0 {
            return 0.0;
        }
        let tf = posting.term_freq as f32 / stored.token_count as f32;
        tf * self.idf(term)
    }

    /// Rebuilds the prefix fst from `title_terms`. Called after a build
    /// finishes and after a generation is loaded from storage.
    pub fn rebuild_prefix(&mut self) -> Result<()> {
        let mut prefix = PrefixIndex::default();
        prefix.build(
            self.title_terms
                .iter()
                .map(|(term, docs)| (term.clone(), docs.len() as u32)),
        )?;
        self.prefix = prefix;
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::core::types::DocId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    /// Term frequency in the document's combined text.
    pub term_freq: u32,
    /// Token positions, pre-filter numbering, for phrase adjacency.
    pub positions: Vec<u32>,
}

/// Posting list for a term, sorted by doc id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostingList {
    pub postings: Vec<Posting>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList {
            postings: Vec::new(),
        }
    }

    pub fn add_posting(&mut self, posting: Posting) {
        match self
            .postings
            .binary_search_by_key(&posting.doc_id.0, |p| p.doc_id.0)
        {
            Ok(pos) => self.postings[pos] = posting,
            Err(pos) => self.postings.insert(pos, posting),
        }
    }

    pub fn get(&self, doc_id: DocId) -> Option<&Posting> {
        self.postings
            .binary_search_by_key(&doc_id.0, |p| p.doc_id.0)
            .ok()
            .map(|pos| &self.postings[pos])
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Number of documents containing the term.
    pub fn doc_freq(&self) -> u32 {
        self.postings.len() as u32
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::core::error::Result;
use crate::core::types::{DocId, FilmRecord, StoredDoc};
use crate::index::generation::IndexGeneration;
use crate::index::posting::Posting;

/// Staging area for the next index generation. Documents added here are
/// invisible until the finished generation is persisted and installed.
pub struct GenerationWriter {
    analyzer: Arc<Analyzer>,
    generation: IndexGeneration,
    next_doc: u64,
}

impl GenerationWriter {
    pub fn new(version: u64, analyzer: Arc<Analyzer>) -> Self {
        GenerationWriter {
            analyzer,
            generation: IndexGeneration::empty(version),
            next_doc: 0,
        }
    }

    /// Indexes one film: analyzes the combined text into positional
    /// postings, records title terms for autocomplete, stores the record.
    pub fn add_document(&mut self, record: FilmRecord) -> DocId {
        let doc_id = DocId(self.next_doc);
        self.next_doc += 1;

        let combined = format!(
            "{} {} {}",
            record.title, record.tagline, record.overview
        );
        let tokens = self.analyzer.analyze(&combined);

        let mut term_positions: HashMap<String, Vec<u32>> = HashMap::new();
        for token in &tokens {
            term_positions
                .entry(token.text.clone())
                .or_default()
                .push(token.position);
        }

        for (term, positions) in term_positions {
            let posting = Posting {
                doc_id,
                term_freq: positions.len() as u32,
                positions,
            };
            self.generation
                .postings
                .entry(term)
                .or_default()
                .add_posting(posting);
        }

        for token in self.analyzer.analyze(&record.title) {
            let docs = self
                .generation
                .title_terms
                .entry(token.text)
                .or_default();
            if docs.last() != Some(&doc_id) {
                docs.push(doc_id);
            }
        }

        self.generation.doc_count += 1;
        self.generation.total_tokens += tokens.len() as u64;
        self.generation
            .docs
            .insert(doc_id, StoredDoc::new(record, tokens.len() as u32));

        doc_id
    }

    pub fn doc_count(&self) -> usize {
        self.generation.doc_count
    }

    /// Freezes the staged generation: builds the title prefix fst and
    /// hands the immutable result back for persist + install.
    pub fn finish(mut self) -> Result<IndexGeneration> {
        self.generation.rebuild_prefix()?;
        Ok(self.generation)
    }
}

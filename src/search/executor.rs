use std::cmp::Ordering;

use crate::core::error::Result;
use crate::core::types::{DocId, StoredDoc};
use crate::index::generation::IndexGeneration;
use crate::index::posting::Posting;
use crate::query::planner::{PhraseClause, QueryPlan, RangeClause};
use crate::query::request::SearchRequest;
use crate::search::results::{ScoredFilm, SearchResults};

/// Score given to every match of a plan with no phrase clause; ordering
/// among such matches falls through to the ascending-id tie-break.
const BASELINE_SCORE: f32 = 1.0;

/// Evaluates a query plan against one fixed generation snapshot.
pub struct QueryExecutor {
    hits_limit: usize,
}

impl QueryExecutor {
    pub fn new(hits_limit: usize) -> Self {
        QueryExecutor { hits_limit }
    }

    /// A document matches iff it satisfies every clause of the
    /// conjunction. Candidates are scanned in ascending doc-id order and
    /// collection stops at the hit cap; matches beyond it are neither
    /// ranked nor counted. Matches are then sorted by descending score,
    /// ties by ascending doc id, and the requested page is hydrated.
    pub fn execute(
        &self,
        plan: &QueryPlan,
        request: &SearchRequest,
        generation: &IndexGeneration,
    ) -> Result<SearchResults> {
        request.validate_pagination()?;

        let mut matched: Vec<(DocId, f32)> = Vec::new();

        match &plan.phrase {
            Some(phrase) => {
                let first = phrase
                    .terms
                    .first()
                    .and_then(|term| generation.posting(term));
                if let Some(first) = first {
                    for posting in &first.postings {
                        if matched.len() >= self.hits_limit {
                            break;
                        }
                        if !phrase_matches(generation, phrase, posting) {
                            continue;
                        }
                        let Some(stored) = generation.doc(posting.doc_id) else {
                            continue;
                        };
                        if !matches_ranges(stored, &plan.ranges) {
                            continue;
                        }
                        let score: f32 = phrase
                            .terms
                            .iter()
                            .map(|term| generation.term_score(term, posting.doc_id))
                            .sum();
                        matched.push((posting.doc_id, score));
                    }
                }
            }
            None => {
                for (&doc_id, stored) in &generation.docs {
                    if matched.len() >= self.hits_limit {
                        break;
                    }
                    if matches_ranges(stored, &plan.ranges) {
                        matched.push((doc_id, BASELINE_SCORE));
                    }
                }
            }
        }

        matched.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let total_hits = matched.len();
        let start_index =
            (request.start_page as usize).saturating_mul(request.rows_per_page as usize);
        let films = matched
            .into_iter()
            .skip(start_index)
            .take(request.rows_per_page as usize)
            .filter_map(|(doc_id, score)| {
                generation.doc(doc_id).map(|stored| ScoredFilm {
                    record: stored.record.clone(),
                    score,
                })
            })
            .collect();

        Ok(SearchResults { total_hits, films })
    }
}

/// Contiguous-sequence check: some occurrence of the first term at
/// position `p` must be followed by the remaining terms at `p+1`, `p+2`,
/// ... in the document's combined text.
fn phrase_matches(
    generation: &IndexGeneration,
    phrase: &PhraseClause,
    first: &Posting,
) -> bool {
    let mut rest: Vec<&Posting> = Vec::with_capacity(phrase.terms.len().saturating_sub(1));
    for term in &phrase.terms[1..] {
        match generation
            .posting(term)
            .and_then(|list| list.get(first.doc_id))
        {
            Some(posting) => rest.push(posting),
            None => return false,
        }
    }

    first.positions.iter().any(|&start| {
        rest.iter().enumerate().all(|(i, posting)| {
            posting
                .positions
                .binary_search(&(start + i as u32 + 1))
                .is_ok()
        })
    })
}

/// Every range clause is inclusive on both ends. A document without a
/// release date never matches a date clause.
fn matches_ranges(stored: &StoredDoc, ranges: &[RangeClause]) -> bool {
    for clause in ranges {
        match clause {
            RangeClause::Runtime { min, max } => {
                let runtime = stored.record.runtime;
                if min.is_some_and(|m| runtime < m) || max.is_some_and(|m| runtime > m) {
                    return false;
                }
            }
            RangeClause::VoteAverage { min } => {
                let vote = stored.record.vote_average;
                if vote < *min || vote > 10.0 {
                    return false;
                }
            }
            RangeClause::ReleaseDate { start, end } => match &stored.date_key {
                Some(key) if key.as_str() >= start.as_str() && key.as_str() <= end.as_str() => {}
                _ => return false,
            },
        }
    }
    true
}

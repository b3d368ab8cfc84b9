use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::query::request::SearchRequest;

/// Upper date key when only a range start is given.
pub const MAX_DATE_KEY: &str = "99991231";

/// Contiguous token sequence required over the combined text.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseClause {
    pub terms: Vec<String>,
}

/// Inclusive range filters over stored per-document fields.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeClause {
    Runtime {
        min: Option<i32>,
        max: Option<i32>,
    },
    /// Lower bound only; votes never exceed 10.0.
    VoteAverage { min: f64 },
    /// Lexicographic bounds over `YYYYMMDD` date keys.
    ReleaseDate { start: String, end: String },
}

/// Conjunction of at most one phrase clause and any number of range
/// clauses. An empty plan matches every document.
#[derive(Debug, Clone, Default)]
pub struct QueryPlan {
    pub phrase: Option<PhraseClause>,
    pub ranges: Vec<RangeClause>,
}

impl QueryPlan {
    pub fn is_match_all(&self) -> bool {
        self.phrase.is_none() && self.ranges.is_empty()
    }
}

/// Turns a structured request into an executable plan. Construction never
/// fails: blank or all-stop-word text just drops the phrase clause, absent
/// filters are omitted.
pub struct QueryPlanner {
    analyzer: Arc<Analyzer>,
}

impl QueryPlanner {
    pub fn new(analyzer: Arc<Analyzer>) -> Self {
        QueryPlanner { analyzer }
    }

    pub fn plan(&self, request: &SearchRequest) -> QueryPlan {
        let mut plan = QueryPlan::default();

        let terms: Vec<String> = self
            .analyzer
            .analyze(&request.text)
            .into_iter()
            .map(|token| token.text)
            .collect();
        if !terms.is_empty() {
            plan.phrase = Some(PhraseClause { terms });
        }

        if request.duration_min.is_some() || request.duration_max.is_some() {
            plan.ranges.push(RangeClause::Runtime {
                min: request.duration_min,
                max: request.duration_max,
            });
        }

        if let Some(min) = request.vote_average_min {
            plan.ranges.push(RangeClause::VoteAverage { min });
        }

        if let Some(start) = request.release_date_start {
            let end = request
                .release_date_end
                .map(|d| d.format("%Y%m%d").to_string())
                .unwrap_or_else(|| MAX_DATE_KEY.to_string());
            plan.ranges.push(RangeClause::ReleaseDate {
                start: start.format("%Y%m%d").to_string(),
                end,
            });
        }

        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn planner() -> QueryPlanner {
        QueryPlanner::new(Arc::new(Analyzer::film_text()))
    }

    #[test]
    fn blank_text_without_filters_is_match_all() {
        let plan = planner().plan(&SearchRequest::new("   ", 0, 10));
        assert!(plan.is_match_all());
    }

    #[test]
    fn all_stop_word_text_drops_the_phrase_clause() {
        let mut request = SearchRequest::new("the of and", 0, 10);
        request.duration_min = Some(90);
        let plan = planner().plan(&request);
        assert!(plan.phrase.is_none());
        assert_eq!(plan.ranges.len(), 1);
    }

    #[test]
    fn phrase_terms_are_lowercased_and_filtered() {
        let plan = planner().plan(&SearchRequest::new("The Great Escape", 0, 10));
        assert_eq!(
            plan.phrase.unwrap().terms,
            vec!["great".to_string(), "escape".to_string()]
        );
    }

    #[test]
    fn open_ended_date_range_uses_max_key() {
        let mut request = SearchRequest::new("", 0, 10);
        request.release_date_start = NaiveDate::from_ymd_opt(1963, 7, 4);
        let plan = planner().plan(&request);
        assert_eq!(
            plan.ranges,
            vec![RangeClause::ReleaseDate {
                start: "19630704".to_string(),
                end: MAX_DATE_KEY.to_string(),
            }]
        );
    }

    #[test]
    fn duration_bounds_may_be_one_sided() {
        let mut request = SearchRequest::new("", 0, 10);
        request.duration_max = Some(120);
        let plan = planner().plan(&request);
        assert_eq!(
            plan.ranges,
            vec![RangeClause::Runtime {
                min: None,
                max: Some(120),
            }]
        );
    }
}

//! # filmdex
//!
//! An embedded full-text search engine over a film catalog.
//!
//! - Inverted index with positional postings over the combined
//!   title/tagline/overview text
//! - Phrase search combined with inclusive runtime, vote-average and
//!   release-date range filters
//! - TF-IDF ranking with deterministic tie-breaks and paged results
//! - Prefix autocomplete over film titles
//! - Wholesale rebuild: every build commits a new immutable index
//!   generation and swaps it in atomically

pub mod analysis;
pub mod core;
pub mod index;
pub mod ingest;
pub mod query;
pub mod search;
pub mod storage;

pub use crate::core::config::Config;
pub use crate::core::engine::SearchEngine;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{FilmRecord, RawFilmRow};
pub use crate::ingest::builder::BuildSummary;
pub use crate::ingest::source::{RecordSource, VecSource};
pub use crate::query::request::SearchRequest;
pub use crate::search::results::{ScoredFilm, SearchResults};

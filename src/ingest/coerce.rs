use chrono::NaiveDate;

use crate::core::types::{FilmRecord, RawFilmRow};

/// Outcome of a parse-or-default coercion. Falling back is normal data
/// hygiene, not an error; the tag exists so callers can tell the two
/// apart without runtime type inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced<T> {
    Parsed(T),
    Fallback(T),
}

impl<T> Coerced<T> {
    pub fn value(self) -> T {
        match self {
            Coerced::Parsed(value) | Coerced::Fallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Coerced::Fallback(_))
    }
}

pub fn runtime(raw: &str) -> Coerced<i32> {
    match raw.trim().parse() {
        Ok(value) => Coerced::Parsed(value),
        Err(_) => Coerced::Fallback(0),
    }
}

pub fn revenue(raw: &str) -> Coerced<i64> {
    match raw.trim().parse() {
        Ok(value) => Coerced::Parsed(value),
        Err(_) => Coerced::Fallback(0),
    }
}

pub fn vote_average(raw: &str) -> Coerced<f64> {
    match raw.trim().parse() {
        Ok(value) => Coerced::Parsed(value),
        Err(_) => Coerced::Fallback(0.0),
    }
}

/// Dates come in as `YYYY-MM-DD`; anything else becomes "absent".
pub fn release_date(raw: &str) -> Coerced<Option<NaiveDate>> {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => Coerced::Parsed(Some(date)),
        Err(_) => Coerced::Fallback(None),
    }
}

/// Applies every field coercion to one raw row. Never fails; id validity
/// is the builder's concern.
pub fn film_record(row: &RawFilmRow) -> FilmRecord {
    FilmRecord {
        id: row.id.trim().to_string(),
        title: row.title.clone(),
        overview: row.overview.clone(),
        runtime: runtime(&row.runtime).value(),
        tagline: row.tagline.clone(),
        revenue: revenue(&row.revenue).value(),
        vote_average: vote_average(&row.vote_average).value(),
        release_date: release_date(&row.release_date).value(),
    }
}

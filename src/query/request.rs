use chrono::NaiveDate;

use crate::core::error::{Error, ErrorKind, Result};

/// One structured search call: free text plus optional filters and the
/// mandatory page coordinates. Absent filters are simply not applied;
/// they never make a request invalid.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub text: String,
    /// Zero-based page number.
    pub start_page: i64,
    pub rows_per_page: i64,
    /// Inclusive runtime bounds in minutes.
    pub duration_min: Option<i32>,
    pub duration_max: Option<i32>,
    /// Inclusive lower bound; the upper bound is always 10.0.
    pub vote_average_min: Option<f64>,
    /// Inclusive release-date range; an absent end means unbounded.
    pub release_date_start: Option<NaiveDate>,
    pub release_date_end: Option<NaiveDate>,
}

impl SearchRequest {
    pub fn new(text: impl Into<String>, start_page: i64, rows_per_page: i64) -> Self {
        SearchRequest {
            text: text.into(),
            start_page,
            rows_per_page,
            ..SearchRequest::default()
        }
    }

    /// Caller errors are rejected before any query work happens.
    pub fn validate_pagination(&self) -> Result<()> {
        if self.rows_per_page <= 0 {
            return Err(Error::new(
                ErrorKind::InvalidPagination,
                format!("rows_per_page must be positive, got {}", self.rows_per_page),
            ));
        }
        if self.start_page < 0 {
            return Err(Error::new(
                ErrorKind::InvalidPagination,
                format!("start_page must not be negative, got {}", self.start_page),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_page_size() {
        let request = SearchRequest::new("great", 0, 0);
        let err = request.validate_pagination().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidPagination);
    }

    #[test]
    fn rejects_negative_start_page() {
        let request = SearchRequest::new("great", -1, 10);
        assert!(request.validate_pagination().is_err());
    }

    #[test]
    fn accepts_first_page() {
        assert!(SearchRequest::new("", 0, 10).validate_pagination().is_ok());
    }
}

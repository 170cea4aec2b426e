// src/query.rs

//! Query builder.
//!
//! Converts user filter selections into the request parameters the
//! search endpoint accepts. Pure, never fails.

use serde::Serialize;

use crate::models::SearchFilters;

/// Parameters for one call to the search endpoint.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text query term, sent even when empty (the endpoint requires
    /// the parameter to be present)
    pub q: String,

    /// Department id, combined conjunctively with the query term
    pub department_id: Option<u32>,

    /// Restrict to collection highlights
    pub is_highlight: bool,
}

impl SearchQuery {
    /// The fixed, curated query backing the never-empty-results fallback.
    pub fn highlights() -> Self {
        Self {
            q: String::new(),
            department_id: None,
            is_highlight: true,
        }
    }

    /// True when nothing constrains the search at all. Such a query must
    /// never be sent: it would list the entire collection.
    pub fn is_unconstrained(&self) -> bool {
        self.q.is_empty() && self.department_id.is_none() && !self.is_highlight
    }
}

/// Build request parameters from user filters.
///
/// The year range deliberately does not map to a request parameter: the
/// remote date fields are free text and its own range filtering is
/// unreliable, so years are applied locally as a post-filter on fetched
/// records.
pub fn build(filters: &SearchFilters) -> SearchQuery {
    SearchQuery {
        q: filters
            .keyword
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        department_id: filters.department_id,
        is_highlight: filters.highlights_only,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_combines_keyword_and_department() {
        let filters = SearchFilters {
            keyword: Some("cat".to_string()),
            department_id: Some(10),
            ..SearchFilters::default()
        };
        let query = build(&filters);
        assert_eq!(query.q, "cat");
        assert_eq!(query.department_id, Some(10));
        assert!(!query.is_highlight);
        assert!(!query.is_unconstrained());
    }

    #[test]
    fn test_build_trims_keyword() {
        let filters = SearchFilters::keyword_only("  armor  ");
        assert_eq!(build(&filters).q, "armor");
    }

    #[test]
    fn test_empty_filters_are_unconstrained() {
        assert!(build(&SearchFilters::default()).is_unconstrained());
    }

    #[test]
    fn test_year_range_alone_does_not_constrain_the_request() {
        // Years are a local post-filter, never a request parameter.
        let filters = SearchFilters {
            year_from: Some(1880),
            year_to: Some(1890),
            ..SearchFilters::default()
        };
        assert!(build(&filters).is_unconstrained());
    }

    #[test]
    fn test_highlight_only_query_is_constrained() {
        let filters = SearchFilters {
            highlights_only: true,
            ..SearchFilters::default()
        };
        let query = build(&filters);
        assert!(query.is_highlight);
        assert!(!query.is_unconstrained());
    }

    #[test]
    fn test_highlights_query_shape() {
        let query = SearchQuery::highlights();
        assert!(query.q.is_empty());
        assert!(query.is_highlight);
        assert!(query.department_id.is_none());
    }
}

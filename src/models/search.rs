//! Search filter and result structures.

use serde::{Deserialize, Serialize};

use super::ObjectId;

/// User-supplied search filters, constructed fresh per interaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFilters {
    /// Free-text query term
    pub keyword: Option<String>,

    /// Numeric department id to scope the search to
    pub department_id: Option<u32>,

    /// Inclusive lower bound on the artwork's date
    pub year_from: Option<i32>,

    /// Inclusive upper bound on the artwork's date
    pub year_to: Option<i32>,

    /// Restrict to objects the museum flags as highlights
    pub highlights_only: bool,
}

impl SearchFilters {
    /// Filters for a keyword-only search ("more by artist", tag clicks).
    pub fn keyword_only(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }

    /// Whether either year bound is set.
    pub fn has_year_range(&self) -> bool {
        self.year_from.is_some() || self.year_to.is_some()
    }

    /// An inverted range (from > to) matches nothing, it is not an error.
    pub fn year_range_inverted(&self) -> bool {
        matches!((self.year_from, self.year_to), (Some(from), Some(to)) if from > to)
    }
}

/// Outcome of one resolve cycle. Replaced wholesale by the next search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Ordered object ids that passed all local filtering so far
    pub candidate_ids: Vec<ObjectId>,

    /// True when the curated highlights set was substituted for the query
    pub used_fallback: bool,

    /// The filters this result was resolved from
    pub applied_filters: SearchFilters,

    /// Length of the locally known candidate list (not the remote total,
    /// since year filtering happens on this side)
    pub total_count: usize,

    /// Remote candidates not yet date-checked under a year filter.
    /// Paging into them triggers further probe batches.
    pub unscanned_ids: Vec<ObjectId>,
}

impl SearchResult {
    /// A result carrying the given candidates with no fallback involved.
    pub fn from_candidates(candidate_ids: Vec<ObjectId>, applied_filters: SearchFilters) -> Self {
        Self {
            total_count: candidate_ids.len(),
            candidate_ids,
            used_fallback: false,
            applied_filters,
            unscanned_ids: Vec::new(),
        }
    }

    /// A fallback result drawn from the highlights set.
    pub fn from_fallback(candidate_ids: Vec<ObjectId>, applied_filters: SearchFilters) -> Self {
        Self {
            total_count: candidate_ids.len(),
            candidate_ids,
            used_fallback: true,
            applied_filters,
            unscanned_ids: Vec::new(),
        }
    }

    /// Whether no usable candidates remain.
    pub fn is_empty(&self) -> bool {
        self.candidate_ids.is_empty()
    }
}

/// The (page index, page size) pair selecting a slice of the candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Zero-based page index
    pub page_index: usize,

    /// Items per page, must be > 0
    pub page_size: usize,
}

impl PageWindow {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            // A zero page size would make every window empty
            page_size: page_size.max(1),
        }
    }

    /// Index one past the last candidate this window can show.
    /// Saturates for extreme page indices instead of overflowing.
    pub fn upper_bound(&self) -> usize {
        self.page_index
            .saturating_add(1)
            .saturating_mul(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range_inverted() {
        let filters = SearchFilters {
            year_from: Some(1900),
            year_to: Some(1880),
            ..SearchFilters::default()
        };
        assert!(filters.year_range_inverted());
        assert!(filters.has_year_range());
    }

    #[test]
    fn test_half_open_range_not_inverted() {
        let filters = SearchFilters {
            year_from: Some(1900),
            ..SearchFilters::default()
        };
        assert!(!filters.year_range_inverted());
        assert!(filters.has_year_range());
    }

    #[test]
    fn test_upper_bound_saturates_on_huge_index() {
        let page = PageWindow::new(usize::MAX, 10);
        assert_eq!(page.upper_bound(), usize::MAX);
    }

    #[test]
    fn test_page_window_clamps_zero_size() {
        let page = PageWindow::new(3, 0);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.upper_bound(), 4);
    }
}

// src/pager.rs

//! Pagination cursor.
//!
//! Derives the visible slice and Next/Previous availability from a total
//! count and a page window. Pure, no I/O; navigating pages re-slices an
//! already-resolved result rather than triggering a new search.

use crate::models::PageWindow;

/// The visible slice for one page, with navigation availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    /// First candidate index shown (clamped to the total)
    pub start: usize,

    /// One past the last candidate index shown
    pub end: usize,

    /// Whether a further page exists
    pub has_next: bool,

    /// Whether a previous page exists
    pub has_previous: bool,
}

impl PageView {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Compute the visible window over `total_count` candidates.
///
/// Saturating arithmetic: an extreme page index clamps to an empty
/// window at the end instead of overflowing.
pub fn window(total_count: usize, page: &PageWindow) -> PageView {
    let start = page
        .page_index
        .saturating_mul(page.page_size)
        .min(total_count);
    let end = start.saturating_add(page.page_size).min(total_count);

    PageView {
        start,
        end,
        has_next: page.upper_bound() < total_count,
        has_previous: page.page_index > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_of_25() {
        let view = window(25, &PageWindow::new(0, 10));
        assert_eq!((view.start, view.end), (0, 10));
        assert!(!view.has_previous);
        assert!(view.has_next);
    }

    #[test]
    fn test_middle_page_of_25() {
        let view = window(25, &PageWindow::new(1, 10));
        assert_eq!((view.start, view.end), (10, 20));
        assert!(view.has_previous);
        assert!(view.has_next);
    }

    #[test]
    fn test_last_page_of_25_is_short() {
        let view = window(25, &PageWindow::new(2, 10));
        assert_eq!((view.start, view.end), (20, 25));
        assert_eq!(view.len(), 5);
        assert!(view.has_previous);
        assert!(!view.has_next);
    }

    #[test]
    fn test_exact_multiple_has_no_extra_page() {
        let view = window(20, &PageWindow::new(1, 10));
        assert!(!view.has_next);
        assert_eq!(view.len(), 10);
    }

    #[test]
    fn test_window_past_the_end_is_empty() {
        let view = window(5, &PageWindow::new(7, 10));
        assert_eq!((view.start, view.end), (5, 5));
        assert!(view.is_empty());
        assert!(!view.has_next);
        assert!(view.has_previous);
    }

    #[test]
    fn test_huge_page_index_saturates_to_empty_window() {
        let view = window(25, &PageWindow::new(usize::MAX, 10));
        assert_eq!((view.start, view.end), (25, 25));
        assert!(view.is_empty());
        assert!(!view.has_next);
        assert!(view.has_previous);
    }

    #[test]
    fn test_empty_total() {
        let view = window(0, &PageWindow::new(0, 10));
        assert!(view.is_empty());
        assert!(!view.has_next);
        assert!(!view.has_previous);
    }
}

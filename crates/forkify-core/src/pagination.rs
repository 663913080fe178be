//! # Pagination
//!
//! Page windows over the cached result set of the current query.
//!
//! The full result list is fetched once per query; every page is a slice
//! computed on demand:
//!
//! ```text
//! results:  [ r0 r1 r2 | r3 r4 ]        results_per_page = 3
//!             ─ page 1 ─  page 2
//!
//! page(n) = results[(n-1)*k .. n*k]     clipped to results.len()
//! ```
//!
//! Pages past the end yield an empty slice. Nothing wraps around and no
//! page number is rejected; the pagination view only offers in-range pages.

use std::ops::Range;

use crate::types::{SearchResultItem, SearchState};

/// Returns the index range of page `page` (1-based) over `len` items.
///
/// ## Example
/// ```rust
/// use forkify_core::pagination::page_window;
///
/// assert_eq!(page_window(5, 1, 3), 0..3);
/// assert_eq!(page_window(5, 2, 3), 3..5);
/// assert_eq!(page_window(5, 3, 3), 5..5); // past the end: empty
/// ```
pub fn page_window(len: usize, page: usize, per_page: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(len);
    let end = page.saturating_mul(per_page).min(len);
    start..end
}

impl SearchState {
    /// Moves the cursor to `page` and returns that page's results.
    pub fn page_slice(&mut self, page: usize) -> &[SearchResultItem] {
        self.page = page;
        self.current_page()
    }

    /// Returns the results of the page under the cursor.
    pub fn current_page(&self) -> &[SearchResultItem] {
        let window = page_window(self.results.len(), self.page, self.results_per_page.max(1));
        &self.results[window]
    }

    /// Number of pages needed for the cached results. A zero page size
    /// counts as one.
    pub fn num_pages(&self) -> usize {
        self.results.len().div_ceil(self.results_per_page.max(1))
    }

    /// True if a page exists before the cursor.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// True if a page exists after the cursor.
    pub fn has_next(&self) -> bool {
        self.page < self.num_pages()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<SearchResultItem> {
        (0..n)
            .map(|i| SearchResultItem {
                id: format!("id-{}", i),
                title: format!("Pizza {}", i),
                publisher: "Publisher".to_string(),
                image: format!("http://img/{}.jpg", i),
                key: None,
            })
            .collect()
    }

    fn state_with(n: usize, per_page: usize) -> SearchState {
        let mut state = SearchState::new(per_page);
        state.replace_results("pizza", items(n));
        state
    }

    #[test]
    fn test_pizza_scenario() {
        let mut state = state_with(5, 3);
        let all = state.results.clone();

        assert_eq!(state.page_slice(1), &all[0..3]);
        assert_eq!(state.page_slice(2), &all[3..5]);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_zero_page_size_counts_as_one() {
        let mut state = state_with(3, 1);
        state.results_per_page = 0;

        assert_eq!(state.num_pages(), 3);
        assert_eq!(state.page_slice(2).len(), 1);
        assert!(state.has_next());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let mut state = state_with(5, 3);
        assert!(state.page_slice(3).is_empty());
        assert!(state.page_slice(100).is_empty());
    }

    #[test]
    fn test_page_length_property() {
        for len in 0..25usize {
            for per_page in 1..7 {
                for page in 1..8 {
                    let start = (page - 1) * per_page;
                    let expected = per_page.min(len.saturating_sub(start));
                    assert_eq!(page_window(len, page, per_page).len(), expected);
                }
            }
        }
    }

    #[test]
    fn test_pages_concatenate_to_results() {
        for len in 0..25 {
            for per_page in 1..7 {
                let mut state = state_with(len, per_page);
                let original = state.results.clone();

                let mut joined = Vec::new();
                for page in 1..=state.num_pages() {
                    joined.extend_from_slice(state.page_slice(page));
                }

                assert_eq!(joined, original, "len={} per_page={}", len, per_page);
            }
        }
    }

    #[test]
    fn test_num_pages_and_neighbours() {
        let mut state = state_with(5, 3);
        assert_eq!(state.num_pages(), 2);

        state.page_slice(1);
        assert!(!state.has_previous());
        assert!(state.has_next());

        state.page_slice(2);
        assert!(state.has_previous());
        assert!(!state.has_next());

        let empty = state_with(0, 3);
        assert_eq!(empty.num_pages(), 0);
        assert!(!empty.has_next());
    }
}

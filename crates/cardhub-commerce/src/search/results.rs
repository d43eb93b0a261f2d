//! Search results and pagination.

use crate::error::CommerceError;
use crate::search::{validate_groups, FacetGroup};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Pagination totals reported by the search backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Total number of pages.
    pub num_pages: u32,
    /// Total number of results.
    pub num_results: u64,
}

impl Pagination {
    /// Compute totals from a result count and page size.
    pub fn new(num_results: u64, page_size: u32) -> Self {
        let page_size = u64::from(page_size.max(1));
        let num_pages = num_results.div_ceil(page_size);
        Self {
            num_pages: u32::try_from(num_pages).unwrap_or(u32::MAX),
            num_results,
        }
    }

    /// Highest valid page number. An empty result set still has page 1.
    pub fn last_page(&self) -> u32 {
        self.num_pages.max(1)
    }

    /// Whether there's a page after `page`.
    pub fn has_next(&self, page: u32) -> bool {
        page < self.last_page()
    }

    /// Whether there's a page before `page`.
    pub fn has_prev(&self, page: u32) -> bool {
        page > 1
    }

    /// Page numbers to show around `page` (e.g. `[3, 4, 5, 6, 7]`).
    pub fn page_numbers(&self, page: u32, max_visible: u32) -> Vec<u32> {
        let last = self.last_page();
        if max_visible == 0 {
            return Vec::new();
        }
        if last <= max_visible {
            return (1..=last).collect();
        }

        let half = max_visible / 2;
        let start = page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(last);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// First result number shown on `page` (1-indexed, 0 when empty).
    pub fn start_item(&self, page: u32, page_size: u32) -> u64 {
        if self.num_results == 0 {
            0
        } else {
            u64::from(page.saturating_sub(1)) * u64::from(page_size) + 1
        }
    }

    /// Last result number shown on `page`.
    pub fn end_item(&self, page: u32, page_size: u32) -> u64 {
        (u64::from(page) * u64::from(page_size)).min(self.num_results)
    }
}

/// One page of results as returned by the search backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<T> {
    /// The result items.
    pub results: Vec<T>,
    /// Facet groups for the current query and selections.
    #[serde(default)]
    pub filter_options: Vec<FacetGroup>,
    /// Totals.
    #[serde(default)]
    pub pagination: Pagination,
}

impl<T> SearchResults<T> {
    /// Create new search results.
    pub fn new(results: Vec<T>, pagination: Pagination) -> Self {
        Self {
            results,
            filter_options: Vec::new(),
            pagination,
        }
    }

    /// Create empty results.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Pagination::default())
    }

    /// Set facet groups.
    pub fn with_filter_options(mut self, groups: Vec<FacetGroup>) -> Self {
        self.filter_options = groups;
        self
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Validate the facet groups carried by the response.
    pub fn validated(mut self) -> Result<Self, CommerceError> {
        self.filter_options = validate_groups(self.filter_options)?;
        Ok(self)
    }
}

/// Parse and validate a search backend response body.
pub fn parse_search_response<T: DeserializeOwned>(
    json: &str,
) -> Result<SearchResults<T>, CommerceError> {
    let results: SearchResults<T> = serde_json::from_str(json)?;
    results.validated()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_from_count() {
        let p = Pagination::new(45, 10);
        assert_eq!(p.num_pages, 5);
        assert!(p.has_next(2));
        assert!(p.has_prev(2));
        assert!(!p.has_next(5));
        assert!(!p.has_prev(1));
    }

    #[test]
    fn test_empty_results_have_one_page() {
        let p = Pagination::new(0, 24);
        assert_eq!(p.num_pages, 0);
        assert_eq!(p.last_page(), 1);
        assert_eq!(p.start_item(1, 24), 0);
        assert_eq!(p.page_numbers(1, 5), vec![1]);
    }

    #[test]
    fn test_pagination_page_numbers() {
        let p = Pagination::new(100, 10);
        assert_eq!(p.page_numbers(5, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(p.page_numbers(1, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(p.page_numbers(10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_pagination_item_range() {
        let p = Pagination::new(45, 10);
        assert_eq!(p.start_item(2, 10), 11);
        assert_eq!(p.end_item(2, 10), 20);
        assert_eq!(p.end_item(5, 10), 45);
    }

    #[test]
    fn test_response_shape() {
        let json = r#"{
            "results": [{"name": "Sheoldred"}],
            "filterOptions": [{"field": "rarity", "name": "Rarity", "values": []}],
            "pagination": {"numPages": 3, "numResults": 61}
        }"#;
        let results: SearchResults<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results.filter_options[0].field, "rarity");
        assert_eq!(results.pagination.num_pages, 3);
        assert_eq!(results.pagination.num_results, 61);
    }

    #[test]
    fn test_parse_search_response_validates_groups() {
        let json = r#"{
            "results": [],
            "filterOptions": [{"field": "", "name": "Broken", "values": []}],
            "pagination": {"numPages": 0, "numResults": 0}
        }"#;
        let err = parse_search_response::<serde_json::Value>(json).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidFacet(_)));
    }
}

//! Faceted search session state.
//!
//! A [`SearchSession`] owns everything one search surface needs to build
//! its next request: query, category, facet selections, sort and page
//! cursor, plus the last result page it was handed. It performs no I/O.
//!
//! Every operation that changes *which* results match (query, category,
//! selections, sort) moves the cursor back to page 1. [`SearchSession::set_page`]
//! is the only cursor-only operation.
//!
//! Every mutation also supersedes in-flight fetches: a response only lands
//! if nothing changed since its ticket was issued.

use crate::catalog::Category;
use crate::search::{
    FacetGroup, FetchOutcome, FetchTicket, FilterSelection, FilterSelections, SearchAction,
    SearchRequestParams, SearchResults, SortOption,
};

/// Default number of results per page.
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Largest page size the backend accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// One shopper's search parameters and last-fetched result page.
#[derive(Debug, Clone)]
pub struct SearchSession<T = serde_json::Value> {
    query: String,
    category: Category,
    sort: SortOption,
    page: u32,
    page_size: u32,
    selections: FilterSelections,
    /// `None` until the backend has reported groups for this category.
    filter_options: Option<Vec<FacetGroup>>,
    results: Option<SearchResults<T>>,
    generation: u64,
}

impl<T> SearchSession<T> {
    /// Create a session for a category with its default sort.
    pub fn new(category: Category) -> Self {
        Self {
            query: String::new(),
            category,
            sort: category.default_sort(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            selections: FilterSelections::new(),
            filter_options: None,
            results: None,
            generation: 0,
        }
    }

    /// Set the page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    /// Current page (1-indexed).
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Every stored selection, including inert ones.
    pub fn selections(&self) -> &FilterSelections {
        &self.selections
    }

    /// Facet groups as last reported, if any.
    pub fn filter_options(&self) -> Option<&[FacetGroup]> {
        self.filter_options.as_deref()
    }

    /// The result page held for the latest request, if it has arrived.
    pub fn results(&self) -> Option<&SearchResults<T>> {
        self.results.as_ref()
    }

    /// Current request generation. Bumped by every fetch and mutation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the query verbatim. Selections are kept.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.page = 1;
        self.supersede();
    }

    /// Switch category.
    ///
    /// Selections and facet groups belong to the old category and are
    /// dropped. The sort falls back to the new category's default when the
    /// new category does not offer it.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.selections.clear();
        self.filter_options = None;
        if !category.supports_sort(self.sort) {
            tracing::debug!(
                sort = %self.sort,
                category = %category,
                "sort not offered by category, using default"
            );
            self.sort = category.default_sort();
        }
        self.page = 1;
        self.supersede();
    }

    /// Replace the known facet groups.
    ///
    /// Stored selections are left alone. Pairs the new groups do not offer
    /// are left out of requests until a later group set offers them again.
    pub fn set_filter_options(&mut self, groups: Vec<FacetGroup>) {
        self.filter_options = Some(groups);
        let inert = self.inert_selections().len();
        if inert > 0 {
            tracing::debug!(inert, "selections not offered by current facet groups");
        }
    }

    /// Add the pair if absent, remove it if present.
    ///
    /// A field no known group offers is still accepted; it stays inert until
    /// the backend reports it. Returns `true` when the pair ends up selected.
    pub fn toggle_filter(&mut self, field: impl Into<String>, value: impl Into<String>) -> bool {
        let selection = FilterSelection::new(field, value);
        if let Some(groups) = self.filter_options.as_deref() {
            if !groups.iter().any(|g| g.field == selection.field) {
                tracing::debug!(field = %selection.field, "toggling filter on unknown facet field");
            }
        }
        let selected = self.selections.toggle(selection);
        self.page = 1;
        self.supersede();
        selected
    }

    /// Drop every selection. Query, category and sort are kept.
    pub fn clear_filters(&mut self) {
        self.selections.clear();
        self.page = 1;
        self.supersede();
    }

    /// Change the sort order.
    pub fn set_sort_by(&mut self, sort: SortOption) {
        if !self.category.supports_sort(sort) {
            tracing::debug!(
                sort = %sort,
                category = %self.category,
                "sort not offered by category"
            );
        }
        self.sort = sort;
        self.page = 1;
        self.supersede();
    }

    /// Move the cursor without touching anything else.
    ///
    /// Clamped to `1..=last_page` when a result page is held, to `>= 1`
    /// otherwise. Returns the page actually applied.
    pub fn set_page(&mut self, page: u32) -> u32 {
        let mut clamped = page.max(1);
        if let Some(results) = &self.results {
            clamped = clamped.min(results.pagination.last_page());
        }
        if clamped != page {
            tracing::debug!(requested = page, applied = clamped, "page clamped");
        }
        self.page = clamped;
        self.supersede();
        clamped
    }

    /// Build the outgoing request from the current state.
    ///
    /// Only selections the latest facet groups offer are included. Call this
    /// fresh for every fetch.
    pub fn build_request_params(&self) -> SearchRequestParams {
        SearchRequestParams {
            query: self.query.clone(),
            category: self.category,
            sort_by: self.sort,
            page: self.page,
            page_size: self.page_size,
            filter_selections: self.selections.to_request_map(self.filter_options()),
        }
    }

    /// Issue a request. Any ticket issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.supersede();
        FetchTicket {
            generation: self.generation,
            params: self.build_request_params(),
        }
    }

    /// Hand back the response to a ticket.
    ///
    /// Responses to tickets superseded by a later fetch or by any mutation
    /// since are discarded. An applied response replaces the held page and
    /// the known facet groups.
    pub fn apply_results(
        &mut self,
        ticket: &FetchTicket,
        results: SearchResults<T>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                latest = self.generation,
                "discarding stale search response"
            );
            return FetchOutcome::Stale;
        }
        self.set_filter_options(results.filter_options.clone());
        self.results = Some(results);
        FetchOutcome::Applied
    }

    /// Apply a mutation expressed as data.
    pub fn dispatch(&mut self, action: SearchAction) {
        match action {
            SearchAction::SetQuery { text } => self.set_query(text),
            SearchAction::SetCategory { category } => self.set_category(category),
            SearchAction::SetFilterOptions { groups } => self.set_filter_options(groups),
            SearchAction::ToggleFilter { field, value } => {
                self.toggle_filter(field, value);
            }
            SearchAction::ClearFilters => self.clear_filters(),
            SearchAction::SetSortBy { sort } => self.set_sort_by(sort),
            SearchAction::SetPage { page } => {
                self.set_page(page);
            }
        }
    }

    /// Selections included in the next request.
    pub fn active_selections(&self) -> Vec<&FilterSelection> {
        self.selections.active(self.filter_options()).collect()
    }

    /// Stored selections the current facet groups do not offer.
    pub fn inert_selections(&self) -> Vec<&FilterSelection> {
        match self.filter_options() {
            Some(groups) => self
                .selections
                .iter()
                .filter(|s| !s.is_offered_by(groups))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Known facet groups with `selected` flags taken from this session.
    pub fn facet_groups(&self) -> Vec<FacetGroup> {
        let Some(groups) = self.filter_options() else {
            return Vec::new();
        };
        groups
            .iter()
            .map(|g| {
                let mut g = g.clone();
                for v in &mut g.values {
                    v.selected = self.selections.contains(&g.field, &v.value);
                }
                g
            })
            .collect()
    }

    /// Page window for pagination controls.
    pub fn page_numbers(&self, max_visible: u32) -> Vec<u32> {
        let pagination = self
            .results
            .as_ref()
            .map(|r| r.pagination)
            .unwrap_or_default();
        pagination.page_numbers(self.page, max_visible)
    }

    fn supersede(&mut self) {
        self.generation += 1;
    }

    pub(crate) fn from_parts(
        query: String,
        category: Category,
        sort: SortOption,
        page_size: u32,
        selections: FilterSelections,
    ) -> Self {
        let mut session = Self::new(category).with_page_size(page_size);
        session.query = query;
        if category.supports_sort(sort) {
            session.sort = sort;
        }
        session.selections = selections;
        session
    }
}

impl<T> Default for SearchSession<T> {
    fn default() -> Self {
        Self::new(Category::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Pagination;

    fn session() -> SearchSession {
        SearchSession::new(Category::Mtg)
    }

    fn rarity_group() -> FacetGroup {
        FacetGroup::new("rarity", "Rarity")
            .with_value("rare", 40)
            .with_value("mythic", 8)
    }

    #[test]
    fn test_new_session_defaults() {
        let s = session();
        assert_eq!(s.page(), 1);
        assert_eq!(s.query(), "");
        assert_eq!(s.sort(), SortOption::Relevance);
        assert_eq!(s.page_size(), DEFAULT_PAGE_SIZE);
        assert!(s.results().is_none());
    }

    #[test]
    fn test_page_size_clamped() {
        assert_eq!(session().with_page_size(0).page_size(), 1);
        assert_eq!(session().with_page_size(500).page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_query_kept_verbatim_and_selections_survive() {
        let mut s = session();
        s.toggle_filter("rarity", "rare");
        s.set_page(4);
        s.set_query("  Lightning Bolt ");
        assert_eq!(s.query(), "  Lightning Bolt ");
        assert_eq!(s.page(), 1);
        assert!(s.selections().contains("rarity", "rare"));
    }

    #[test]
    fn test_clear_filters_keeps_other_fields() {
        let mut s = session();
        s.set_query("bolt");
        s.set_sort_by(SortOption::PriceDesc);
        s.toggle_filter("rarity", "rare");
        s.set_page(3);
        s.clear_filters();
        assert!(s.selections().is_empty());
        assert_eq!(s.page(), 1);
        assert_eq!(s.query(), "bolt");
        assert_eq!(s.sort(), SortOption::PriceDesc);
    }

    #[test]
    fn test_category_switch_resets_invalid_sort() {
        let mut s = session();
        s.set_sort_by(SortOption::CollectorNumber);
        s.set_category(Category::Sealed);
        assert_eq!(s.sort(), SortOption::Newest);

        s.set_sort_by(SortOption::PriceAsc);
        s.set_category(Category::Pokemon);
        assert_eq!(s.sort(), SortOption::PriceAsc);
    }

    #[test]
    fn test_category_switch_forgets_facet_groups() {
        let mut s = session();
        s.set_filter_options(vec![rarity_group()]);
        s.set_category(Category::Lorcana);
        assert!(s.filter_options().is_none());
        assert!(s.facet_groups().is_empty());
    }

    #[test]
    fn test_set_page_clamps_low() {
        let mut s = session();
        assert_eq!(s.set_page(0), 1);
        assert_eq!(s.page(), 1);
        assert_eq!(s.set_page(7), 7);
    }

    #[test]
    fn test_set_page_clamps_to_known_last_page() {
        let mut s = session();
        let ticket = s.begin_fetch();
        s.apply_results(&ticket, SearchResults::new(vec![], Pagination::new(50, 24)));
        assert_eq!(s.set_page(9), 3);
        assert_eq!(s.page(), 3);
    }

    #[test]
    fn test_toggle_unknown_field_is_accepted() {
        let mut s = session();
        s.set_filter_options(vec![rarity_group()]);
        assert!(s.toggle_filter("finish", "foil"));
        assert_eq!(s.selections().len(), 1);
        assert_eq!(s.inert_selections().len(), 1);
        assert!(s.build_request_params().filter_selections.is_empty());
    }

    #[test]
    fn test_selections_pass_through_before_groups_known() {
        let mut s = session();
        s.toggle_filter("rarity", "mythic");
        let params = s.build_request_params();
        assert_eq!(params.filter_selections["rarity"], vec!["mythic"]);
        assert!(s.inert_selections().is_empty());
    }

    #[test]
    fn test_facet_groups_mark_selected_values() {
        let mut s = session();
        s.set_filter_options(vec![rarity_group()]);
        s.toggle_filter("rarity", "mythic");
        let groups = s.facet_groups();
        let mythic = groups[0].values.iter().find(|v| v.value == "mythic").unwrap();
        let rare = groups[0].values.iter().find(|v| v.value == "rare").unwrap();
        assert!(mythic.selected);
        assert!(!rare.selected);
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut s = session();
        let first = s.begin_fetch();
        s.set_query("bolt");
        let second = s.begin_fetch();

        let newer = SearchResults::new(vec![serde_json::json!("new")], Pagination::new(1, 24));
        let older = SearchResults::new(vec![serde_json::json!("old")], Pagination::new(1, 24));

        assert_eq!(s.apply_results(&second, newer), FetchOutcome::Applied);
        assert_eq!(s.apply_results(&first, older), FetchOutcome::Stale);
        assert_eq!(s.results().unwrap().results[0], "new");
    }

    #[test]
    fn test_applied_response_updates_filter_options() {
        let mut s = session();
        let ticket = s.begin_fetch();
        let results = SearchResults::<serde_json::Value>::empty()
            .with_filter_options(vec![rarity_group()]);
        s.apply_results(&ticket, results);
        assert_eq!(s.filter_options().unwrap().len(), 1);
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let mut s = session();
        s.dispatch(SearchAction::ToggleFilter {
            field: "rarity".into(),
            value: "rare".into(),
        });
        s.dispatch(SearchAction::SetPage { page: 2 });
        assert_eq!(s.page(), 2);
        s.dispatch(SearchAction::SetSortBy { sort: SortOption::NameAsc });
        assert_eq!(s.page(), 1);
        assert_eq!(s.sort(), SortOption::NameAsc);
    }

    #[test]
    fn test_page_numbers_without_results() {
        let s = session();
        assert_eq!(s.page_numbers(5), vec![1]);
    }
}

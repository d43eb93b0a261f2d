//! Search module.
//!
//! Contains the faceted search session shared by the singles, sealed and
//! buylist surfaces, plus the payload types it exchanges with the search
//! backend.

mod action;
mod facet;
mod request;
mod results;
mod selection;
mod session;
mod snapshot;
mod sort;

pub use action::SearchAction;
pub use facet::{parse_filter_options, validate_groups, FacetGroup, FacetValue};
pub use request::{FetchOutcome, FetchTicket, SearchRequestParams};
pub use results::{parse_search_response, Pagination, SearchResults};
pub use selection::{FilterSelection, FilterSelections};
pub use session::{SearchSession, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use snapshot::SessionSnapshot;
pub use sort::SortOption;

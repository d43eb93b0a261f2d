//! Storefront logic for the cardhub trading-card marketplace.
//!
//! This crate holds the client-side pieces of the storefront that carry real
//! invariants:
//!
//! - **Ads**: weighted rotation of store advertisements per page slot
//! - **Search**: faceted search session shared by singles, sealed and
//!   buylist search (filters, sort, pagination, stale-response handling)
//! - **Catalog**: the game/product-type taxonomy and its sort options
//!
//! # Example
//!
//! ```rust,ignore
//! use cardhub_commerce::prelude::*;
//!
//! let mut session: SearchSession = SearchSession::new(Category::Mtg);
//! session.toggle_filter("rarity", "mythic");
//! session.set_sort_by(SortOption::PriceAsc);
//!
//! let ticket = session.begin_fetch();
//! let body = search_backend.post(&ticket.params)?;
//! session.apply_results(&ticket, parse_search_response(&body)?);
//!
//! let mut rotator = WeightedAdRotator::new(ads, &weights);
//! let banner = rotator.next_ad()?;
//! ```

pub mod error;
pub mod ids;

pub mod ads;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;

    // Ads
    pub use crate::ads::{
        AdPosition, AdSlots, Advertisement, DeviceType, StoreWeight, WeightedAdRotator,
    };

    // Catalog
    pub use crate::catalog::Category;

    // Search
    pub use crate::search::{
        parse_search_response, FacetGroup, FacetValue, FetchOutcome, FetchTicket,
        FilterSelection, Pagination, SearchAction, SearchRequestParams, SearchResults,
        SearchSession, SessionSnapshot, SortOption,
    };
}

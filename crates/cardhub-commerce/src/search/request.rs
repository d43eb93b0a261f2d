//! Outgoing search request payload and fetch ordering.

use crate::catalog::Category;
use crate::search::SortOption;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameters sent to the search backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequestParams {
    pub query: String,
    pub category: Category,
    pub sort_by: SortOption,
    /// Current page (1-indexed).
    pub page: u32,
    pub page_size: u32,
    /// Active selections grouped by field, values in selection order.
    pub filter_selections: BTreeMap<String, Vec<String>>,
}

/// A request issued by a session, tagged with its generation.
///
/// Only the ticket from the session's latest `begin_fetch` may apply its
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub params: SearchRequestParams,
}

/// What happened to a response handed back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response answered the latest request and is now held.
    Applied,
    /// A newer request was issued since; the response was discarded.
    Stale,
}

//! Persistable snapshot of a search session.

use crate::catalog::Category;
use crate::search::{FilterSelections, SearchSession, SortOption};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The parts of a session worth remembering across reloads.
///
/// Results, facet groups and the page cursor are not kept; a restored
/// session starts on page 1 and refetches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub query: String,
    pub category: Category,
    pub sort_by: SortOption,
    pub page_size: u32,
    #[serde(default)]
    pub selections: FilterSelections,
    pub saved_at: DateTime<Utc>,
}

impl<T> SearchSession<T> {
    /// Capture the session for the embedding app's key-value store.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            query: self.query().to_string(),
            category: self.category(),
            sort_by: self.sort(),
            page_size: self.page_size(),
            selections: self.selections().clone(),
            saved_at: Utc::now(),
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// A sort the category does not offer falls back to its default.
    pub fn restore(snapshot: SessionSnapshot) -> Self {
        SearchSession::from_parts(
            snapshot.query,
            snapshot.category,
            snapshot.sort_by,
            snapshot.page_size,
            snapshot.selections,
        )
    }
}

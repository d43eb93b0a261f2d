//! Search mutations expressed as data.

use crate::catalog::Category;
use crate::search::{validate_groups, FacetGroup, SortOption};
use serde::{Deserialize, Deserializer, Serialize};

/// One shopper interaction with a search surface.
///
/// Serialized with a `type` tag, e.g.
/// `{"type": "toggleFilter", "field": "rarity", "value": "mythic"}`.
/// Facet groups carried by `setFilterOptions` are validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SearchAction {
    SetQuery { text: String },
    SetCategory { category: Category },
    SetFilterOptions {
        #[serde(deserialize_with = "deserialize_groups")]
        groups: Vec<FacetGroup>,
    },
    ToggleFilter { field: String, value: String },
    ClearFilters,
    SetSortBy { sort: SortOption },
    SetPage { page: u32 },
}

impl SearchAction {
    /// Whether the action changes which results match, and so resets the page.
    pub fn resets_page(&self) -> bool {
        !matches!(
            self,
            SearchAction::SetPage { .. } | SearchAction::SetFilterOptions { .. }
        )
    }
}

fn deserialize_groups<'de, D>(deserializer: D) -> Result<Vec<FacetGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    let groups = Vec::<FacetGroup>::deserialize(deserializer)?;
    validate_groups(groups).map_err(serde::de::Error::custom)
}

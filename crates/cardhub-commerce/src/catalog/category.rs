//! Product categories searchable on the storefront.

use crate::error::CommerceError;
use crate::search::SortOption;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trading-card game or product type with its own facet space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Magic: The Gathering singles.
    #[default]
    Mtg,
    /// Pokémon singles.
    Pokemon,
    /// Yu-Gi-Oh! singles.
    Yugioh,
    /// Disney Lorcana singles.
    Lorcana,
    /// One Piece singles.
    OnePiece,
    /// Flesh and Blood singles.
    Fab,
    /// Sealed product (boosters, boxes, decks) across games.
    Sealed,
}

const CARD_SORTS: &[SortOption] = &[
    SortOption::Relevance,
    SortOption::NameAsc,
    SortOption::NameDesc,
    SortOption::PriceAsc,
    SortOption::PriceDesc,
    SortOption::CollectorNumber,
];

const SEALED_SORTS: &[SortOption] = &[
    SortOption::Newest,
    SortOption::Relevance,
    SortOption::NameAsc,
    SortOption::NameDesc,
    SortOption::PriceAsc,
    SortOption::PriceDesc,
];

impl Category {
    /// Every supported category, in menu order.
    pub const ALL: [Category; 7] = [
        Category::Mtg,
        Category::Pokemon,
        Category::Yugioh,
        Category::Lorcana,
        Category::OnePiece,
        Category::Fab,
        Category::Sealed,
    ];

    /// Wire name used in request params and routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mtg => "mtg",
            Category::Pokemon => "pokemon",
            Category::Yugioh => "yugioh",
            Category::Lorcana => "lorcana",
            Category::OnePiece => "onepiece",
            Category::Fab => "fab",
            Category::Sealed => "sealed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Mtg => "Magic: The Gathering",
            Category::Pokemon => "Pokémon",
            Category::Yugioh => "Yu-Gi-Oh!",
            Category::Lorcana => "Lorcana",
            Category::OnePiece => "One Piece",
            Category::Fab => "Flesh and Blood",
            Category::Sealed => "Sealed Product",
        }
    }

    /// Sort options offered for this category. The first entry is the default.
    pub fn sort_options(&self) -> &'static [SortOption] {
        match self {
            Category::Sealed => SEALED_SORTS,
            _ => CARD_SORTS,
        }
    }

    /// Default sort for a fresh search in this category.
    pub fn default_sort(&self) -> SortOption {
        self.sort_options()[0]
    }

    /// Check whether a sort option is offered for this category.
    pub fn supports_sort(&self, sort: SortOption) -> bool {
        self.sort_options().contains(&sort)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!("MTG".parse::<Category>().unwrap(), Category::Mtg);
    }

    #[test]
    fn test_unknown_category() {
        let err = "digimon".parse::<Category>().unwrap_err();
        assert_eq!(err, CommerceError::UnknownCategory("digimon".into()));
    }

    #[test]
    fn test_serde_names_match_wire_names() {
        let json = serde_json::to_string(&Category::OnePiece).unwrap();
        assert_eq!(json, "\"onepiece\"");
    }

    #[test]
    fn test_default_sorts() {
        assert_eq!(Category::Mtg.default_sort(), SortOption::Relevance);
        assert_eq!(Category::Sealed.default_sort(), SortOption::Newest);
    }

    #[test]
    fn test_category_dependent_sorts() {
        assert!(Category::Pokemon.supports_sort(SortOption::CollectorNumber));
        assert!(!Category::Sealed.supports_sort(SortOption::CollectorNumber));
        assert!(!Category::Mtg.supports_sort(SortOption::Newest));
    }
}

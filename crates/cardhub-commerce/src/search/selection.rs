//! Facet selections made by the shopper.

use crate::search::FacetGroup;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A selected `(field, value)` pair, e.g. `rarity: mythic`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    pub field: String,
    pub value: String,
}

impl FilterSelection {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether the pair is offered by the given facet groups.
    pub fn is_offered_by(&self, groups: &[FacetGroup]) -> bool {
        groups
            .iter()
            .any(|g| g.field == self.field && g.contains(&self.value))
    }
}

/// Ordered set of selections, in the order the shopper made them.
///
/// Serialized as a plain array. Repeated pairs in a payload collapse to the
/// first occurrence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<FilterSelection>", into = "Vec<FilterSelection>")]
pub struct FilterSelections(Vec<FilterSelection>);

impl FilterSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the pair if absent, remove it if present.
    ///
    /// Returns `true` when the pair is selected after the call.
    pub fn toggle(&mut self, selection: FilterSelection) -> bool {
        if let Some(pos) = self.0.iter().position(|s| *s == selection) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(selection);
            true
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, field: &str, value: &str) -> bool {
        self.0.iter().any(|s| s.field == field && s.value == value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterSelection> {
        self.0.iter()
    }

    /// Selections that take part in the next request.
    ///
    /// With no known facet groups every selection is active; once groups are
    /// known, only pairs they still offer are.
    pub fn active<'a>(
        &'a self,
        groups: Option<&'a [FacetGroup]>,
    ) -> impl Iterator<Item = &'a FilterSelection> + 'a {
        self.0
            .iter()
            .filter(move |s| groups.map_or(true, |g| s.is_offered_by(g)))
    }

    /// Group the active selections by field for the request payload.
    pub fn to_request_map(
        &self,
        groups: Option<&[FacetGroup]>,
    ) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for s in self.active(groups) {
            map.entry(s.field.clone()).or_default().push(s.value.clone());
        }
        map
    }
}

impl FromIterator<FilterSelection> for FilterSelections {
    fn from_iter<I: IntoIterator<Item = FilterSelection>>(iter: I) -> Self {
        let mut selections = FilterSelections::new();
        for s in iter {
            if !selections.contains(&s.field, &s.value) {
                selections.0.push(s);
            }
        }
        selections
    }
}

impl From<Vec<FilterSelection>> for FilterSelections {
    fn from(selections: Vec<FilterSelection>) -> Self {
        selections.into_iter().collect()
    }
}

impl From<FilterSelections> for Vec<FilterSelection> {
    fn from(selections: FilterSelections) -> Self {
        selections.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selections = FilterSelections::new();
        assert!(selections.toggle(FilterSelection::new("rarity", "rare")));
        assert!(selections.contains("rarity", "rare"));
        assert!(!selections.toggle(FilterSelection::new("rarity", "rare")));
        assert!(selections.is_empty());
    }

    #[test]
    fn test_request_map_groups_by_field_in_order() {
        let mut selections = FilterSelections::new();
        selections.toggle(FilterSelection::new("rarity", "mythic"));
        selections.toggle(FilterSelection::new("set", "neo"));
        selections.toggle(FilterSelection::new("rarity", "rare"));

        let map = selections.to_request_map(None);
        assert_eq!(map["rarity"], vec!["mythic", "rare"]);
        assert_eq!(map["set"], vec!["neo"]);
    }

    #[test]
    fn test_request_map_filters_against_groups() {
        let mut selections = FilterSelections::new();
        selections.toggle(FilterSelection::new("rarity", "mythic"));
        selections.toggle(FilterSelection::new("rarity", "common"));

        let groups = vec![FacetGroup::new("rarity", "Rarity").with_value("mythic", 2)];
        let map = selections.to_request_map(Some(&groups));
        assert_eq!(map["rarity"], vec!["mythic"]);
        assert_eq!(selections.len(), 2);
    }

    #[test]
    fn test_from_iter_dedupes() {
        let selections: FilterSelections = vec![
            FilterSelection::new("set", "neo"),
            FilterSelection::new("set", "neo"),
        ]
        .into_iter()
        .collect();
        assert_eq!(selections.len(), 1);
    }

    #[test]
    fn test_deserialize_dedupes_and_serializes_as_array() {
        let json = r#"[
            {"field": "set", "value": "neo"},
            {"field": "rarity", "value": "rare"},
            {"field": "set", "value": "neo"}
        ]"#;
        let selections: FilterSelections = serde_json::from_str(json).unwrap();
        assert_eq!(selections.len(), 2);
        assert_eq!(
            serde_json::to_value(&selections).unwrap(),
            serde_json::json!([
                {"field": "set", "value": "neo"},
                {"field": "rarity", "value": "rare"}
            ])
        );
    }
}

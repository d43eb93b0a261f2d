//! Facet groups reported by the search backend.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A facet group (e.g. "Rarity") with its selectable values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetGroup {
    /// Field this facet filters on.
    pub field: String,
    /// Display name.
    pub name: String,
    /// Facet values.
    #[serde(default)]
    pub values: Vec<FacetValue>,
}

/// A single facet value with its result count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetValue {
    /// The value sent back in filter selections.
    pub value: String,
    /// Display label, defaults to the value.
    #[serde(default)]
    pub label: String,
    /// Number of results carrying this value in the current context.
    #[serde(default)]
    pub count: u64,
    /// Whether currently selected.
    #[serde(default)]
    pub selected: bool,
}

impl FacetGroup {
    /// Create an empty group.
    pub fn new(field: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the group.
    pub fn with_value(mut self, value: impl Into<String>, count: u64) -> Self {
        let value = value.into();
        self.values.push(FacetValue {
            label: value.clone(),
            value,
            count,
            selected: false,
        });
        self
    }

    /// Check whether the group offers a value.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.value == value)
    }

    /// Validate a group received from the backend.
    ///
    /// Rejects blank field names and values, fills empty labels from the
    /// value and drops repeated values (first occurrence wins).
    pub fn validated(mut self) -> Result<Self, CommerceError> {
        if self.field.trim().is_empty() {
            return Err(CommerceError::InvalidFacet(format!(
                "group {:?} has an empty field name",
                self.name
            )));
        }

        let mut seen = HashSet::new();
        let mut values = Vec::with_capacity(self.values.len());
        for mut v in self.values {
            if v.value.is_empty() {
                return Err(CommerceError::InvalidFacet(format!(
                    "field {} has an empty value",
                    self.field
                )));
            }
            if !seen.insert(v.value.clone()) {
                tracing::debug!(
                    field = %self.field,
                    value = %v.value,
                    "dropping duplicate facet value"
                );
                continue;
            }
            if v.label.is_empty() {
                v.label = v.value.clone();
            }
            values.push(v);
        }
        self.values = values;

        if self.name.is_empty() {
            self.name = self.field.clone();
        }
        Ok(self)
    }
}

/// Validate a list of groups. Later groups repeating a field are dropped.
pub fn validate_groups(groups: Vec<FacetGroup>) -> Result<Vec<FacetGroup>, CommerceError> {
    let mut fields = HashSet::new();
    let mut out = Vec::with_capacity(groups.len());
    for group in groups {
        let group = group.validated()?;
        if fields.insert(group.field.clone()) {
            out.push(group);
        } else {
            tracing::debug!(field = %group.field, "dropping duplicate facet group");
        }
    }
    Ok(out)
}

/// Parse and validate the `filterOptions` array of a search response.
pub fn parse_filter_options(json: &str) -> Result<Vec<FacetGroup>, CommerceError> {
    let groups: Vec<FacetGroup> = serde_json::from_str(json)?;
    validate_groups(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fills_labels_and_defaults() {
        let json = r#"[
            {"field": "rarity", "name": "Rarity", "values": [
                {"value": "rare", "count": 12},
                {"value": "mythic", "label": "Mythic Rare", "count": 3, "selected": true}
            ]}
        ]"#;
        let groups = parse_filter_options(json).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].values[0].label, "rare");
        assert_eq!(groups[0].values[1].label, "Mythic Rare");
        assert!(groups[0].contains("mythic"));
        assert!(!groups[0].contains("common"));
    }

    #[test]
    fn test_negative_count_rejected() {
        let json = r#"[
            {"field": "set", "name": "Set", "values": [{"value": "abc", "count": -1}]}
        ]"#;
        assert!(matches!(
            parse_filter_options(json),
            Err(CommerceError::SerializationError(_))
        ));
    }

    #[test]
    fn test_empty_field_rejected() {
        let groups = vec![FacetGroup::new("  ", "Broken")];
        assert!(matches!(
            validate_groups(groups),
            Err(CommerceError::InvalidFacet(_))
        ));
    }

    #[test]
    fn test_duplicates_dropped() {
        let groups = vec![
            FacetGroup::new("set", "Set").with_value("neo", 4).with_value("neo", 9),
            FacetGroup::new("set", "Set again").with_value("kld", 1),
        ];
        let groups = validate_groups(groups).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].values.len(), 1);
        assert_eq!(groups[0].values[0].count, 4);
    }
}

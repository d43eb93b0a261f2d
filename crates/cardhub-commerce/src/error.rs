//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// The ad rotator was asked for an ad while holding none.
    #[error("Ad rotation pool is empty")]
    EmptyRotationPool,

    /// An advertisement payload failed validation.
    #[error("Invalid advertisement: {0}")]
    InvalidAd(String),

    /// A facet group payload failed validation.
    #[error("Invalid facet group: {0}")]
    InvalidFacet(String),

    /// Unknown category name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unknown sort option name.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// Unknown ad position name.
    #[error("Unknown ad position: {0}")]
    UnknownPosition(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

//! Newtype IDs for type-safe identifiers.
//!
//! Ads and stores are both keyed by integers upstream, so a newtype keeps
//! an `AdId` from being passed where a `StoreId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate integer newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique integer identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new ID from its raw value.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(AdId);
define_id!(StoreId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = StoreId::new(42);
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_id_from_int() {
        let id: AdId = 7.into();
        assert_eq!(id, AdId::new(7));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", StoreId::new(789)), "789");
    }

    #[test]
    fn test_id_serde_transparent() {
        let json = serde_json::to_string(&AdId::new(12)).unwrap();
        assert_eq!(json, "12");
        let back: AdId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AdId::new(12));
    }
}

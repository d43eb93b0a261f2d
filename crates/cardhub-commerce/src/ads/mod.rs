//! Ads module.
//!
//! Contains advertisement payloads and the weighted rotation used for
//! banner and feed placements.

mod advertisement;
mod rotator;
mod slots;

pub use advertisement::{
    parse_ads, parse_store_weights, AdPosition, Advertisement, DeviceType, RawAdvertisement,
    StoreWeight,
};
pub use rotator::{WeightedAdRotator, DEFAULT_STORE_WEIGHT};
pub use slots::AdSlots;

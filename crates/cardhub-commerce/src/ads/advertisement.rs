//! Advertisement payloads from the ads service.

use crate::error::CommerceError;
use crate::ids::{AdId, StoreId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Page slot an advertisement is booked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdPosition {
    TopBanner,
    LeftBanner,
    RightBanner,
    Feed,
}

impl AdPosition {
    pub const ALL: [AdPosition; 4] = [
        AdPosition::TopBanner,
        AdPosition::LeftBanner,
        AdPosition::RightBanner,
        AdPosition::Feed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdPosition::TopBanner => "top-banner",
            AdPosition::LeftBanner => "left-banner",
            AdPosition::RightBanner => "right-banner",
            AdPosition::Feed => "feed",
        }
    }
}

impl fmt::Display for AdPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdPosition {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdPosition::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CommerceError::UnknownPosition(s.to_string()))
    }
}

/// Device class an image variant is cut for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Desktop,
    Tablet,
    Mobile,
}

/// Advertisement as sent by the ads service, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAdvertisement {
    pub id: u64,
    pub store_id: u64,
    pub target_url: String,
    #[serde(default)]
    pub images: BTreeMap<DeviceType, String>,
    pub position: AdPosition,
}

/// A displayable ad creative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAdvertisement")]
pub struct Advertisement {
    pub id: AdId,
    /// Store whose weight governs how often this ad is shown.
    pub store_id: StoreId,
    pub target_url: String,
    /// Image URL per device type. Never empty.
    pub images: BTreeMap<DeviceType, String>,
    pub position: AdPosition,
}

impl Advertisement {
    /// Create an ad with a single desktop image.
    pub fn new(
        id: u64,
        store_id: u64,
        target_url: impl Into<String>,
        image_url: impl Into<String>,
        position: AdPosition,
    ) -> Self {
        let mut images = BTreeMap::new();
        images.insert(DeviceType::Desktop, image_url.into());
        Self {
            id: AdId::new(id),
            store_id: StoreId::new(store_id),
            target_url: target_url.into(),
            images,
            position,
        }
    }

    /// Add or replace an image variant.
    pub fn with_image(mut self, device: DeviceType, url: impl Into<String>) -> Self {
        self.images.insert(device, url.into());
        self
    }

    /// Image for a device, falling back to desktop and then to any variant.
    pub fn image_for(&self, device: DeviceType) -> Option<&str> {
        self.images
            .get(&device)
            .or_else(|| self.images.get(&DeviceType::Desktop))
            .or_else(|| self.images.values().next())
            .map(String::as_str)
    }
}

impl TryFrom<RawAdvertisement> for Advertisement {
    type Error = CommerceError;

    fn try_from(raw: RawAdvertisement) -> Result<Self, Self::Error> {
        if raw.target_url.trim().is_empty() {
            return Err(CommerceError::InvalidAd(format!(
                "ad {} has no target url",
                raw.id
            )));
        }
        if raw.images.is_empty() {
            return Err(CommerceError::InvalidAd(format!("ad {} has no images", raw.id)));
        }
        if let Some((device, _)) = raw.images.iter().find(|(_, url)| url.trim().is_empty()) {
            return Err(CommerceError::InvalidAd(format!(
                "ad {} has an empty {:?} image url",
                raw.id, device
            )));
        }

        Ok(Self {
            id: AdId::new(raw.id),
            store_id: StoreId::new(raw.store_id),
            target_url: raw.target_url,
            images: raw.images,
            position: raw.position,
        })
    }
}

impl fmt::Display for Advertisement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ad {} (store {}, {})", self.id, self.store_id, self.position)
    }
}

/// Relative display weight for a store's ads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreWeight {
    pub store_id: StoreId,
    pub weight: i64,
}

impl StoreWeight {
    pub fn new(store_id: u64, weight: i64) -> Self {
        Self {
            store_id: StoreId::new(store_id),
            weight,
        }
    }

    /// Weight used for rotation. Zero or negative weights count as 1.
    pub fn effective(&self) -> u64 {
        u64::try_from(self.weight).ok().filter(|w| *w > 0).unwrap_or(1)
    }
}

/// Parse and validate the ads service payload.
pub fn parse_ads(json: &str) -> Result<Vec<Advertisement>, CommerceError> {
    let raw: Vec<RawAdvertisement> = serde_json::from_str(json)?;
    raw.into_iter().map(Advertisement::try_from).collect()
}

/// Parse the optional store weight table.
pub fn parse_store_weights(json: &str) -> Result<Vec<StoreWeight>, CommerceError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ads() {
        let json = r#"[
            {"id": 1, "store_id": 10, "target_url": "https://a.example",
             "images": {"desktop": "a.png", "mobile": "a-m.png"}, "position": "top-banner"},
            {"id": 2, "store_id": 11, "target_url": "https://b.example",
             "images": {"mobile": "b-m.png"}, "position": "feed"}
        ]"#;
        let ads = parse_ads(json).unwrap();
        assert_eq!(ads.len(), 2);
        assert_eq!(ads[0].position, AdPosition::TopBanner);
        assert_eq!(ads[0].image_for(DeviceType::Mobile), Some("a-m.png"));
        assert_eq!(ads[0].image_for(DeviceType::Tablet), Some("a.png"));
        assert_eq!(ads[1].image_for(DeviceType::Desktop), Some("b-m.png"));
    }

    #[test]
    fn test_ad_without_images_rejected() {
        let json = r#"[{"id": 3, "store_id": 1, "target_url": "https://x", "position": "feed"}]"#;
        assert!(matches!(parse_ads(json), Err(CommerceError::InvalidAd(_))));

        let raw = RawAdvertisement {
            id: 3,
            store_id: 1,
            target_url: "https://x".into(),
            images: BTreeMap::new(),
            position: AdPosition::Feed,
        };
        assert!(matches!(
            Advertisement::try_from(raw),
            Err(CommerceError::InvalidAd(_))
        ));
    }

    #[test]
    fn test_ad_without_target_rejected() {
        let mut images = BTreeMap::new();
        images.insert(DeviceType::Desktop, "x.png".to_string());
        let raw = RawAdvertisement {
            id: 4,
            store_id: 1,
            target_url: " ".into(),
            images,
            position: AdPosition::LeftBanner,
        };
        assert!(Advertisement::try_from(raw).is_err());
    }

    #[test]
    fn test_deserialize_advertisement_validates() {
        let json = r#"{
            "id": 5, "store_id": 1, "target_url": "",
            "images": {"desktop": "x.png"}, "position": "feed"
        }"#;
        assert!(serde_json::from_str::<Advertisement>(json).is_err());
    }

    #[test]
    fn test_effective_weight() {
        assert_eq!(StoreWeight::new(1, 5).effective(), 5);
        assert_eq!(StoreWeight::new(1, 0).effective(), 1);
        assert_eq!(StoreWeight::new(1, -3).effective(), 1);
    }

    #[test]
    fn test_position_names() {
        assert_eq!("right-banner".parse::<AdPosition>().unwrap(), AdPosition::RightBanner);
        assert!("sidebar".parse::<AdPosition>().is_err());
    }
}

//! CLI configuration.

use anyhow::{Context, Result};
use cardhub_commerce::ads::StoreWeight;
use cardhub_commerce::catalog::Category;
use cardhub_commerce::search::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardhubConfig {
    /// Search session defaults.
    #[serde(default)]
    pub search: SearchSettings,

    /// Ad rotation settings.
    #[serde(default)]
    pub ads: AdSettings,
}

impl CardhubConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Search session defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Results per page (default: 24).
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Category a new session opens on (default: mtg).
    #[serde(default)]
    pub default_category: Category,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_category: Category::default(),
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Ad rotation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdSettings {
    /// Per-store weights. Stores not listed get weight 1.
    #[serde(default)]
    pub store_weights: Vec<StoreWeight>,
}

/// Generate a default config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# cardhub storefront configuration

[search]
page_size = {page_size}
default_category = "mtg"

[ads]
# Stores not listed here rotate with weight 1.
# [[ads.store_weights]]
# store_id = 7
# weight = 3
"#,
        page_size = DEFAULT_PAGE_SIZE
    )
}

//! Storefront runtime configuration.
//!
//! # Design
//! - Every field has a default so the app boots with no configuration at all.
//! - An optional JSON override (stored under [`CONFIG_OVERRIDE_KEY`]) may set
//!   any subset of fields; malformed overrides are logged and ignored.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Local storage key holding an optional JSON config override.
pub const CONFIG_OVERRIDE_KEY: &str = "storefront.config";
/// Default catalog API origin.
pub const DEFAULT_API_BASE_URL: &str = "https://fakestoreapi.com";
/// Quiet period before a typed search is applied.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 200;
/// Lifetime of the add-to-cart toast.
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 3_000;
/// Local storage key for the persisted wishlist.
pub const DEFAULT_WISHLIST_KEY: &str = "wishlist";
/// Maximum title length on a product card.
pub const DEFAULT_TITLE_LIMIT: usize = 60;
/// Maximum description length on a product card.
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 80;

/// Runtime settings for the storefront UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Catalog API origin, without a trailing slash.
    pub api_base_url: String,
    /// Search debounce in milliseconds; zero applies every keystroke.
    pub search_debounce_ms: u32,
    /// Toast auto-dismiss delay in milliseconds.
    pub toast_timeout_ms: u32,
    /// Storage key for the wishlist.
    pub wishlist_key: String,
    /// Card title truncation limit, in characters.
    pub title_limit: usize,
    /// Card description truncation limit, in characters.
    pub description_limit: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
            wishlist_key: DEFAULT_WISHLIST_KEY.to_string(),
            title_limit: DEFAULT_TITLE_LIMIT,
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
        }
    }
}

impl StorefrontConfig {
    /// Build a config from an optional JSON override, falling back to defaults.
    #[must_use]
    pub fn from_override(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str::<Self>(raw) {
            Ok(config) => config.normalized(),
            Err(err) => {
                warn!(error = %err, key = CONFIG_OVERRIDE_KEY, "ignoring malformed config override");
                Self::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        if self.wishlist_key.trim().is_empty() {
            self.wishlist_key = DEFAULT_WISHLIST_KEY.to_string();
        }
        self
    }

    /// Endpoint listing every product.
    #[must_use]
    pub fn products_url(&self) -> String {
        format!("{}/products", self.api_base_url)
    }

    /// Endpoint listing category labels.
    #[must_use]
    pub fn categories_url(&self) -> String {
        format!("{}/products/categories", self.api_base_url)
    }
}

//! Storefront configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the storefront engines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Where the cart's JSON array is persisted
    pub cart_path: PathBuf,
}

impl StorefrontConfig {
    /// Create a config persisting the cart at the given path
    pub fn new(cart_path: impl Into<PathBuf>) -> Self {
        Self {
            cart_path: cart_path.into(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            cart_path: PathBuf::from("cart.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.cart_path, PathBuf::from("cart.json"));
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = StorefrontConfig::new("/data/store/cart.json");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: StorefrontConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.cart_path, config.cart_path);
    }
}

//! Storefront composition root

use crate::config::StorefrontConfig;
use beatstore_cart::{CartManager, CartStore, JsonCartStore, MemoryCartStore};
use beatstore_core::analytics::AnalyticsSink;
use beatstore_player::PlayerManager;
use std::sync::Arc;

/// The storefront's engines, wired together
///
/// Exactly one instance exists per running application; presentation code
/// receives it explicitly instead of reaching for globals. Both engines
/// share the same analytics sink.
pub struct Storefront {
    /// Shopping cart with BOGO pricing
    pub cart: CartManager,

    /// Preview playback state
    pub player: PlayerManager,
}

impl Storefront {
    /// Build the engines with a JSON-file cart store at the configured path
    pub fn new(config: &StorefrontConfig, analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self::with_store(
            Box::new(JsonCartStore::new(&config.cart_path)),
            analytics,
        )
    }

    /// Build the engines over an arbitrary cart store
    pub fn with_store(store: Box<dyn CartStore>, analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            cart: CartManager::new(store, analytics.clone()),
            player: PlayerManager::new(analytics),
        }
    }

    /// Build the engines with no durable storage attached
    ///
    /// For tests and headless embedding.
    pub fn in_memory(analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self::with_store(Box::new(MemoryCartStore::new()), analytics)
    }
}

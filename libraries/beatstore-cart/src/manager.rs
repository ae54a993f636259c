//! Cart manager - core orchestration
//!
//! Owns the item list, runs the discount pass on every committed change,
//! persists the result, and reports analytics.

use crate::{
    events::CartEvent,
    pricing,
    store::CartStore,
    types::{CartItem, CartTotals},
};
use beatstore_core::analytics::{AnalyticsEvent, AnalyticsSink};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Central cart management
///
/// One instance per running application, handed to presentation code by
/// the composition root. All mutations are synchronous: each operation
/// commits (recompute + persist) before returning, so observers always see
/// settled state.
pub struct CartManager {
    // State
    items: Vec<CartItem>,
    totals: CartTotals,

    // Collaborators
    store: Box<dyn CartStore>,
    analytics: Arc<dyn AnalyticsSink>,

    // Event queue for UI synchronization
    pending_events: Vec<CartEvent>,
}

impl CartManager {
    /// Create a cart manager, hydrating once from the store
    ///
    /// A well-formed persisted array is loaded with `effective_price` reset
    /// to `price` before the first discount pass. Malformed data is logged
    /// and discarded; the cart starts empty. Hydration itself never writes
    /// back to the store.
    pub fn new(store: Box<dyn CartStore>, analytics: Arc<dyn AnalyticsSink>) -> Self {
        let mut items = match store.load() {
            Ok(Some(mut stored)) => {
                for item in &mut stored {
                    item.effective_price = item.price;
                }
                info!(count = stored.len(), "Hydrated cart from storage");
                stored
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Discarding malformed persisted cart");
                Vec::new()
            }
        };

        let totals = pricing::recompute(&mut items);

        Self {
            items,
            totals,
            store,
            analytics,
            pending_events: Vec::new(),
        }
    }

    // ===== Mutations =====

    /// Add an item to the cart
    ///
    /// An existing item with the same id is replaced in place, preserving
    /// its list position; otherwise the item is appended. Price and license
    /// are taken as given (callers are trusted).
    pub fn add_to_cart(&mut self, item: CartItem) {
        debug!(id = %item.id, license = %item.license, price = item.price, "Adding item to cart");

        self.analytics.record(AnalyticsEvent::AddToCart {
            id: item.id.clone(),
            title: item.title.clone(),
            artist: item.artist.clone(),
            price: item.price,
            category: item.category,
            license: item.license,
        });
        self.pending_events.push(CartEvent::ItemAdded {
            id: item.id.clone(),
            title: item.title.clone(),
            category: item.category,
        });

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            *existing = item;
        } else {
            self.items.push(item);
        }

        self.commit();
    }

    /// Remove the item with the given id
    ///
    /// A no-op if no such item is in the cart.
    pub fn remove_from_cart(&mut self, id: &str) {
        let Some(position) = self.items.iter().position(|i| i.id == id) else {
            debug!(id = %id, "Ignoring removal of absent cart item");
            return;
        };

        let removed = self.items.remove(position);
        debug!(id = %removed.id, category = %removed.category, "Removed item from cart");

        self.pending_events.push(CartEvent::ItemRemoved {
            id: removed.id,
            title: removed.title,
            category: removed.category,
        });

        self.commit();
    }

    /// Empty the cart unconditionally
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.pending_events.push(CartEvent::CartCleared);
        self.commit();
    }

    /// Internal: recompute discounts and persist the committed item set
    ///
    /// A failed write is logged and swallowed; the in-memory state stays
    /// committed either way.
    fn commit(&mut self) {
        self.totals = pricing::recompute(&mut self.items);

        if let Err(e) = self.store.save(&self.items) {
            warn!(error = %e, "Failed to persist cart");
        }
    }

    // ===== Read-only state =====

    /// Current items, in insertion order
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// All derived totals
    pub fn totals(&self) -> CartTotals {
        self.totals
    }

    /// Number of items in the cart
    pub fn total_items(&self) -> usize {
        self.totals.total_items
    }

    /// Sum of prices before any discount
    pub fn original_total(&self) -> f64 {
        self.totals.original_total
    }

    /// Amount saved by the promotion
    pub fn bogo_discount(&self) -> f64 {
        self.totals.bogo_discount
    }

    /// Amount actually owed
    pub fn total_price(&self) -> f64 {
        self.totals.total_price
    }

    /// Check if the cart is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns the events emitted since the last drain; the UI renders
    /// notifications from them.
    pub fn drain_events(&mut self) -> Vec<CartEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }
}

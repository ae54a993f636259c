//! Beat Store - Cart Engine
//!
//! Shopping-cart state and pricing for the storefront.
//!
//! This crate provides:
//! - Cart item and totals types
//! - The BOGO discount pass ("buy one license, get the cheapest free",
//!   grouped per license tier, Exclusive licenses exempt)
//! - Durable persistence behind the [`CartStore`] trait (JSON file or
//!   in-memory)
//! - [`CartManager`], which commits every mutation (recompute + persist)
//!   before returning and buffers UI events
//!
//! # Architecture
//!
//! `beatstore-cart` is UI-agnostic: no framework reactivity, no globals.
//! The composition root builds one manager per application and hands it to
//! presentation code. Analytics go through the fire-and-forget
//! [`AnalyticsSink`](beatstore_core::analytics::AnalyticsSink) boundary.
//!
//! # Example
//!
//! ```rust
//! use beatstore_cart::{CartItem, CartManager, MemoryCartStore};
//! use beatstore_core::analytics::NullAnalytics;
//! use beatstore_core::types::{CatalogItem, LicenseOption, LicenseTier};
//! use std::sync::Arc;
//!
//! let mut cart = CartManager::new(
//!     Box::new(MemoryCartStore::new()),
//!     Arc::new(NullAnalytics),
//! );
//!
//! let beat = CatalogItem::new("beat-1", "Night Loop", "Producer X", 39.99)
//!     .with_license(LicenseOption::new(LicenseTier::Basic, 39.99));
//! let license = beat.license(LicenseTier::Basic).unwrap();
//!
//! cart.add_to_cart(CartItem::new(&beat, license));
//! assert_eq!(cart.total_items(), 1);
//! assert_eq!(cart.total_price(), 39.99);
//! ```

#![forbid(unsafe_code)]

mod error;
mod events;
mod manager;
pub mod pricing;
mod store;
mod types;

// Public exports
pub use error::{CartError, Result};
pub use events::CartEvent;
pub use manager::CartManager;
pub use store::{CartStore, JsonCartStore, MemoryCartStore};
pub use types::{CartItem, CartTotals};

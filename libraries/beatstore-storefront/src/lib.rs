//! Beat Store - Storefront Composition Root
//!
//! Builds the storefront's engines — one cart, one player — and hands them
//! to presentation code as an explicit dependency.
//!
//! # Example
//!
//! ```rust
//! use beatstore_storefront::Storefront;
//! use beatstore_core::analytics::NullAnalytics;
//! use beatstore_core::types::Track;
//! use std::sync::Arc;
//!
//! let mut storefront = Storefront::in_memory(Arc::new(NullAnalytics));
//!
//! storefront.player.set_queue(vec![
//!     Track::new("b1", "Night Loop", "Producer X"),
//! ]);
//! assert_eq!(storefront.player.current_track().unwrap().id, "b1");
//! assert!(storefront.cart.is_empty());
//! ```

#![forbid(unsafe_code)]

mod config;
mod storefront;

// Public exports
pub use config::StorefrontConfig;
pub use storefront::Storefront;

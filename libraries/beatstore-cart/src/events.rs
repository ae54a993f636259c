//! Cart events
//!
//! Event-based communication for UI synchronization. The manager buffers
//! events; the presentation layer drains them after each interaction and
//! renders notifications from them.

use beatstore_core::types::ItemCategory;
use serde::{Deserialize, Serialize};

/// Events emitted by the cart engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartEvent {
    /// An item was added (or replaced an existing entry with the same id)
    ItemAdded {
        /// Catalog item id
        id: String,
        /// Item title
        title: String,
        /// Beat or Pack
        category: ItemCategory,
    },

    /// An item was removed
    ItemRemoved {
        /// Catalog item id
        id: String,
        /// Item title
        title: String,
        /// Beat or Pack
        category: ItemCategory,
    },

    /// The cart was emptied
    CartCleared,
}

impl CartEvent {
    /// User-visible notification text for this event, if any
    ///
    /// Removal notices distinguish Beat from Pack.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::ItemAdded { title, .. } => Some(format!("{} added to cart", title)),
            Self::ItemRemoved {
                title, category, ..
            } => Some(format!("{} \"{}\" removed from cart", category, title)),
            Self::CartCleared => None,
        }
    }
}

//! Core types for the cart engine

use beatstore_core::types::{CatalogItem, ItemCategory, LicenseOption, LicenseTier};
use serde::{Deserialize, Serialize};

/// A catalog item selected for purchase
///
/// Snapshot of the catalog record plus the buyer's license choice. Identity
/// is the catalog id; a cart holds at most one entry per id.
///
/// `effective_price` is always either `price` or `0.0`, and is owned by the
/// discount pass — it is overwritten on every item-set change and never
/// taken from caller input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog item id
    pub id: String,

    /// Item title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Beat or Pack
    pub category: ItemCategory,

    /// Artwork URL for the cart listing
    pub artwork_url: String,

    /// Selected license tier
    pub license: LicenseTier,

    /// Price of the selected license
    pub price: f64,

    /// Price actually charged after promotions
    pub effective_price: f64,
}

impl CartItem {
    /// Snapshot a catalog item with the buyer's chosen license
    pub fn new(item: &CatalogItem, license: &LicenseOption) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            artist: item.artist.clone(),
            category: item.category,
            artwork_url: item.artwork_url.clone(),
            license: license.tier,
            price: license.price,
            effective_price: license.price,
        }
    }

    /// Whether the promotion made this line item free
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.effective_price == 0.0 && self.price > 0.0
    }
}

/// Derived cart totals, recomputed on every item-set change
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartTotals {
    /// Number of items in the cart
    pub total_items: usize,

    /// Sum of `price` across all items, pre-discount
    pub original_total: f64,

    /// `original_total` minus the discounted total
    pub bogo_discount: f64,

    /// Sum of `effective_price` across all items
    pub total_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_from_catalog() {
        let catalog = CatalogItem::new("b1", "Night Loop", "Producer X", 29.99)
            .with_category(ItemCategory::Pack)
            .with_license(LicenseOption::new(LicenseTier::Premium, 59.99));

        let license = catalog.license(LicenseTier::Premium).unwrap();
        let item = CartItem::new(&catalog, license);

        assert_eq!(item.id, "b1");
        assert_eq!(item.category, ItemCategory::Pack);
        assert_eq!(item.license, LicenseTier::Premium);
        assert_eq!(item.price, 59.99);
        assert_eq!(item.effective_price, 59.99);
        assert!(!item.is_free());
    }

    #[test]
    fn empty_totals_default_to_zero() {
        let totals = CartTotals::default();
        assert_eq!(totals.total_items, 0);
        assert_eq!(totals.original_total, 0.0);
        assert_eq!(totals.bogo_discount, 0.0);
        assert_eq!(totals.total_price, 0.0);
    }
}

//! Property-based tests for the cart engine
//!
//! Uses proptest to verify the discount invariants across many random
//! carts. Every property here mirrors a documented guarantee.

use beatstore_cart::{CartItem, CartManager, MemoryCartStore};
use beatstore_core::analytics::NullAnalytics;
use beatstore_core::types::{ItemCategory, LicenseTier};
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

// ===== Helpers =====

const TIERS: [LicenseTier; 5] = [
    LicenseTier::Basic,
    LicenseTier::Premium,
    LicenseTier::Professional,
    LicenseTier::Legacy,
    LicenseTier::Exclusive,
];

fn arbitrary_tier() -> impl Strategy<Value = LicenseTier> {
    (0usize..TIERS.len()).prop_map(|i| TIERS[i])
}

fn arbitrary_item() -> impl Strategy<Value = CartItem> {
    (
        "[a-z0-9]{1,8}",         // id (small space, so replacement happens)
        arbitrary_tier(),        // license
        (1u32..200_000),         // price in cents, kept strictly positive
        prop::bool::ANY,         // category
    )
        .prop_map(|(id, license, cents, is_pack)| CartItem {
            id,
            title: "Generated Beat".to_string(),
            artist: "Generated Artist".to_string(),
            category: if is_pack {
                ItemCategory::Pack
            } else {
                ItemCategory::Beat
            },
            artwork_url: String::new(),
            license,
            price: f64::from(cents) / 100.0,
            effective_price: 0.0, // deliberately stale; the engine must overwrite it
        })
}

fn arbitrary_items() -> impl Strategy<Value = Vec<CartItem>> {
    prop::collection::vec(arbitrary_item(), 0..30)
}

fn build_cart(items: Vec<CartItem>) -> CartManager {
    let mut cart = CartManager::new(Box::new(MemoryCartStore::new()), Arc::new(NullAnalytics));
    for item in items {
        cart.add_to_cart(item);
    }
    cart
}

// ===== Property Tests =====

proptest! {
    /// Property: every non-exclusive tier group frees exactly floor(n/2)
    /// items, and those are the cheapest ones in the group
    #[test]
    fn bogo_frees_the_cheapest_half_per_group(items in arbitrary_items()) {
        let cart = build_cart(items);

        let mut groups: HashMap<LicenseTier, Vec<&CartItem>> = HashMap::new();
        for item in cart.items() {
            if !item.license.is_exclusive() {
                groups.entry(item.license).or_default().push(item);
            }
        }

        for (tier, group) in groups {
            let free: Vec<f64> = group
                .iter()
                .filter(|i| i.effective_price == 0.0)
                .map(|i| i.price)
                .collect();

            let expected_count = group.len() / 2;
            prop_assert_eq!(
                free.len(),
                expected_count,
                "tier {} freed {} of {}",
                tier,
                free.len(),
                group.len()
            );

            // The freed prices are exactly the k smallest in the group
            let mut prices: Vec<f64> = group.iter().map(|i| i.price).collect();
            prices.sort_by(f64::total_cmp);
            let mut freed = free.clone();
            freed.sort_by(f64::total_cmp);
            prop_assert_eq!(&freed[..], &prices[..expected_count]);
        }
    }

    /// Property: Exclusive items always pay full price
    #[test]
    fn exclusive_items_always_pay_full_price(items in arbitrary_items()) {
        let cart = build_cart(items);

        for item in cart.items() {
            if item.license.is_exclusive() {
                prop_assert_eq!(item.effective_price, item.price);
            }
        }
    }

    /// Property: effective price is always the item's price or zero
    #[test]
    fn effective_price_is_price_or_zero(items in arbitrary_items()) {
        let cart = build_cart(items);

        for item in cart.items() {
            prop_assert!(
                item.effective_price == item.price || item.effective_price == 0.0,
                "effective {} for price {}",
                item.effective_price,
                item.price
            );
        }
    }

    /// Property: the totals identity holds after any sequence of adds
    #[test]
    fn totals_identity(items in arbitrary_items()) {
        let cart = build_cart(items);
        let totals = cart.totals();

        let sum_price: f64 = cart.items().iter().map(|i| i.price).sum();
        let sum_effective: f64 = cart.items().iter().map(|i| i.effective_price).sum();

        prop_assert!((totals.original_total - sum_price).abs() < 1e-9);
        prop_assert!((totals.total_price - sum_effective).abs() < 1e-9);
        prop_assert!(
            (totals.original_total - totals.total_price - totals.bogo_discount).abs() < 1e-9
        );
        prop_assert_eq!(totals.total_items, cart.items().len());
    }

    /// Property: cart ids stay unique no matter how adds collide
    #[test]
    fn ids_stay_unique(items in arbitrary_items()) {
        let cart = build_cart(items);

        let mut seen = std::collections::HashSet::new();
        for item in cart.items() {
            prop_assert!(seen.insert(item.id.clone()), "duplicate id {}", item.id);
        }
    }

    /// Property: removing an absent id changes nothing
    #[test]
    fn absent_removal_is_idempotent(items in arbitrary_items(), ghost in "[A-Z]{9}") {
        let mut cart = build_cart(items);
        let before_items = cart.items().to_vec();
        let before_totals = cart.totals();

        // Generated ids are lowercase, so the ghost id can never be present
        cart.remove_from_cart(&ghost);

        prop_assert_eq!(cart.items(), &before_items[..]);
        prop_assert_eq!(cart.totals(), before_totals);
    }

    /// Property: removing every item one by one always ends at zero totals
    #[test]
    fn draining_the_cart_zeroes_totals(items in arbitrary_items()) {
        let mut cart = build_cart(items);

        let ids: Vec<String> = cart.items().iter().map(|i| i.id.clone()).collect();
        for id in ids {
            cart.remove_from_cart(&id);
        }

        prop_assert!(cart.is_empty());
        prop_assert_eq!(cart.total_price(), 0.0);
        prop_assert_eq!(cart.original_total(), 0.0);
        prop_assert_eq!(cart.bogo_discount(), 0.0);
    }
}

//! BOGO discount computation
//!
//! "Buy One License, Get the Cheapest Free": within each license tier, the
//! cheapest half (rounded down) of the items become free. Exclusive-tier
//! items never participate.
//!
//! The pass rewrites `effective_price` in place and leaves the item list
//! order untouched; callers treat it as the single source of truth for
//! what each line item costs.

use crate::types::{CartItem, CartTotals};
use beatstore_core::types::LicenseTier;
use std::collections::HashMap;

/// Rewrite every item's `effective_price` and return the resulting totals
///
/// Grouping is by license tier; tiers are never mixed for discount
/// purposes. Within a group the items are ranked by ascending price with
/// ties broken by insertion order (stable sort), and the cheapest
/// `floor(n / 2)` become free.
pub fn recompute(items: &mut [CartItem]) -> CartTotals {
    let mut groups: HashMap<LicenseTier, Vec<usize>> = HashMap::new();

    for (index, item) in items.iter_mut().enumerate() {
        if item.license.is_exclusive() {
            // Exclusive licenses always pay full price
            item.effective_price = item.price;
        } else {
            groups.entry(item.license).or_default().push(index);
        }
    }

    for indices in groups.values() {
        // Stable sort: equal prices keep their insertion order
        let mut ranked = indices.clone();
        ranked.sort_by(|&a, &b| items[a].price.total_cmp(&items[b].price));

        let free_count = ranked.len() / 2;
        for (rank, &index) in ranked.iter().enumerate() {
            items[index].effective_price = if rank < free_count {
                0.0
            } else {
                items[index].price
            };
        }
    }

    totals(items)
}

/// Sum the current item set into [`CartTotals`]
///
/// Assumes `effective_price` is settled; [`recompute`] calls this after the
/// discount pass.
pub fn totals(items: &[CartItem]) -> CartTotals {
    let original_total: f64 = items.iter().map(|i| i.price).sum();
    let total_price: f64 = items.iter().map(|i| i.effective_price).sum();

    CartTotals {
        total_items: items.len(),
        original_total,
        bogo_discount: original_total - total_price,
        total_price,
    }
}

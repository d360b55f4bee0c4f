//! Filter Utilities
//!
//! Client-side name filtering for the items list.

use crate::models::Item;

/// Case-insensitive substring match on the item name
pub fn matches(item: &Item, needle_lower: &str) -> bool {
    item.name.to_lowercase().contains(needle_lower)
}

/// Keep every item whose name contains `filter` (ignoring case), in source order.
/// An empty filter keeps everything.
pub fn filter_items(items: &[Item], filter: &str) -> Vec<Item> {
    let needle = filter.to_lowercase();
    items
        .iter()
        .filter(|item| matches(item, &needle))
        .cloned()
        .collect()
}

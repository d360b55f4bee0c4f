//! Items List Context
//!
//! Shares the list's store with its child components via the Leptos Context API.

use leptos::prelude::*;

use crate::store::{store_set_filter, store_visible_items, ItemsListStateStoreFields, ItemsListStore};
use crate::models::Item;

/// Provided by `ItemsList` to its children
#[derive(Clone, Copy)]
pub struct ItemsListContext {
    pub store: ItemsListStore,
}

impl ItemsListContext {
    pub fn new(store: ItemsListStore) -> Self {
        Self { store }
    }

    /// Update the filter text (called on every input event)
    pub fn set_filter(&self, text: String) {
        store_set_filter(&self.store, text);
    }

    /// Current filter text (tracked)
    pub fn filter(&self) -> String {
        self.store.filter().get()
    }

    /// Items passing the current filter (tracked)
    pub fn visible_items(&self) -> Vec<Item> {
        store_visible_items(&self.store)
    }
}

/// Get the items list context
pub fn use_items_list() -> ItemsListContext {
    expect_context::<ItemsListContext>()
}

//! Items List State Store
//!
//! Component-scoped state for the items list, kept in a `reactive_stores`
//! store so the phase and the filter text are tracked independently.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::FetchError;
use crate::filter::filter_items;
use crate::models::Item;

/// Text shown while the initial fetch is in flight
pub const LOADING_TEXT: &str = "Loading items...";

/// Rendered error line for a stored error message
pub fn error_text(message: &str) -> String {
    format!("Error: {}", message)
}

/// Where the list is in its one-shot lifecycle.
///
/// Loading and error can never be set together: the phase is exactly one of these.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Loading,
    Failed(String),
    Ready(Vec<Item>),
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    /// Which screen this phase renders
    pub fn view(&self) -> ItemsListView {
        match self {
            Phase::Loading => ItemsListView::Loading(LOADING_TEXT.to_string()),
            Phase::Failed(message) => ItemsListView::Error(error_text(message)),
            Phase::Ready(_) => ItemsListView::Ready,
        }
    }
}

/// What the list shows, in precedence order loading > error > list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemsListView {
    /// Loading indicator only
    Loading(String),
    /// Error line only (already prefixed with `Error: `)
    Error(String),
    /// Filter input plus the filtered items
    Ready,
}

/// Items list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ItemsListState {
    /// Fetch lifecycle (holds the items once loaded)
    pub phase: Phase,
    /// Current filter text
    pub filter: String,
}

impl ItemsListState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type ItemsListStore = Store<ItemsListState>;

// ========================
// Store Helper Functions
// ========================

/// Only a loading list accepts a completion; settled phases are left untouched
/// (and unnotified).
fn accepts_completion(store: &ItemsListStore) -> bool {
    if store.phase().read_untracked().is_loading() {
        true
    } else {
        log::warn!("ignoring fetch completion: items list already settled");
        false
    }
}

/// Fetch succeeded: store the items and leave loading
pub fn store_fetch_succeeded(store: &ItemsListStore, items: Vec<Item>) -> bool {
    if !accepts_completion(store) {
        return false;
    }
    *store.phase().write() = Phase::Ready(items);
    true
}

/// Fetch failed: store the message and leave loading; items stay empty
pub fn store_fetch_failed(store: &ItemsListStore, error: FetchError) -> bool {
    if !accepts_completion(store) {
        return false;
    }
    *store.phase().write() = Phase::Failed(error.to_string());
    true
}

/// Route a fetch result to its transition. Returns false if the list had already settled.
pub fn store_apply_fetch(store: &ItemsListStore, result: Result<Vec<Item>, FetchError>) -> bool {
    match result {
        Ok(items) => store_fetch_succeeded(store, items),
        Err(e) => store_fetch_failed(store, e),
    }
}

/// User edited the filter input
pub fn store_set_filter(store: &ItemsListStore, text: String) {
    *store.filter().write() = text;
}

/// Current screen (tracks the phase only, so filter edits never rebuild it)
pub fn store_view(store: &ItemsListStore) -> ItemsListView {
    store.phase().read().view()
}

/// Items passing the current filter (tracks both phase and filter)
pub fn store_visible_items(store: &ItemsListStore) -> Vec<Item> {
    let filter = store.filter().get();
    match &*store.phase().read() {
        Phase::Ready(items) => filter_items(items, &filter),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fruit() -> Vec<Item> {
        vec![Item::new(1, "Apple"), Item::new(2, "Banana")]
    }

    fn new_store() -> ItemsListStore {
        Store::new(ItemsListState::new())
    }

    #[test]
    fn test_initial_state_is_loading_only() {
        let store = new_store();
        assert_eq!(store_view(&store), ItemsListView::Loading("Loading items...".to_string()));
        assert!(store_visible_items(&store).is_empty());
        assert_eq!(store.filter().get(), "");
    }

    #[test]
    fn test_loading_ignores_filter() {
        let store = new_store();
        store_set_filter(&store, "app".to_string());
        assert_eq!(store_view(&store), ItemsListView::Loading(LOADING_TEXT.to_string()));
        assert!(store_visible_items(&store).is_empty());
    }

    #[test]
    fn test_success_then_filter() {
        let store = new_store();
        assert!(store_apply_fetch(&store, Ok(fruit())));
        assert_eq!(store_view(&store), ItemsListView::Ready);
        assert_eq!(store_visible_items(&store), fruit());

        store_set_filter(&store, "app".to_string());
        assert_eq!(store_visible_items(&store), vec![Item::new(1, "Apple")]);

        store_set_filter(&store, "APP".to_string());
        assert_eq!(store_visible_items(&store), vec![Item::new(1, "Apple")]);

        store_set_filter(&store, String::new());
        assert_eq!(store_visible_items(&store), fruit());
    }

    #[test]
    fn test_http_failure_view() {
        let store = new_store();
        assert!(store_apply_fetch(
            &store,
            Err(FetchError::HttpStatus {
                status: 500,
                status_text: "Server Error".to_string(),
            })
        ));
        assert!(store_visible_items(&store).is_empty());
        assert_eq!(
            store_view(&store),
            ItemsListView::Error("Error: API returned status 500: Server Error".to_string())
        );
    }

    #[test]
    fn test_network_failure_without_message_view() {
        let store = new_store();
        store_fetch_failed(&store, FetchError::network(None));
        assert_eq!(
            store_view(&store),
            ItemsListView::Error("Error: An unknown error occurred.".to_string())
        );
    }

    #[test]
    fn test_error_view_ignores_filter() {
        let store = new_store();
        store_apply_fetch(&store, Err(FetchError::network(Some("boom".to_string()))));
        store_set_filter(&store, "x".to_string());
        assert_eq!(store_view(&store), ItemsListView::Error("Error: boom".to_string()));
    }

    #[test]
    fn test_only_first_completion_counts() {
        let store = new_store();
        assert!(store_fetch_succeeded(&store, fruit()));
        assert!(!store_fetch_failed(&store, FetchError::network(None)));
        assert!(!store_apply_fetch(&store, Ok(vec![])));
        assert_eq!(store_view(&store), ItemsListView::Ready);
        assert_eq!(store_visible_items(&store), fruit());

        let failed = new_store();
        assert!(store_apply_fetch(&failed, Err(FetchError::network(Some("down".to_string())))));
        assert!(!store_apply_fetch(&failed, Ok(fruit())));
        assert_eq!(store_view(&failed), ItemsListView::Error("Error: down".to_string()));
        assert!(store_visible_items(&failed).is_empty());
    }

    #[test]
    fn test_ignored_completion_does_not_notify_phase() {
        let store = new_store();
        let runs = Arc::new(AtomicUsize::new(0));
        let loading = Memo::new({
            let runs = Arc::clone(&runs);
            move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                store.phase().read().is_loading()
            }
        });

        assert!(loading.get());
        assert!(store_apply_fetch(&store, Ok(fruit())));
        assert!(!loading.get());
        let settled_runs = runs.load(Ordering::SeqCst);

        assert!(!store_apply_fetch(&store, Err(FetchError::network(None))));
        assert!(!loading.get());
        assert_eq!(runs.load(Ordering::SeqCst), settled_runs);
    }

    #[test]
    fn test_empty_success_is_ready() {
        let store = new_store();
        store_apply_fetch(&store, Ok(vec![]));
        assert_eq!(store_view(&store), ItemsListView::Ready);
        assert!(store_visible_items(&store).is_empty());
    }

    #[test]
    fn test_phase_view_precedence() {
        assert_eq!(Phase::Loading.view(), ItemsListView::Loading(LOADING_TEXT.to_string()));
        assert_eq!(
            Phase::Failed("x".to_string()).view(),
            ItemsListView::Error("Error: x".to_string())
        );
        assert_eq!(Phase::Ready(fruit()).view(), ItemsListView::Ready);
    }
}

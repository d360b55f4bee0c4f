//! Items List Component
//!
//! Fetches the items once on mount and shows loading, error, or the
//! filterable list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::HttpItemSource;
use crate::components::{FilterInput, ItemEntry};
use crate::config::ItemsListConfig;
use crate::context::{use_items_list, ItemsListContext};
use crate::store::{store_apply_fetch, store_view, ItemsListState, ItemsListView};
use crate::task::{load_items, CancelToken};

/// Root of the items list.
///
/// Props:
/// - endpoint: overrides the default `/api/resources` path
#[component]
pub fn ItemsList(#[prop(optional, into)] endpoint: Option<String>) -> impl IntoView {
    let config = ItemsListConfig::with_endpoint(endpoint);
    let store = Store::new(ItemsListState::new());
    provide_context(ItemsListContext::new(store));

    // Late completions after teardown must not touch the discarded store
    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    // Load once on mount; the component body runs once per instance
    let source = HttpItemSource::new(&config);
    log::debug!("fetching items from {}", source.endpoint());
    spawn_local(async move {
        if let Some(result) = load_items(&source, &token).await {
            store_apply_fetch(&store, result);
        }
    });

    move || match store_view(&store) {
        ItemsListView::Loading(text) => view! { <p>{text}</p> }.into_any(),
        ItemsListView::Error(text) => view! {
            <p class="text-red-500">{text}</p>
        }.into_any(),
        ItemsListView::Ready => view! { <ItemsPanel /> }.into_any(),
    }
}

/// Interactive view: filter input followed by the filtered list
#[component]
fn ItemsPanel() -> impl IntoView {
    let ctx = use_items_list();

    view! {
        <main class="flex min-h-screen flex-col items-center justify-center p-8">
            <div class="w-full max-w-md bg-white rounded-md shadow-md p-6">
                <h1 class="text-black text-2xl font-bold mb-4">"My Items"</h1>

                <FilterInput />

                <ul class="space-y-3">
                    <For
                        each=move || ctx.visible_items()
                        key=|item| item.id
                        children=|item| view! { <ItemEntry item=item /> }
                    />
                </ul>
            </div>
        </main>
    }
}

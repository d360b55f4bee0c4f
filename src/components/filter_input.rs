//! Filter Input Component

use leptos::prelude::*;

use crate::context::use_items_list;

/// Text input bound to the list's filter; every keystroke updates it immediately
#[component]
pub fn FilterInput() -> impl IntoView {
    let ctx = use_items_list();

    view! {
        <div class="mb-4">
            <label for="filterInput" class="block mb-2 font-semibold text-gray-700">
                "Filter by name:"
            </label>
            <input
                id="filterInput"
                type="text"
                class="text-black border border-gray-300 rounded-md p-2 w-full"
                placeholder="Type a name..."
                prop:value=move || ctx.filter()
                on:input=move |ev| ctx.set_filter(event_target_value(&ev))
            />
        </div>
    }
}

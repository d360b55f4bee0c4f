//! Item Entry Component

use leptos::prelude::*;

use crate::models::Item;

/// One row of the list: id and name
#[component]
pub fn ItemEntry(item: Item) -> impl IntoView {
    view! {
        <li class="border border-gray-200 p-3 rounded-md shadow-sm bg-gray-50">
            <div class="font-semibold mb-1">"ID: " {item.id}</div>
            <div class="text-gray-700">"Name: " {item.name}</div>
        </li>
    }
}

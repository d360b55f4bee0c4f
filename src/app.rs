//! Items List App
//!
//! Top-level component mounted to the page body.

use leptos::prelude::*;

use crate::components::ItemsList;

#[component]
pub fn App() -> impl IntoView {
    view! { <ItemsList /> }
}

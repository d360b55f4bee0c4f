//! UI Components
//!
//! Leptos components for the items list.

mod items_list;
mod filter_input;
mod item_entry;

pub use items_list::ItemsList;
pub use filter_input::FilterInput;
pub use item_entry::ItemEntry;

//! Items List Frontend Entry Point

mod models;
mod error;
mod config;
mod logger;
mod filter;
mod store;
mod commands;
mod task;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(logger::default_level());
    mount_to_body(App);
}

//! Records SPA Entry Point

mod api;
mod app;
mod components;
mod error;
mod models;
mod routes;
mod store;
mod views;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(level);
    mount_to_body(App);
}

//! # client
//!
//! Leptos + WASM frontend for the database assistant chat page.
//!
//! This crate contains pages, components, per-region page state, the wire
//! types shared with the host server, and the page controller that turns
//! button clicks and chat submissions into `/connect_env` and `/chat` calls.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

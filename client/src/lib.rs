//! # client
//!
//! Leptos frontend for LangCompare, the side-by-side syntax playground.
//!
//! The server renders the page with the `ssr` feature and the browser bundle
//! hydrates it with the `hydrate` feature. Content, filtering and formatting
//! come from the `catalog` crate; this crate only composes views and holds
//! per-card UI state.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// WASM entrypoint: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}

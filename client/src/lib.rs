//! # client
//!
//! Leptos + WASM frontend for the product landing page.
//!
//! Components render the page and forward DOM events to the `motion` engine
//! through the page host (`util::host`), which executes the engine's actions
//! against the document: Web Animations, timers, the intersection observer,
//! and the particle canvas frame loop.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}

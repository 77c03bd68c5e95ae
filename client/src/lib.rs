//! # bb84-client
//!
//! Leptos + WASM frontend for the BB84 eavesdropper-detection console.
//!
//! Collects simulation parameters, posts them to the external `/api/bb84`
//! backend, and reveals the returned result in timed, typed stages. The
//! simulation itself is not part of this crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

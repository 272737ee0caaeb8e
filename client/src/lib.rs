//! # client
//!
//! Leptos frontend for the stars admin: the public star browser, the
//! dashboard star manager and the REST client for `/api/stars`.
//!
//! Compiled with `ssr` into the server binary for rendering and with
//! `hydrate` to WASM for the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

//! # portal-client
//!
//! Leptos + WASM front end for the member portal, backed by a
//! Directus-style identity provider for authentication.
//!
//! This crate contains pages, application state, the identity provider
//! client, route guards, and cookie-backed session persistence. Everything
//! that needs a browser environment (HTTP, `document.cookie`, the wasm
//! entry point) is gated behind the `hydrate` feature with inert stubs on
//! the server side.

pub mod app;
pub mod config;
pub mod guards;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}

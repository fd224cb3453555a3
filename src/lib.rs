//! # accounts-client
//!
//! Leptos + WASM frontend for the user-account management application.
//! Replaces the React + Vite `client/` with a Rust-native UI layer.
//!
//! This crate contains pages, components, the session state container,
//! network types, and the authenticated HTTP wrapper that attaches the
//! bearer token to every request and forces logout on 401 responses.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}

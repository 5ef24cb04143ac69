//! # client
//!
//! Leptos + WASM frontend for BalanceBite.
//!
//! This crate contains the app shell, routed pages, presentational widgets,
//! the session/toast services shared through context, and the typed HTTP
//! wrappers around the backend and identity provider. Wire types live in the
//! `schema` crate.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

//! # client
//!
//! Leptos + WASM front end for autoDF, the invoicing and estimate product.
//!
//! This crate contains the pages, the navigation bar, auth/session state and
//! the REST client for the backend API. The server crate renders it with SSR
//! and the `hydrate` build takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

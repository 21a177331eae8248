//! # client
//!
//! Leptos + WASM frontend for the exam portal.
//!
//! This crate contains pages, view components, notification and session
//! state, and the browser implementations of the `catalog` data-service and
//! auth contracts. Course and test-series data live in the hosted backend;
//! the browser talks to it directly using the coordinates the server
//! publishes at `/api/config`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

//! # shipments-client
//!
//! Leptos + WASM frontend for the shipment tracking dashboard.
//!
//! ARCHITECTURE
//! ============
//! The `shipments` crate owns records, the store, and the filtered view.
//! This crate wires them to the browser: a `localStorage` backend, the
//! dashboard page, and its components. Build with the `csr` feature for the
//! browser; without it every DOM step is a no-op so the state and utility
//! modules test natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}

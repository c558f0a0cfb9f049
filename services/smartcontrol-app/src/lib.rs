//! SmartControl+ - Leptos frontend
//!
//! Login and dashboard pages for the TV remote. The pages render the state
//! machines from `smartcontrol-core` and carry out their effects in the
//! browser.

pub mod api;
pub mod app;
pub mod components;
pub mod driver;
pub mod storage;

pub use app::App;

/// Client-side entry point for the WASM bundle
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    leptos::mount::mount_to_body(App);
}

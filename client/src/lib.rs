//! # catalog-client
//!
//! Leptos + WASM front end for the library catalog: search, book detail and
//! the floor-plan overlay driven by the `shelfmap` crate.
//!
//! Browser-only code sits behind the `csr` feature. Without it the crate
//! builds natively so pure helpers (endpoints, config parsing, labels) are
//! testable with `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::ClientConfig::current();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    log::info!("catalog client starting, api base {}", config.api_base);
    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config.clone()/> });
}

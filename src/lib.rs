//! # christful-client
//!
//! Leptos + WASM browser client for the Christful social network: feed,
//! reels, communities, groups, chat, notifications, and profiles, all backed
//! by a remote JSON REST API.
//!
//! ARCHITECTURE
//! ============
//! - `state::session`: bearer credential and display fields in durable
//!   browser storage, injected into everything that needs it.
//! - `net`: one `ApiClient` for all HTTP, over a swappable `Transport`.
//! - `state::resource` + `util::use_api`: keyed, deduplicated cache of GET
//!   resources that pages subscribe to.
//! - `actions`: validated mutations that report which cached resources they
//!   made stale and where to navigate next.
//! - `pages` / `components`: Leptos views.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: install the panic hook and console logger, then
/// mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}

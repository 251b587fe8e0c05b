//! # client
//!
//! Leptos frontend for the storefront: catalog, cart and checkout, account
//! pages and the admin back-office.
//!
//! Every page is declared in [`routes`]. Pages that require a signed-in user
//! or an admin role are wrapped in a navigation guard ([`guard`]) that reads
//! the persisted session through an injected
//! [`util::session_store::SessionProvider`].

pub mod app;
pub mod components;
pub mod guard;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}

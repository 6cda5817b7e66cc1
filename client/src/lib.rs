//! # client
//!
//! Leptos + WASM frontend for the account portal: landing page, login and
//! signup forms, the terminal view, and account settings.
//!
//! All account logic lives in the `account` crate. This crate supplies the
//! browser side of it (`fetch`, `localStorage`, timers) and the views.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    util::theme::apply(util::theme::read_preference());
    leptos::mount::hydrate_body(app::App);
}

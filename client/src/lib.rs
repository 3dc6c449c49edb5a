//! # authdesk
//!
//! Leptos + WASM client for a token-based auth backend: login, registration,
//! and a guarded home view.
//!
//! This crate contains pages, the toast component, session/notice state, the
//! REST adapter, and the route guard. The `authdesk-server` binary renders it
//! on the server (`ssr`); the browser bundle hydrates it (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}

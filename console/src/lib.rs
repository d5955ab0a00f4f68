//! # console
//!
//! Leptos + WASM administration console for an SCM server.
//!
//! The crate composes the fixed-region screen layout, runs the startup
//! session gate, and hosts content tabs. Pure state lives in `state`, the
//! gate driver and REST calls in `net`, and the Leptos views in `pages` and
//! `components`. The `scm-console` host binary renders it with the `ssr`
//! feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

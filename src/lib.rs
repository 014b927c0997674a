//! # metrictracker-ui
//!
//! Leptos + WASM front-end for the PR-review-comment analytics dashboard.
//! Users sign in against a hosted identity provider, pick a team and a date
//! range, trigger a backend sync of PR review comments, and view the
//! aggregated metrics payload.
//!
//! This crate contains pages, components, application state, the date-range
//! resolver, and the network layer for the auth provider and the metrics
//! backend. Browser-only paths are gated behind the `hydrate` feature so the
//! crate and its tests build natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

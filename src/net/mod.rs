//! Network layer: auth gateway and metrics backend client.
//!
//! DESIGN
//! ======
//! Browser-only calls are gated behind the `hydrate` feature with SSR/native
//! stubs, so the crate (and its tests) build without a browser. Every call
//! returns a `Result`; error display text is what the UI shows.

pub mod api;
pub mod auth;
pub mod types;

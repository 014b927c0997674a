//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `teams`, `metrics`, `date_range`) so
//! individual components can depend on small focused models. Each signal has
//! exactly one writing flow; everyone else reads.

pub mod auth;
pub mod date_range;
pub mod metrics;
pub mod teams;

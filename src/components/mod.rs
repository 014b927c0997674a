//! Reusable UI components shared across pages.

pub mod error_banner;
pub mod logout_button;
pub mod metrics_section;
pub mod session_guard;

//! Build-time configuration for external endpoints.
//!
//! The app runs in the browser, so there is no runtime environment to read;
//! overrides are baked in at compile time via `option_env!` and fall back to
//! the deployed defaults.

/// Base URL of the metrics backend.
#[must_use]
pub const fn api_base() -> &'static str {
    match option_env!("METRICTRACKER_API_BASE") {
        Some(url) => url,
        None => "https://metrictracker-be.onrender.com",
    }
}

/// Base URL of the identity provider project.
///
/// Empty when unset; the auth gateway reports a configuration error rather
/// than issuing requests to a bogus host.
#[must_use]
pub const fn auth_url() -> &'static str {
    match option_env!("METRICTRACKER_AUTH_URL") {
        Some(url) => url,
        None => "",
    }
}

/// Public (anon) API key for the identity provider.
#[must_use]
pub const fn auth_api_key() -> &'static str {
    match option_env!("METRICTRACKER_AUTH_KEY") {
        Some(key) => key,
        None => "",
    }
}

/// Team id used as the default comparison baseline in metrics views.
#[must_use]
pub const fn platform_team_id() -> &'static str {
    match option_env!("METRICTRACKER_PLATFORM_TEAM") {
        Some(id) => id,
        None => "f8ebb6da-71a3-4799-baee-3d56375b4a38",
    }
}

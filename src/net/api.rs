//! REST client for the metrics backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR)
//! and native test builds: stubs returning errors, since these endpoints are
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Fetch and sync failures are returned to the caller as [`ApiError`] values
//! and end up in the dashboard error banner; they are never swallowed and
//! never propagate as an unhandled rejection into the render path.

#![allow(clippy::unused_async)]

#[allow(unused_imports)]
use crate::config;
use crate::net::types::{Team, TeamMetricsResult};
use crate::state::date_range::RangeParams;

/// Failure modes of the metrics backend client.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the backend.
    #[error("could not reach the metrics service: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("metrics service returned status {0}")]
    Status(u16),
    /// The backend answered with a body we could not decode.
    #[error("unexpected response from the metrics service: {0}")]
    Decode(String),
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(
    url: &str,
    query: &[(String, String)],
) -> Result<T, ApiError> {
    let pairs: Vec<(&str, &str)> = query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let resp = gloo_net::http::Request::get(url)
        .query(pairs)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the team list for the picker.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn fetch_teams() -> Result<Vec<Team>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/prs/teams", config::api_base());
        get_json(&url, &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch aggregated metrics for one team over the resolved date range.
///
/// The payload is opaque to this layer and handed to presentation unchanged.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn fetch_team_metrics(
    team_id: &str,
    params: &RangeParams,
) -> Result<TeamMetricsResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/prs/team/{team_id}", config::api_base());
        get_json(&url, &params.query_pairs()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (team_id, params);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Ask the backend to re-sync PR review comments for a team.
///
/// One-shot command; the response body is ignored. The backend makes no
/// idempotency promise, so callers must not issue overlapping syncs.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the backend reports a
/// non-success status.
pub async fn refresh_team_prs(team_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct RefreshBody<'a> {
            team_id: &'a str,
        }

        let url = format!("{}/prs/refresh-team-prs", config::api_base());
        let resp = gloo_net::http::Request::post(&url)
            .json(&RefreshBody { team_id })
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(ApiError::Status(resp.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = team_id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

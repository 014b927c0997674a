#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
}

/// An authenticated session issued by the identity provider.
///
/// Mirrored into [`crate::state::auth::AuthState`] at app load and persisted
/// to localStorage so a page reload does not force a fresh sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub access_token: String,
    /// Unix timestamp (seconds) after which the token is no longer valid.
    pub expires_at: i64,
}

impl Session {
    /// Whether the session is expired at `now` (unix seconds).
    #[must_use]
    pub const fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}

/// A team summary for the dashboard team picker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    /// Timestamp of the last backend sync for this team, if it ever synced.
    #[serde(default)]
    pub last_sync: Option<String>,
}

/// Aggregated metrics payload for one team.
///
/// The backend owns this shape; the UI passes it through to presentation
/// unmodified, so it stays an opaque JSON value here.
pub type TeamMetricsResult = serde_json::Value;

//! Auth gateway over the hosted identity provider's REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR)
//! and native test builds: stubs returning errors/`None`, since sign-in is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here panics or leaves a rejection unhandled: every provider or
//! transport failure is mapped to an [`AuthError`] whose display text is what
//! the UI shows inline.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

#[allow(unused_imports)]
use crate::config;
use crate::net::types::Session;
use crate::util::storage;

/// Failure modes of the auth gateway.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The provider rejected the request and reported a message.
    #[error("{0}")]
    Provider(String),
    /// The request never reached the provider.
    #[error("could not reach the identity provider: {0}")]
    Network(String),
    /// The provider answered with a body we could not decode.
    #[error("unexpected response from the identity provider: {0}")]
    Decode(String),
    /// No identity provider URL/key was baked into this build.
    #[error("identity provider is not configured")]
    NotConfigured,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_at: Option<i64>,
    expires_in: Option<i64>,
    user: crate::net::types::User,
}

/// Sign in with email and password.
///
/// On success the session is persisted to localStorage so a reload restores
/// it without a fresh sign-in.
///
/// # Errors
///
/// Returns an [`AuthError`] when the provider rejects the credentials, the
/// request fails, or the response cannot be decoded.
#[allow(clippy::unused_async)]
pub async fn sign_in(email: &str, password: &str) -> Result<Session, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let base = config::auth_url();
        let key = config::auth_api_key();
        if base.is_empty() || key.is_empty() {
            return Err(AuthError::NotConfigured);
        }

        let url = format!("{base}/auth/v1/token?grant_type=password");
        let resp = gloo_net::http::Request::post(&url)
            .header("apikey", key)
            .json(&PasswordGrant { email, password })
            .map_err(|e| AuthError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::Provider(provider_error_message(&body, status)));
        }

        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        let session = Session {
            expires_at: token
                .expires_at
                .or_else(|| token.expires_in.map(|ttl| now_ts() + ttl))
                .unwrap_or_else(|| now_ts() + 3600),
            access_token: token.access_token,
            user: token.user,
        };
        persist_session(&session);
        Ok(session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Sign out at the provider and drop the persisted session.
///
/// Local state is cleared even when the provider call fails, so a dead
/// network cannot trap the user in a signed-in shell.
///
/// # Errors
///
/// Returns an [`AuthError`] when the provider rejects the logout request.
#[allow(clippy::unused_async)]
pub async fn sign_out(access_token: &str) -> Result<(), AuthError> {
    clear_session();

    #[cfg(feature = "hydrate")]
    {
        let base = config::auth_url();
        let key = config::auth_api_key();
        if base.is_empty() || key.is_empty() {
            return Err(AuthError::NotConfigured);
        }

        let url = format!("{base}/auth/v1/logout");
        let resp = gloo_net::http::Request::post(&url)
            .header("apikey", key)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if resp.ok() {
            Ok(())
        } else {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Err(AuthError::Provider(provider_error_message(&body, status)))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Restore the persisted session, discarding it when expired.
#[must_use]
pub fn stored_session() -> Option<Session> {
    let raw = storage::read(storage::SESSION_KEY)?;
    let session = decode_session(&raw, now_ts());
    if session.is_none() {
        storage::remove(storage::SESSION_KEY);
    }
    session
}

/// Decode a persisted session, rejecting malformed JSON and expired tokens.
fn decode_session(raw: &str, now: i64) -> Option<Session> {
    let session: Session = serde_json::from_str(raw).ok()?;
    if session.is_expired(now) {
        return None;
    }
    Some(session)
}

/// Current user from the persisted session, if any.
#[must_use]
pub fn current_user() -> Option<crate::net::types::User> {
    stored_session().map(|session| session.user)
}

/// Persist a session to localStorage.
pub fn persist_session(session: &Session) {
    if let Ok(raw) = serde_json::to_string(session) {
        storage::write(storage::SESSION_KEY, &raw);
    }
}

/// Drop the persisted session.
pub fn clear_session() {
    storage::remove(storage::SESSION_KEY);
}

/// Extract a human-readable message from a provider error body.
///
/// Supabase-style bodies carry `error_description` (OAuth grant errors) or
/// `msg`/`message` (GoTrue errors); anything else falls back to an
/// operation-neutral status line, since both sign-in and sign-out route
/// through here.
#[must_use]
pub fn provider_error_message(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["error_description", "msg", "message"] {
            if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_owned();
                }
            }
        }
    }
    format!("request failed (status {status})")
}

fn now_ts() -> i64 {
    chrono::Utc::now().timestamp()
}

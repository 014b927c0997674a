#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Session, User};

/// Authentication state shared via context from the composition root.
///
/// Written only by the session-restore effect and the login/logout flows;
/// everything else reads. `loading` is true until the initial restore
/// settles, so guards do not redirect before the answer is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub session: Option<Session>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            session: None,
            loading: true,
            error: None,
        }
    }
}

impl AuthState {
    /// State after a successful sign-in or session restore.
    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self {
            user: Some(session.user.clone()),
            session: Some(session),
            loading: false,
            error: None,
        }
    }

    /// State after sign-out, expiry, or a failed restore (fail closed).
    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            user: None,
            session: None,
            loading: false,
            error: None,
        }
    }
}

/// Whether a protected route must bounce to `/login`.
///
/// Fail closed: any settled state without a user redirects. While the initial
/// restore is still loading the guard holds its fire.
#[must_use]
pub const fn should_redirect(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

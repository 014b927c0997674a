use super::*;

fn session() -> Session {
    Session {
        user: User {
            id: "u-1".to_owned(),
            email: "dev@example.com".to_owned(),
        },
        access_token: "tok".to_owned(),
        expires_at: i64::MAX,
    }
}

// =============================================================
// AuthState lifecycle
// =============================================================

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.session.is_none());
}

#[test]
fn signed_in_mirrors_session_user() {
    let state = AuthState::signed_in(session());
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-1"));
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn signed_out_clears_everything() {
    let state = AuthState::signed_out();
    assert!(state.user.is_none());
    assert!(state.session.is_none());
    assert!(!state.loading);
}

// =============================================================
// Session guard decision
// =============================================================

#[test]
fn guard_redirects_when_settled_without_user() {
    assert!(should_redirect(&AuthState::signed_out()));
}

#[test]
fn guard_allows_authenticated_user() {
    assert!(!should_redirect(&AuthState::signed_in(session())));
}

#[test]
fn guard_waits_while_restore_is_loading() {
    assert!(!should_redirect(&AuthState::default()));
}

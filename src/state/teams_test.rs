use super::*;

fn teams() -> TeamsState {
    TeamsState {
        items: vec![
            Team {
                id: "t-1".to_owned(),
                name: "Platform".to_owned(),
                last_sync: Some("2024-03-01T10:00:00Z".to_owned()),
            },
            Team {
                id: "t-2".to_owned(),
                name: "Checkout".to_owned(),
                last_sync: None,
            },
        ],
        loading: false,
    }
}

#[test]
fn teams_state_defaults() {
    let state = TeamsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn last_sync_for_synced_team() {
    assert_eq!(
        teams().last_sync_for("t-1"),
        Some("2024-03-01T10:00:00Z")
    );
}

#[test]
fn last_sync_for_never_synced_team() {
    assert_eq!(teams().last_sync_for("t-2"), None);
}

#[test]
fn last_sync_for_unknown_team() {
    assert_eq!(teams().last_sync_for("t-404"), None);
}

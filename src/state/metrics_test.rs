use super::*;
use crate::state::date_range::{DateRangeMode, DateRangeState, resolve_params};
use serde_json::json;

// =============================================================
// Superseding fetches: last-dispatched wins
// =============================================================

#[test]
fn current_generation_response_is_applied() {
    let mut state = MetricsState::default();
    let generation = state.begin_fetch();
    assert!(state.loading);
    assert!(state.apply_success(generation, json!([{"developer": "ann"}])));
    assert!(!state.loading);
    assert_eq!(state.data, Some(json!([{"developer": "ann"}])));
}

#[test]
fn stale_success_is_dropped() {
    let mut state = MetricsState::default();
    let stale = state.begin_fetch();
    let current = state.begin_fetch();
    assert!(!state.apply_success(stale, json!("old")));
    assert!(state.data.is_none());
    assert!(state.apply_success(current, json!("new")));
    assert_eq!(state.data, Some(json!("new")));
}

#[test]
fn stale_failure_does_not_clobber_newer_fetch() {
    let mut state = MetricsState::default();
    let stale = state.begin_fetch();
    let current = state.begin_fetch();
    assert!(!state.apply_failure(stale, "boom".to_owned()));
    assert!(state.error.is_none());
    assert!(state.loading);
    assert!(state.apply_success(current, json!([])));
}

#[test]
fn failure_keeps_prior_data_and_surfaces_error() {
    let mut state = MetricsState::default();
    let first = state.begin_fetch();
    assert!(state.apply_success(first, json!([1, 2, 3])));

    let second = state.begin_fetch();
    assert!(state.apply_failure(second, "metrics service returned status 502".to_owned()));
    assert_eq!(state.data, Some(json!([1, 2, 3])));
    assert_eq!(
        state.error.as_deref(),
        Some("metrics service returned status 502")
    );
}

#[test]
fn success_clears_stale_error_banner() {
    let mut state = MetricsState::default();
    let first = state.begin_fetch();
    assert!(state.apply_failure(first, "boom".to_owned()));

    let second = state.begin_fetch();
    assert!(state.apply_success(second, json!([])));
    assert!(state.error.is_none());
}

// =============================================================
// Baseline comparison rounds
// =============================================================

#[test]
fn baseline_applied_for_current_generation() {
    let mut state = MetricsState::default();
    let generation = state.begin_fetch();
    assert!(state.apply_baseline(generation, json!([{"developer": "platform"}])));
    assert_eq!(state.baseline, Some(json!([{"developer": "platform"}])));
}

#[test]
fn stale_baseline_is_dropped() {
    let mut state = MetricsState::default();
    let stale = state.begin_fetch();
    let current = state.begin_fetch();
    assert!(!state.apply_baseline(stale, json!("old")));
    assert!(state.baseline.is_none());
    assert!(state.apply_baseline(current, json!("new")));
}

#[test]
fn new_fetch_round_clears_prior_baseline() {
    let mut state = MetricsState::default();
    let first = state.begin_fetch();
    assert!(state.apply_baseline(first, json!([])));

    // A round with no comparison (platform team selected) must not keep
    // showing the previous round's baseline.
    let _second = state.begin_fetch();
    assert!(state.baseline.is_none());
}

// =============================================================
// Sync guard: one sync at a time
// =============================================================

#[test]
fn second_sync_is_not_issued_while_in_flight() {
    let mut state = MetricsState::default();
    assert!(state.begin_sync());
    assert!(!state.begin_sync());
    state.finish_sync();
    assert!(state.begin_sync());
}

// =============================================================
// Fetch dispatch decision
// =============================================================

fn quarter_resolved() -> Result<Option<RangeParams>, crate::state::date_range::ValidationError> {
    resolve_params(&DateRangeState {
        mode: DateRangeMode::Quarter,
        quarter: 2,
        year: 2024,
        ..DateRangeState::default()
    })
}

#[test]
fn no_fetch_without_selected_team() {
    assert!(fetch_plan(None, &quarter_resolved()).is_none());
    assert!(fetch_plan(Some(""), &quarter_resolved()).is_none());
}

#[test]
fn no_fetch_on_validation_error() {
    let resolved = resolve_params(&DateRangeState {
        mode: DateRangeMode::Custom,
        start_date: "2024-03-10".to_owned(),
        end_date: "2024-03-01".to_owned(),
        ..DateRangeState::default()
    });
    assert!(fetch_plan(Some("t-1"), &resolved).is_none());
}

#[test]
fn no_fetch_while_custom_range_incomplete() {
    let resolved = resolve_params(&DateRangeState {
        mode: DateRangeMode::Custom,
        start_date: "2024-03-01".to_owned(),
        ..DateRangeState::default()
    });
    assert!(fetch_plan(Some("t-1"), &resolved).is_none());
}

#[test]
fn changing_team_yields_one_new_plan() {
    let resolved = quarter_resolved();
    let before = fetch_plan(Some("t-1"), &resolved);
    let after = fetch_plan(Some("t-2"), &resolved);
    let (before, after) = (before.unwrap(), after.unwrap());
    assert_ne!(before, after);
    assert_eq!(after.0, "t-2");
    // Same range params; only the team changed, so exactly one fetch key
    // differs per selection change.
    assert_eq!(before.1, after.1);
}

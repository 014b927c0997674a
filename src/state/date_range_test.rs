use super::*;

fn custom(start: &str, end: &str) -> DateRangeState {
    DateRangeState {
        mode: DateRangeMode::Custom,
        start_date: start.to_owned(),
        end_date: end.to_owned(),
        ..DateRangeState::default()
    }
}

// =============================================================
// Quarter mode: no validation path
// =============================================================

#[test]
fn quarter_mode_always_resolves() {
    for quarter in 1..=4 {
        let state = DateRangeState {
            mode: DateRangeMode::Quarter,
            quarter,
            year: 2024,
            ..DateRangeState::default()
        };
        assert_eq!(
            resolve_params(&state),
            Ok(Some(RangeParams::Quarter {
                quarter,
                year: 2024
            }))
        );
    }
}

#[test]
fn quarter_params_query_pairs() {
    let params = RangeParams::Quarter {
        quarter: 3,
        year: 2024,
    };
    assert_eq!(
        params.query_pairs(),
        vec![
            ("quarter".to_owned(), "3".to_owned()),
            ("year".to_owned(), "2024".to_owned()),
        ]
    );
}

// =============================================================
// Custom mode: required fields and ordering
// =============================================================

#[test]
fn custom_mode_with_missing_dates_suppresses_fetch() {
    assert_eq!(resolve_params(&custom("", "")), Ok(None));
    assert_eq!(resolve_params(&custom("2024-03-01", "")), Ok(None));
    assert_eq!(resolve_params(&custom("", "2024-03-10")), Ok(None));
}

#[test]
fn custom_mode_end_before_start_is_rejected() {
    let result = resolve_params(&custom("2024-03-10", "2024-03-01"));
    assert_eq!(result, Err(ValidationError::EndBeforeStart));
}

#[test]
fn end_before_start_message_is_field_level_text() {
    assert_eq!(
        ValidationError::EndBeforeStart.to_string(),
        "End date must be after start date"
    );
}

#[test]
fn custom_mode_equal_dates_are_valid() {
    let result = resolve_params(&custom("2024-03-10", "2024-03-10"));
    assert_eq!(
        result,
        Ok(Some(RangeParams::Custom {
            start_date: "2024-03-10".to_owned(),
            end_date: "2024-03-10".to_owned(),
        }))
    );
}

#[test]
fn custom_mode_ordering_compares_dates_not_strings() {
    // Month boundary: lexicographic and chronological order agree for ISO
    // dates, but a bad parse must not silently pass.
    let result = resolve_params(&custom("2024-02-28", "2024-03-01"));
    assert!(matches!(result, Ok(Some(RangeParams::Custom { .. }))));
}

#[test]
fn custom_mode_rejects_garbage_dates() {
    let result = resolve_params(&custom("yesterday", "2024-03-01"));
    assert_eq!(
        result,
        Err(ValidationError::BadDate("yesterday".to_owned()))
    );
}

#[test]
fn custom_params_query_pairs() {
    let params = RangeParams::Custom {
        start_date: "2024-01-01".to_owned(),
        end_date: "2024-02-01".to_owned(),
    };
    assert_eq!(
        params.query_pairs(),
        vec![
            ("start_date".to_owned(), "2024-01-01".to_owned()),
            ("end_date".to_owned(), "2024-02-01".to_owned()),
        ]
    );
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_current_quarter() {
    let state = DateRangeState::default();
    assert_eq!(state.mode, DateRangeMode::Quarter);
    assert!((1..=4).contains(&state.quarter));
    assert!(state.year >= 2024);
    assert!(state.start_date.is_empty());
    assert!(state.end_date.is_empty());
}

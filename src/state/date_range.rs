#[cfg(test)]
#[path = "date_range_test.rs"]
mod date_range_test;

use chrono::{Datelike, NaiveDate, Utc};

/// How the analysis window is expressed: a calendar quarter or explicit dates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateRangeMode {
    #[default]
    Quarter,
    Custom,
}

/// Raw date-range form state as bound to the dashboard controls.
///
/// Quarter and year come from bounded inputs; custom dates are ISO
/// `YYYY-MM-DD` strings straight from `<input type="date">` and may be empty
/// while the user is still filling the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRangeState {
    pub mode: DateRangeMode,
    pub quarter: u8,
    pub year: i32,
    pub start_date: String,
    pub end_date: String,
}

impl Default for DateRangeState {
    fn default() -> Self {
        Self {
            mode: DateRangeMode::Quarter,
            quarter: current_quarter(),
            year: current_year(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

/// Validated query parameters consumed by the team data fetcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeParams {
    Quarter { quarter: u8, year: i32 },
    Custom { start_date: String, end_date: String },
}

impl RangeParams {
    /// Query-string pairs for the metrics endpoint.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match self {
            Self::Quarter { quarter, year } => vec![
                ("quarter".to_owned(), quarter.to_string()),
                ("year".to_owned(), year.to_string()),
            ],
            Self::Custom {
                start_date,
                end_date,
            } => vec![
                ("start_date".to_owned(), start_date.clone()),
                ("end_date".to_owned(), end_date.clone()),
            ],
        }
    }
}

/// Field-level validation failure for the custom date range.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("End date must be after start date")]
    EndBeforeStart,
    #[error("Invalid date: {0}")]
    BadDate(String),
}

/// Resolve form state into fetch parameters.
///
/// Pure: the dashboard re-invokes this from an effect whenever mode, quarter,
/// year, or either date changes.
///
/// - Quarter mode is always valid (inputs are bounded controls).
/// - Custom mode with either date empty resolves to `Ok(None)`: both dates
///   are required before a fetch is issued, but an incomplete form is not an
///   error.
/// - Custom mode with both dates present validates ordering.
///
/// # Errors
///
/// Returns a [`ValidationError`] when a custom date fails to parse or the end
/// date precedes the start date.
pub fn resolve_params(state: &DateRangeState) -> Result<Option<RangeParams>, ValidationError> {
    match state.mode {
        DateRangeMode::Quarter => Ok(Some(RangeParams::Quarter {
            quarter: state.quarter,
            year: state.year,
        })),
        DateRangeMode::Custom => {
            if state.start_date.is_empty() || state.end_date.is_empty() {
                return Ok(None);
            }
            let start = parse_date(&state.start_date)?;
            let end = parse_date(&state.end_date)?;
            if end < start {
                return Err(ValidationError::EndBeforeStart);
            }
            Ok(Some(RangeParams::Custom {
                start_date: state.start_date.clone(),
                end_date: state.end_date.clone(),
            }))
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::BadDate(raw.to_owned()))
}

/// The current calendar quarter, 1..=4.
#[must_use]
pub fn current_quarter() -> u8 {
    #[allow(clippy::cast_possible_truncation)]
    let quarter = (Utc::now().month0() / 3 + 1) as u8;
    quarter
}

/// The current calendar year.
#[must_use]
pub fn current_year() -> i32 {
    Utc::now().year()
}

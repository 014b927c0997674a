#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use crate::net::types::TeamMetricsResult;
use crate::state::date_range::{RangeParams, ValidationError};

/// Shared metrics state: current payload, fetch progress, and the sync guard.
///
/// CONCURRENCY
/// ===========
/// Overlapping fetches are not cancelled at the transport; instead every
/// dispatch bumps `generation` and a response is applied only while its
/// generation is still current. Last-dispatched wins, never last-to-resolve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsState {
    pub data: Option<TeamMetricsResult>,
    /// Metrics for the platform baseline team, fetched alongside `data` so
    /// the selected team can be compared against it.
    pub baseline: Option<TeamMetricsResult>,
    pub loading: bool,
    pub syncing: bool,
    /// Fetch or sync failure surfaced in the dashboard banner.
    pub error: Option<String>,
    generation: u64,
}

impl MetricsState {
    /// Start a new fetch round, superseding any in-flight one. The baseline
    /// is cleared so a round without a comparison cannot show a stale one.
    ///
    /// Returns the generation token the responses must present to be applied.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.baseline = None;
        self.generation
    }

    /// Apply a successful fetch. Stale generations are dropped.
    pub fn apply_success(&mut self, generation: u64, data: TeamMetricsResult) -> bool {
        if generation != self.generation {
            return false;
        }
        self.data = Some(data);
        self.loading = false;
        self.error = None;
        true
    }

    /// Apply the baseline team's metrics for a fetch round.
    /// Stale generations are dropped.
    pub fn apply_baseline(&mut self, generation: u64, data: TeamMetricsResult) -> bool {
        if generation != self.generation {
            return false;
        }
        self.baseline = Some(data);
        true
    }

    /// Record a fetch failure, leaving prior data untouched.
    /// Stale generations are dropped.
    pub fn apply_failure(&mut self, generation: u64, message: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }

    /// Arm the sync guard. Returns false while a sync is already in flight,
    /// in which case the caller must not issue the command.
    pub const fn begin_sync(&mut self) -> bool {
        if self.syncing {
            return false;
        }
        self.syncing = true;
        true
    }

    /// Re-arm the sync guard once the sync flow (and its refetches) finished.
    pub const fn finish_sync(&mut self) {
        self.syncing = false;
    }
}

/// Decide whether the dashboard effect should dispatch a fetch.
///
/// A fetch needs a selected team and a fully resolved date range; a
/// validation error or an incomplete custom range suppresses it.
#[must_use]
pub fn fetch_plan(
    selected_team: Option<&str>,
    resolved: &Result<Option<RangeParams>, ValidationError>,
) -> Option<(String, RangeParams)> {
    let team = selected_team?.trim();
    if team.is_empty() {
        return None;
    }
    match resolved {
        Ok(Some(params)) => Some((team.to_owned(), params.clone())),
        Ok(None) | Err(_) => None,
    }
}

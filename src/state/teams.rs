#[cfg(test)]
#[path = "teams_test.rs"]
mod teams_test;

use crate::net::types::Team;

/// Shared team-list state for the dashboard picker.
///
/// Read-only data from the backend; refreshed after a sync completes so the
/// `last_sync` stamp stays honest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamsState {
    pub items: Vec<Team>,
    pub loading: bool,
}

impl TeamsState {
    /// Last-sync stamp for a team id, if the team exists and ever synced.
    #[must_use]
    pub fn last_sync_for(&self, team_id: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|team| team.id == team_id)
            .and_then(|team| team.last_sync.as_deref())
    }
}

//! Thin localStorage wrapper.
//!
//! Two keys are persisted: the last-selected team id (read at load, written
//! on every selection change) and the serialized auth session. Requires a
//! browser environment; off-browser the readers return `None` and the
//! writers are no-ops.

/// localStorage key for the last-selected team id.
pub const SELECTED_TEAM_KEY: &str = "metrictracker_selected_team";

/// localStorage key for the persisted auth session.
pub const SESSION_KEY: &str = "metrictracker_session";

/// Read a value from localStorage.
#[must_use]
pub fn read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a value to localStorage.
pub fn write(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a key from localStorage.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Read the persisted team id, if any.
#[must_use]
pub fn read_selected_team() -> Option<String> {
    read(SELECTED_TEAM_KEY).filter(|id| !id.is_empty())
}

/// Persist the selected team id.
pub fn write_selected_team(team_id: &str) {
    write(SELECTED_TEAM_KEY, team_id);
}

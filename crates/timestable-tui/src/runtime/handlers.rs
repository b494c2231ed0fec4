//! Effect handlers that touch the filesystem.

use timestable_core::config::{Config, paths};

/// Saves the border toggle. Failures are logged, never shown: the TUI keeps
/// the in-memory value either way.
pub fn persist_show_borders(show: bool) {
    match Config::save_show_borders(show) {
        Ok(()) => {
            tracing::debug!(show, path = %paths::config_path().display(), "saved show_borders");
        }
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "failed to save show_borders");
        }
    }
}

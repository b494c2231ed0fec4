//! Runtime execution modes.
//!
//! - `snapshot`: plain-text table on stdout (always available)
//! - `tui`: full-screen interactive table (optional feature)

use anyhow::Result;
use timestable_core::Coord;
use timestable_core::config::Config;

/// Exit status after Ctrl+C / SIGTERM ended the interactive session.
pub const INTERRUPTED_EXIT_CODE: u8 = 130;

/// Runs the interactive table. Returns `Ok(true)` when a signal ended it.
#[cfg(feature = "tui")]
pub fn run_interactive(config: &Config, initial: Coord) -> Result<bool> {
    timestable_tui::run_interactive(config, initial)?;
    Ok(timestable_tui::interrupt::is_interrupted())
}

#[cfg(not(feature = "tui"))]
pub fn run_interactive(_config: &Config, _initial: Coord) -> Result<bool> {
    anyhow::bail!(
        "TUI support is disabled in this build (feature \"tui\").\n\
         Use `timestable snapshot --select ROW,COLUMN` instead."
    );
}

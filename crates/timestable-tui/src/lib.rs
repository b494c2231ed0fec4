//! Full-screen TUI for the timestable multiplication grid.

pub mod effects;
pub mod events;
pub mod features;
pub mod interrupt;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::{statusline, table};
pub use runtime::TuiRuntime;
use timestable_core::Coord;
use timestable_core::config::Config;

/// Runs the interactive table until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal or terminal I/O fails.
pub fn run_interactive(config: &Config, initial: Coord) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "Interactive mode requires a terminal.\n\
             Use `timestable snapshot --select ROW,COLUMN` for plain-text output."
        );
    }

    tracing::info!(selection = %initial, "starting interactive table");
    let mut runtime = TuiRuntime::new(config.clone(), initial)?;
    runtime.run()?;
    tracing::info!(selection = %runtime.state.table.selection(), "interactive table closed");

    Ok(())
}

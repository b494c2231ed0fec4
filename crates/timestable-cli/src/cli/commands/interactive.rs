//! Interactive (full-screen) command handler.

use std::process::ExitCode;

use anyhow::Result;
use timestable_core::Coord;
use timestable_core::config::Config;

use crate::modes;

pub fn run(config: &Config, selection: Option<Coord>) -> Result<ExitCode> {
    let initial = selection.unwrap_or(Coord::ORIGIN);
    if modes::run_interactive(config, initial)? {
        return Ok(ExitCode::from(modes::INTERRUPTED_EXIT_CODE));
    }
    Ok(ExitCode::SUCCESS)
}

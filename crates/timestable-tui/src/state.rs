//! Application state composition.
//!
//! ```text
//! AppState
//! ├── table: TableState          (selection store, hit map)
//! ├── status_line: StatusLineAccumulator
//! ├── theme: Theme               (resolved from config)
//! └── flags: should_quit, show_borders, show_debug_status
//! ```
//!
//! Only the reducer (`update`) mutates this; render functions read it.

use timestable_core::Coord;
use timestable_core::config::Config;

use crate::statusline::StatusLineAccumulator;
use crate::table::{TableState, Theme};

/// Top-level TUI state.
#[allow(clippy::struct_excessive_bools)]
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Selection and last-render cell positions.
    pub table: TableState,
    /// Frame-rate and redraw counters.
    pub status_line: StatusLineAccumulator,
    pub theme: Theme,
    /// Outline the rectangle from the origin to the selection.
    pub show_borders: bool,
    pub show_debug_status: bool,
}

impl AppState {
    pub fn new(config: &Config, initial: Coord) -> Self {
        Self {
            should_quit: false,
            table: TableState::new(initial),
            status_line: StatusLineAccumulator::new(),
            theme: Theme::from_config(&config.theme),
            show_borders: config.show_borders,
            show_debug_status: config.show_debug_status,
        }
    }
}

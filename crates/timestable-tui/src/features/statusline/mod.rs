//! Status line feature slice.
//!
//! The main status line shows the current product and key hints. The debug
//! line (Ctrl+D) shows the frame rate and how many full redraws happened.
//!
//! ## Module Structure
//!
//! - `state.rs`: `StatusLineAccumulator` (mutable counters) and `StatusLine` (snapshot)
//! - `render.rs`: status and debug line rendering

mod render;
mod state;

pub use render::{render_debug_status_line, render_status_line};
pub use state::{StatusLine, StatusLineAccumulator};

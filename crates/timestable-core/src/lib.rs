//! Core model for the timestable multiplication grid.
//!
//! Everything in this crate is terminal-agnostic: the grid coordinates, the
//! selection store, the per-cell classifier, configuration and the plain-text
//! snapshot renderer.

pub mod classify;
pub mod config;
pub mod grid;
pub mod highlight;
pub mod snapshot;

pub use classify::{Borders, VisualRole, borders, classify, classify_grid};
pub use grid::{Coord, CoordParseError, GRID_SIZE};
pub use highlight::{Direction, SelectionStore};

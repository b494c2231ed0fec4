//! Multiplication table feature slice.
//!
//! ## Module Structure
//!
//! - `state.rs`: `TableState` (selection store + hit map from the last render)
//! - `update.rs`: key/mouse → selection mutation
//! - `render.rs`: grid widget (cells, role styles, outline)
//! - `style.rs`: theme resolution from config

mod render;
mod state;
mod style;
mod update;

pub use render::{TABLE_HEIGHT, TABLE_WIDTH, TableWidget};
pub use state::{HitMap, TableState};
pub use style::Theme;
pub use update::{direction_for_key, handle_key, handle_mouse};

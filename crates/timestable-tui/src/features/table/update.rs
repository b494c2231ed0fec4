//! Input translation for the table.
//!
//! Each handler applies at most one selection mutation and reports whether
//! the selection changed.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use timestable_core::Direction;

use super::state::TableState;

/// Arrow keys map to steps; every other key is not a table key.
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Applies an arrow key to the selection.
pub fn handle_key(table: &mut TableState, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match direction_for_key(key.code) {
        Some(direction) => table.store_mut().step(direction),
        None => false,
    }
}

/// Applies a left click on a drawn cell to the selection.
pub fn handle_mouse(table: &mut TableState, mouse: MouseEvent) -> bool {
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return false;
    };
    let Some(cell) = table.hit_map.cell_at(mouse.column, mouse.row) else {
        return false;
    };
    table.store_mut().set_selection(cell)
}

//! Selection (highlight) state store.
//!
//! Owns the single selected coordinate and is the only way to change it.
//! Every mutation keeps both axes inside `1..=GRID_SIZE`.
//!
//! ## Change notification
//!
//! Each effective change bumps `revision`. Renderers remember the revision
//! they last drew and redraw when it differs, so observers never need a
//! callback registered on the store.

use crate::grid::{Coord, GRID_SIZE};

/// Direction of a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Holds the current selection.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    selection: Coord,
    revision: u64,
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStore {
    /// Creates a store with the selection at the origin.
    pub fn new() -> Self {
        Self::with_selection(Coord::ORIGIN)
    }

    /// Creates a store with a given starting selection.
    pub fn with_selection(selection: Coord) -> Self {
        Self {
            selection,
            revision: 0,
        }
    }

    /// The currently selected coordinate.
    pub fn selection(&self) -> Coord {
        self.selection
    }

    /// Counter bumped on every change of the selection.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Moves the selection one cell, clamped to the grid.
    ///
    /// Returns `true` if the selection changed. At the edge of the grid the
    /// step is absorbed and nothing changes.
    pub fn step(&mut self, direction: Direction) -> bool {
        let Coord { row, column } = self.selection;
        let next = match direction {
            Direction::Up => Coord::new(row.saturating_sub(1).max(1), column),
            Direction::Down => Coord::new((row + 1).min(GRID_SIZE), column),
            Direction::Left => Coord::new(row, column.saturating_sub(1).max(1)),
            Direction::Right => Coord::new(row, (column + 1).min(GRID_SIZE)),
        };
        self.replace(next)
    }

    pub fn step_up(&mut self) -> bool {
        self.step(Direction::Up)
    }

    pub fn step_down(&mut self) -> bool {
        self.step(Direction::Down)
    }

    pub fn step_left(&mut self) -> bool {
        self.step(Direction::Left)
    }

    pub fn step_right(&mut self) -> bool {
        self.step(Direction::Right)
    }

    /// Applies a click on `clicked`.
    ///
    /// Interior cells set both axes, the origin resets, and header cells
    /// only adjust their own axis. The checks run in exactly this order.
    pub fn set_selection(&mut self, clicked: Coord) -> bool {
        let next = if clicked.is_interior() {
            clicked
        } else if clicked.is_origin() {
            Coord::ORIGIN
        } else if clicked.is_column_header() {
            Coord::new(self.selection.row, clicked.column)
        } else {
            Coord::new(clicked.row, self.selection.column)
        };
        self.replace(next)
    }

    /// Puts the selection back at the origin.
    pub fn reset(&mut self) -> bool {
        self.replace(Coord::ORIGIN)
    }

    fn replace(&mut self, next: Coord) -> bool {
        if next == self.selection {
            return false;
        }
        tracing::debug!(from = %self.selection, to = %next, "selection changed");
        self.selection = next;
        self.revision = self.revision.wrapping_add(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::cells;

    #[test]
    fn test_initial_selection_is_origin() {
        let store = SelectionStore::new();
        assert_eq!(store.selection(), Coord::ORIGIN);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_steps_move_one_axis() {
        let mut store = SelectionStore::with_selection(Coord::new(5, 5));
        assert!(store.step_right());
        assert_eq!(store.selection(), Coord::new(5, 6));
        assert!(store.step_down());
        assert_eq!(store.selection(), Coord::new(6, 6));
        assert!(store.step_left());
        assert_eq!(store.selection(), Coord::new(6, 5));
        assert!(store.step_up());
        assert_eq!(store.selection(), Coord::new(5, 5));
        assert_eq!(store.revision(), 4);
    }

    #[test]
    fn test_step_right_clamps_at_last_column() {
        let mut store = SelectionStore::with_selection(Coord::new(3, 12));
        for _ in 0..5 {
            assert!(!store.step_right());
        }
        assert_eq!(store.selection(), Coord::new(3, 12));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_step_up_and_left_clamp_at_origin() {
        let mut store = SelectionStore::new();
        assert!(!store.step_up());
        assert!(!store.step_left());
        assert_eq!(store.selection(), Coord::ORIGIN);
    }

    #[test]
    fn test_steps_never_leave_grid() {
        let directions = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        for start in cells() {
            for direction in directions {
                let mut store = SelectionStore::with_selection(start);
                for _ in 0..15 {
                    store.step(direction);
                    let Coord { row, column } = store.selection();
                    assert!((1..=GRID_SIZE).contains(&row));
                    assert!((1..=GRID_SIZE).contains(&column));
                }
                let end = store.selection();
                match direction {
                    Direction::Up | Direction::Down => assert_eq!(end.column, start.column),
                    Direction::Left | Direction::Right => assert_eq!(end.row, start.row),
                }
            }
        }
    }

    #[test]
    fn test_click_interior_sets_both_axes() {
        let mut store = SelectionStore::with_selection(Coord::new(9, 2));
        assert!(store.set_selection(Coord::new(5, 7)));
        assert_eq!(store.selection(), Coord::new(5, 7));
    }

    #[test]
    fn test_click_origin_resets() {
        for start in [Coord::new(5, 7), Coord::new(1, 12), Coord::new(12, 1)] {
            let mut store = SelectionStore::with_selection(start);
            store.set_selection(Coord::ORIGIN);
            assert_eq!(store.selection(), Coord::ORIGIN);
        }
    }

    #[test]
    fn test_click_column_header_keeps_row() {
        let mut store = SelectionStore::with_selection(Coord::new(5, 7));
        store.set_selection(Coord::new(1, 3));
        assert_eq!(store.selection(), Coord::new(5, 3));
    }

    #[test]
    fn test_click_row_header_keeps_column() {
        let mut store = SelectionStore::with_selection(Coord::new(5, 7));
        assert!(!store.set_selection(Coord::new(5, 1)));
        assert_eq!(store.selection(), Coord::new(5, 7));

        assert!(store.set_selection(Coord::new(9, 1)));
        assert_eq!(store.selection(), Coord::new(9, 7));
    }

    #[test]
    fn test_header_click_from_origin_moves_single_axis() {
        let mut store = SelectionStore::new();
        store.set_selection(Coord::new(1, 6));
        assert_eq!(store.selection(), Coord::new(1, 6));
        store.set_selection(Coord::new(4, 1));
        assert_eq!(store.selection(), Coord::new(4, 6));
    }

    #[test]
    fn test_reset_only_bumps_revision_when_moved() {
        let mut store = SelectionStore::new();
        assert!(!store.reset());
        store.step_down();
        assert!(store.reset());
        assert_eq!(store.selection(), Coord::ORIGIN);
        assert_eq!(store.revision(), 2);
    }
}

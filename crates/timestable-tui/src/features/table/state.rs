//! Table state: the selection store and where each cell was last drawn.

use std::cell::RefCell;

use ratatui::layout::{Position, Rect};
use timestable_core::{Coord, SelectionStore};

/// Screen rectangles of the cells drawn by the last render.
///
/// Rebuilt on each render. Uses `RefCell` so the render pass can record
/// positions while only holding `&AppState`.
#[derive(Debug, Default)]
pub struct HitMap {
    cells: RefCell<Vec<(Rect, Coord)>>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&self) {
        self.cells.borrow_mut().clear();
    }

    pub fn push(&self, area: Rect, cell: Coord) {
        self.cells.borrow_mut().push((area, cell));
    }

    pub fn len(&self) -> usize {
        self.cells.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.borrow().is_empty()
    }

    /// Returns the cell drawn at screen position (`column`, `row`), if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        let position = Position::new(column, row);
        self.cells
            .borrow()
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, cell)| *cell)
    }
}

/// State of the table slice.
#[derive(Debug, Default)]
pub struct TableState {
    store: SelectionStore,
    pub hit_map: HitMap,
}

impl TableState {
    pub fn new(initial: Coord) -> Self {
        Self {
            store: SelectionStore::with_selection(initial),
            hit_map: HitMap::new(),
        }
    }

    pub fn selection(&self) -> Coord {
        self.store.selection()
    }

    /// Revision of the selection; changes whenever the table must be redrawn.
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub(crate) fn store_mut(&mut self) -> &mut SelectionStore {
        &mut self.store
    }
}

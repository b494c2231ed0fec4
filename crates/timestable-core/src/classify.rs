//! Per-cell visual classification.
//!
//! Both functions here are pure and are called once per cell on every
//! render. They only look at the cell and the current selection.

use crate::grid::{Coord, GRID_SIZE, rows};

/// Visual role of a cell relative to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualRole {
    /// The selected cell itself.
    Product,
    /// A header cell that takes part in the current product.
    Multiplier,
    /// An interior cell inside the active rectangle.
    Span,
    /// Everything else, including header cells past the selection.
    #[default]
    Unmarked,
}

/// Classifies `cell` against `selection`. First matching rule wins.
pub fn classify(cell: Coord, selection: Coord) -> VisualRole {
    if cell == selection {
        return VisualRole::Product;
    }

    if cell.column == 1 {
        return if cell.row <= selection.row {
            VisualRole::Multiplier
        } else {
            VisualRole::Unmarked
        };
    }

    if cell.row == 1 {
        return if cell.column <= selection.column {
            VisualRole::Multiplier
        } else {
            VisualRole::Unmarked
        };
    }

    if cell.row > 1
        && cell.column > 1
        && cell.row <= selection.row
        && cell.column <= selection.column
    {
        return VisualRole::Span;
    }

    VisualRole::Unmarked
}

/// Roles for the whole grid, indexed `[row - 1][column - 1]`.
pub fn classify_grid(selection: Coord) -> [[VisualRole; GRID_SIZE as usize]; GRID_SIZE as usize] {
    let mut grid = [[VisualRole::Unmarked; GRID_SIZE as usize]; GRID_SIZE as usize];
    for row in rows() {
        for column in rows() {
            grid[usize::from(row - 1)][usize::from(column - 1)] =
                classify(Coord::new(row, column), selection);
        }
    }
    grid
}

/// Edges a cell draws to outline the rectangle from the origin to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Borders {
    pub top: bool,
    pub left: bool,
    pub bottom: bool,
    pub right: bool,
}

/// Computes the outline edges for `cell`. Independent of [`classify`].
pub fn borders(cell: Coord, selection: Coord) -> Borders {
    Borders {
        top: cell.row == 1 && cell.column <= selection.column,
        left: cell.column == 1 && cell.row <= selection.row,
        bottom: cell.row == selection.row && cell.column <= selection.column,
        right: cell.column == selection.column && cell.row <= selection.row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::cells;

    #[test]
    fn test_selected_cell_is_always_product() {
        for selection in cells() {
            assert_eq!(classify(selection, selection), VisualRole::Product);
        }
    }

    #[test]
    fn test_initial_selection_scenario() {
        let selection = Coord::ORIGIN;
        assert_eq!(classify(Coord::ORIGIN, selection), VisualRole::Product);
        assert_eq!(classify(Coord::new(3, 4), selection), VisualRole::Unmarked);
        assert_eq!(classify(Coord::new(1, 2), selection), VisualRole::Unmarked);
        assert_eq!(classify(Coord::new(2, 1), selection), VisualRole::Unmarked);
    }

    #[test]
    fn test_interior_selection_scenario() {
        let selection = Coord::new(5, 7);
        assert_eq!(classify(Coord::new(5, 7), selection), VisualRole::Product);
        assert_eq!(classify(Coord::new(1, 7), selection), VisualRole::Multiplier);
        assert_eq!(classify(Coord::new(5, 1), selection), VisualRole::Multiplier);
        assert_eq!(classify(Coord::new(3, 4), selection), VisualRole::Span);
        assert_eq!(classify(Coord::new(8, 3), selection), VisualRole::Unmarked);
    }

    #[test]
    fn test_headers_past_selection_are_unmarked() {
        let selection = Coord::new(5, 7);
        assert_eq!(classify(Coord::new(6, 1), selection), VisualRole::Unmarked);
        assert_eq!(classify(Coord::new(1, 8), selection), VisualRole::Unmarked);
        assert_eq!(classify(Coord::ORIGIN, selection), VisualRole::Multiplier);
    }

    #[test]
    fn test_header_selection_has_no_span() {
        let selection = Coord::new(1, 6);
        let grid = classify_grid(selection);
        assert!(grid.iter().flatten().all(|role| *role != VisualRole::Span));
        assert_eq!(grid[0][5], VisualRole::Product);
        assert_eq!(grid[0][0], VisualRole::Multiplier);
        assert_eq!(grid[1][0], VisualRole::Unmarked);
    }

    #[test]
    fn test_role_counts_match_rectangle() {
        let selection = Coord::new(4, 6);
        let grid = classify_grid(selection);
        let count = |role| grid.iter().flatten().filter(|r| **r == role).count();

        assert_eq!(count(VisualRole::Product), 1);
        // 4 row headers + 6 column headers, the origin counted once.
        assert_eq!(count(VisualRole::Multiplier), 9);
        assert_eq!(count(VisualRole::Span), 3 * 5 - 1);
    }

    #[test]
    fn test_borders_outline_rectangle() {
        let selection = Coord::new(5, 7);
        assert_eq!(
            borders(Coord::ORIGIN, selection),
            Borders {
                top: true,
                left: true,
                bottom: false,
                right: false,
            }
        );
        assert_eq!(
            borders(Coord::new(5, 7), selection),
            Borders {
                top: false,
                left: false,
                bottom: true,
                right: true,
            }
        );
        assert!(borders(Coord::new(5, 3), selection).bottom);
        assert!(borders(Coord::new(2, 7), selection).right);
        assert_eq!(borders(Coord::new(3, 4), selection), Borders::default());
        assert_eq!(borders(Coord::new(6, 7), selection), Borders::default());
        assert_eq!(borders(Coord::new(1, 8), selection), Borders::default());
    }

    #[test]
    fn test_borders_for_origin_selection_box_single_cell() {
        let b = borders(Coord::ORIGIN, Coord::ORIGIN);
        assert!(b.top && b.left && b.bottom && b.right);
    }
}

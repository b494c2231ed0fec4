//! Grid coordinates.
//!
//! The table is a fixed 12×12 matrix, 1-indexed on both axes. Row 1 and
//! column 1 are the header (multiplier) cells.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of rows and columns in the table.
pub const GRID_SIZE: u8 = 12;

/// A (row, column) pair, both in `1..=GRID_SIZE`.
///
/// Used both as a cell identity and as the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: u8,
    pub column: u8,
}

impl Coord {
    /// The top-left cell, also the initial selection.
    pub const ORIGIN: Coord = Coord { row: 1, column: 1 };

    /// Creates a coordinate from grid-derived values.
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// The value shown in this cell.
    pub fn product(self) -> u16 {
        u16::from(self.row) * u16::from(self.column)
    }

    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }

    /// Header cell in the first row (excluding the origin).
    pub fn is_column_header(self) -> bool {
        self.row == 1 && self.column > 1
    }

    /// Header cell in the first column (excluding the origin).
    pub fn is_row_header(self) -> bool {
        self.column == 1 && self.row > 1
    }

    pub fn is_interior(self) -> bool {
        self.row > 1 && self.column > 1
    }
}

impl Default for Coord {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

/// Error returned when parsing a `Coord` from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordParseError {
    #[error("expected ROW,COLUMN (e.g. 5,7), got '{0}'")]
    Format(String),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{axis} {value} is outside 1..={max}", max = GRID_SIZE)]
    OutOfRange { axis: &'static str, value: u32 },
}

impl FromStr for Coord {
    type Err = CoordParseError;

    /// Parses `"ROW,COLUMN"` (or `"ROWxCOLUMN"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (row, column) = trimmed
            .split_once(',')
            .or_else(|| trimmed.split_once(['x', 'X']))
            .ok_or_else(|| CoordParseError::Format(s.to_string()))?;

        let row = parse_axis("row", row)?;
        let column = parse_axis("column", column)?;
        Ok(Self { row, column })
    }
}

fn parse_axis(axis: &'static str, raw: &str) -> Result<u8, CoordParseError> {
    let raw = raw.trim();
    let value: u32 = raw
        .parse()
        .map_err(|_| CoordParseError::NotANumber(raw.to_string()))?;
    u8::try_from(value)
        .ok()
        .filter(|v| in_range(*v))
        .ok_or(CoordParseError::OutOfRange { axis, value })
}

fn in_range(value: u8) -> bool {
    (1..=GRID_SIZE).contains(&value)
}

/// Row (or column) indices of the grid, in order.
pub fn rows() -> impl Iterator<Item = u8> {
    1..=GRID_SIZE
}

/// Every cell of the grid in row-major order.
pub fn cells() -> impl Iterator<Item = Coord> {
    rows().flat_map(|row| rows().map(move |column| Coord::new(row, column)))
}

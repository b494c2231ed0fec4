//! Plain-text rendering of the table for a given selection.
//!
//! Used by `timestable snapshot` and handy in tests. Each cell is the product
//! prefixed by a role marker:
//!
//! | marker | role       |
//! |--------|------------|
//! | `*`    | Product    |
//! | `+`    | Multiplier |
//! | `.`    | Span       |
//! | ` `    | Unmarked   |
//!
//! With borders enabled, `|` and `-` trace the outline edges of each cell.

use crate::classify::{VisualRole, borders, classify, classify_grid};
use crate::grid::{Coord, rows};

/// Width of the product column (largest value is 144).
const NUMBER_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotOptions {
    pub borders: bool,
}

/// Marker character for a role.
pub fn marker(role: VisualRole) -> char {
    match role {
        VisualRole::Product => '*',
        VisualRole::Multiplier => '+',
        VisualRole::Span => '.',
        VisualRole::Unmarked => ' ',
    }
}

/// Renders the whole table. Every line ends with `\n`.
pub fn render(selection: Coord, options: SnapshotOptions) -> String {
    if options.borders {
        render_with_borders(selection)
    } else {
        render_plain(selection)
    }
}

fn cell_text(cell: Coord, role: VisualRole) -> String {
    format!(
        "{}{:>width$}",
        marker(role),
        cell.product(),
        width = NUMBER_WIDTH
    )
}

fn render_plain(selection: Coord) -> String {
    let roles = classify_grid(selection);
    let mut out = String::new();
    for row in rows() {
        let line: Vec<String> = rows()
            .map(|column| {
                let role = roles[usize::from(row - 1)][usize::from(column - 1)];
                cell_text(Coord::new(row, column), role)
            })
            .collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
    out
}

fn render_with_borders(selection: Coord) -> String {
    let edge = "-".repeat(NUMBER_WIDTH + 3);
    let blank = " ".repeat(NUMBER_WIDTH + 3);
    let mut out = String::new();

    let top: String = rows()
        .map(|column| {
            if borders(Coord::new(1, column), selection).top {
                edge.as_str()
            } else {
                blank.as_str()
            }
        })
        .collect();
    push_line(&mut out, &top);

    for row in rows() {
        let mut line = String::new();
        let mut under = String::new();
        for column in rows() {
            let cell = Coord::new(row, column);
            let b = borders(cell, selection);
            line.push(if b.left { '|' } else { ' ' });
            line.push_str(&cell_text(cell, classify(cell, selection)));
            line.push(if b.right { '|' } else { ' ' });
            under.push_str(if b.bottom { &edge } else { &blank });
        }
        push_line(&mut out, &line);
        push_line(&mut out, &under);
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

//! Grid widget.
//!
//! Layout with the selection at (2,2), one character per column:
//!
//! ```text
//! ┌───────────┐          <- separator line 0
//! │   1     2 │   3      <- row 1
//! │           │          <- separator line 1
//! │   2     4 │   6      <- row 2
//! └───────────┘          <- separator line 2
//! ```
//!
//! Each cell is `CELL_WIDTH` wide with a one-column gap on its left, and rows
//! are interleaved with separator lines. Outline segments are drawn in the
//! gaps and separators only where `borders()` asks for an edge.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};
use timestable_core::{Coord, GRID_SIZE, borders, classify};

use super::state::HitMap;
use super::style::Theme;

/// Width of a cell's text ("  144 " minus the gap).
const CELL_WIDTH: u16 = 5;
const CELL_STRIDE: u16 = CELL_WIDTH + 1;

/// Total width of the grid including the trailing gap column.
pub const TABLE_WIDTH: u16 = GRID_SIZE as u16 * CELL_STRIDE + 1;
/// Total height of the grid including all separator lines.
pub const TABLE_HEIGHT: u16 = GRID_SIZE as u16 * 2 + 1;

/// Renders the table for one selection and records cell positions.
pub struct TableWidget<'a> {
    selection: Coord,
    theme: &'a Theme,
    show_borders: bool,
    hit_map: &'a HitMap,
}

impl<'a> TableWidget<'a> {
    pub fn new(selection: Coord, theme: &'a Theme, show_borders: bool, hit_map: &'a HitMap) -> Self {
        Self {
            selection,
            theme,
            show_borders,
            hit_map,
        }
    }

    /// Whether separator `sep` (0 = above row 1) has an edge under/over `column`.
    fn horizontal_edge(&self, sep: u8, column: u8) -> bool {
        if column == 0 || column > GRID_SIZE {
            return false;
        }
        let above = sep >= 1 && borders(Coord::new(sep, column), self.selection).bottom;
        let below = sep < GRID_SIZE && borders(Coord::new(sep + 1, column), self.selection).top;
        above || below
    }

    /// Whether gap `gap` (0 = left of column 1) has an edge beside `row`.
    fn vertical_edge(&self, row: u8, gap: u8) -> bool {
        if row == 0 || row > GRID_SIZE {
            return false;
        }
        let left = gap >= 1 && borders(Coord::new(row, gap), self.selection).right;
        let right = gap < GRID_SIZE && borders(Coord::new(row, gap + 1), self.selection).left;
        left || right
    }

    fn render_outline(&self, origin: (u16, u16), buf: &mut Buffer) {
        let (ox, oy) = origin;
        let style = self.theme.border_style();
        let edge = "─".repeat(usize::from(CELL_WIDTH));

        for sep in 0..=GRID_SIZE {
            let y = oy + 2 * u16::from(sep);
            for column in 1..=GRID_SIZE {
                if self.horizontal_edge(sep, column) {
                    buf.set_string(cell_x(ox, column), y, &edge, style);
                }
            }
            for gap in 0..=GRID_SIZE {
                let up = sep >= 1 && self.vertical_edge(sep, gap);
                let down = self.vertical_edge(sep + 1, gap);
                let left = gap >= 1 && self.horizontal_edge(sep, gap);
                let right = self.horizontal_edge(sep, gap + 1);
                if let Some(glyph) = junction(up, down, left, right) {
                    let x = ox + u16::from(gap) * CELL_STRIDE;
                    buf.set_string(x, y, glyph.to_string(), style);
                }
            }
        }

        for row in 1..=GRID_SIZE {
            let y = row_y(oy, row);
            for gap in 0..=GRID_SIZE {
                if self.vertical_edge(row, gap) {
                    buf.set_string(ox + u16::from(gap) * CELL_STRIDE, y, "│", style);
                }
            }
        }
    }
}

impl Widget for TableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.hit_map.clear();

        if area.width < TABLE_WIDTH || area.height < TABLE_HEIGHT {
            let message = format!(
                "Terminal too small: need {TABLE_WIDTH}x{TABLE_HEIGHT}, have {}x{}",
                area.width, area.height
            );
            Paragraph::new(Line::from(message))
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let ox = area.x + (area.width - TABLE_WIDTH) / 2;
        let oy = area.y + (area.height - TABLE_HEIGHT) / 2;

        for row in 1..=GRID_SIZE {
            for column in 1..=GRID_SIZE {
                let cell = Coord::new(row, column);
                let style = self.theme.style_for(classify(cell, self.selection));
                let cell_area = Rect::new(cell_x(ox, column), row_y(oy, row), CELL_WIDTH, 1);
                let text = format!("{:>4} ", cell.product());
                buf.set_string(cell_area.x, cell_area.y, text, style);
                self.hit_map.push(cell_area, cell);
            }
        }

        if self.show_borders {
            self.render_outline((ox, oy), buf);
        }
    }
}

fn cell_x(ox: u16, column: u8) -> u16 {
    ox + u16::from(column - 1) * CELL_STRIDE + 1
}

fn row_y(oy: u16, row: u8) -> u16 {
    oy + 2 * u16::from(row - 1) + 1
}

/// Box-drawing glyph for a junction with the given arms.
fn junction(up: bool, down: bool, left: bool, right: bool) -> Option<char> {
    let glyph = match (up, down, left, right) {
        (false, false, false, false) => return None,
        (true, true, true, true) => '┼',
        (true, true, true, false) => '┤',
        (true, true, false, true) => '├',
        (true, false, true, true) => '┴',
        (false, true, true, true) => '┬',
        (false, true, false, true) => '┌',
        (false, true, true, false) => '┐',
        (true, false, false, true) => '└',
        (true, false, true, false) => '┘',
        (_, _, false, false) => '│',
        (false, false, _, _) => '─',
    };
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn draw(selection: Coord, show_borders: bool) -> (Buffer, HitMap) {
        let theme = Theme::default();
        let hit_map = HitMap::new();
        let backend = TestBackend::new(TABLE_WIDTH, TABLE_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let widget = TableWidget::new(selection, &theme, show_borders, &hit_map);
                frame.render_widget(widget, frame.area());
            })
            .unwrap();
        (terminal.backend().buffer().clone(), hit_map)
    }

    fn line(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_records_every_cell() {
        let (_, hit_map) = draw(Coord::ORIGIN, true);
        assert_eq!(hit_map.len(), 144);
        assert_eq!(hit_map.cell_at(1, 1), Some(Coord::ORIGIN));
        assert_eq!(hit_map.cell_at(5, 1), Some(Coord::ORIGIN));
        assert_eq!(hit_map.cell_at(6, 1), None);
        assert_eq!(hit_map.cell_at(7, 3), Some(Coord::new(2, 2)));
        assert_eq!(
            hit_map.cell_at(TABLE_WIDTH - 2, TABLE_HEIGHT - 2),
            Some(Coord::new(12, 12))
        );
    }

    #[test]
    fn test_products_are_drawn() {
        let (buf, _) = draw(Coord::ORIGIN, false);
        assert!(line(&buf, 1).starts_with("    1     2     3"));
        assert!(line(&buf, 23).trim_end().ends_with("144"));
    }

    #[test]
    fn test_outline_around_rectangle() {
        let (buf, _) = draw(Coord::new(2, 2), true);
        assert_eq!(line(&buf, 0).trim_end(), "┌───────────┐");
        assert!(line(&buf, 1).starts_with("│   1     2 │   3"));
        assert!(line(&buf, 3).starts_with("│   2     4 │   6"));
        assert_eq!(line(&buf, 4).trim_end(), "└───────────┘");
    }

    #[test]
    fn test_no_outline_when_disabled() {
        let (buf, _) = draw(Coord::new(2, 2), false);
        assert_eq!(line(&buf, 0).trim(), "");
        assert!(line(&buf, 1).starts_with("    1"));
    }

    #[test]
    fn test_product_cell_styled() {
        let theme = Theme::default();
        let (buf, _) = draw(Coord::new(3, 4), false);
        // cell (3,4) text starts at x = 3 * 6 + 1, y = 5
        assert_eq!(buf[(19, 5)].bg, theme.product);
        // cell (2,2) is inside the rectangle
        assert_eq!(buf[(7, 3)].bg, theme.span);
        // cell (1,4) is a multiplier
        assert_eq!(buf[(19, 1)].fg, theme.multiplier);
    }

    #[test]
    fn test_too_small_area_clears_hits() {
        let theme = Theme::default();
        let hit_map = HitMap::new();
        hit_map.push(Rect::new(0, 0, 1, 1), Coord::ORIGIN);
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| {
                let widget = TableWidget::new(Coord::ORIGIN, &theme, true, &hit_map);
                frame.render_widget(widget, frame.area());
            })
            .unwrap();
        assert!(hit_map.is_empty());
        let text: String = (0..10)
            .map(|y| line(terminal.backend().buffer(), y))
            .collect();
        assert!(text.contains("Terminal too small"));
    }

    #[test]
    fn test_junction_glyphs() {
        assert_eq!(junction(false, false, false, false), None);
        assert_eq!(junction(false, true, false, true), Some('┌'));
        assert_eq!(junction(true, false, true, false), Some('┘'));
        assert_eq!(junction(true, true, false, false), Some('│'));
        assert_eq!(junction(false, false, true, true), Some('─'));
        assert_eq!(junction(true, true, true, true), Some('┼'));
    }
}

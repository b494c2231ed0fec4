//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate logical state. The only write is the table's hit map, which lives
//! behind a `RefCell` for exactly this reason.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::state::AppState;
use crate::statusline::{render_debug_status_line, render_status_line};
use crate::table::TableWidget;

const TITLE_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const DEBUG_STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let debug_status_height = if app.show_debug_status {
        DEBUG_STATUS_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(debug_status_height),
        ])
        .split(area);

    let title = Paragraph::new(Line::from("Multiplication table"))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let selection = app.table.selection();
    frame.render_widget(
        TableWidget::new(selection, &app.theme, app.show_borders, &app.table.hit_map),
        chunks[1],
    );

    render_status_line(selection, app.show_borders, frame, chunks[2]);

    if app.show_debug_status {
        render_debug_status_line(&app.status_line.snapshot(), frame, chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use timestable_core::Coord;
    use timestable_core::config::Config;

    use super::*;

    fn screen(app: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buf = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_status_line_shows_product() {
        let app = AppState::new(&Config::default(), Coord::new(5, 7));
        let lines = screen(&app, 80, 28);
        assert!(lines[0].contains("Multiplication table"));
        assert!(lines[27].starts_with("5 × 7 = 35"));
        assert_eq!(app.table.hit_map.len(), 144);
    }

    #[test]
    fn test_debug_line_only_when_enabled() {
        let mut app = AppState::new(&Config::default(), Coord::ORIGIN);
        let lines = screen(&app, 80, 28);
        assert!(!lines[27].contains("fps"));

        app.show_debug_status = true;
        let lines = screen(&app, 80, 28);
        assert!(lines[27].contains("fps"));
    }

    #[test]
    fn test_click_positions_follow_layout() {
        let app = AppState::new(&Config::default(), Coord::ORIGIN);
        screen(&app, 80, 28);
        // Table area is rows 1..=26 (height 26), 73 wide centred in 80.
        // ox = (80 - 73) / 2 = 3, oy = 1 + (26 - 25) / 2 = 1.
        assert_eq!(app.table.hit_map.cell_at(4, 2), Some(Coord::ORIGIN));
        assert_eq!(app.table.hit_map.cell_at(10, 4), Some(Coord::new(2, 2)));
    }
}

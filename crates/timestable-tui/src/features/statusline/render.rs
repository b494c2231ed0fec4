//! Status line rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use timestable_core::Coord;

use super::state::StatusLine;

/// Renders "row × column = product" followed by key hints.
pub fn render_status_line(selection: Coord, show_borders: bool, frame: &mut Frame, area: Rect) {
    let hint = Style::default().fg(Color::DarkGray);
    let borders_label = if show_borders { " hide outline  " } else { " show outline  " };

    let line = Line::from(vec![
        Span::styled(
            format!(
                "{} × {} = {}",
                selection.row,
                selection.column,
                selection.product()
            ),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("←↑↓→", hint),
        Span::raw(" move  "),
        Span::styled("click", hint),
        Span::raw(" select  "),
        Span::styled("b", hint),
        Span::raw(borders_label),
        Span::styled("q", hint),
        Span::raw(" quit"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the debug status line (frame rate and redraw count).
pub fn render_debug_status_line(status: &StatusLine, frame: &mut Frame, area: Rect) {
    let fps_style = if status.fps < 30.0 {
        Style::default().fg(Color::Red)
    } else if status.fps < 55.0 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green)
    };

    let line = Line::from(vec![
        Span::styled(format!("{:.1}fps", status.fps), fps_style),
        Span::styled(
            format!("  {} redraws", status.redraws),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

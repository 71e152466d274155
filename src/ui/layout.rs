//! Layout helpers and the status bar

use crate::app::App;
use crate::platform;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the content column gets on large terminals
const MAX_CONTENT_WIDTH: u16 = 100;

/// Reserve the bottom line for the status bar and center the content
/// column on wide terminals
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    center_content(chunks[0])
}

fn center_content(area: Rect) -> Rect {
    if area.width <= MAX_CONTENT_WIDTH {
        return area;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(MAX_CONTENT_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

    chunks[1]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Validity indicator: green once the form would submit
    let validity = if app.state.form.is_submittable() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(validity);

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    // Outstanding error count, once errors have been surfaced
    let error_count = app.state.form.errors().len();
    if error_count > 0 && matches!(app.state.current_view, View::Form) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{error_count} field(s) need attention"),
            Style::default().fg(Color::Red),
        ));
    }

    // Copy feedback
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Form => format!(
            "Tab:next  ↑/↓:options  {}:submit  {}:password  Esc:quit",
            platform::SUBMIT_SHORTCUT,
            platform::REVEAL_SHORTCUT
        ),
        View::Success => "Enter:new registration  y:copy  Esc:back".to_string(),
    }
}

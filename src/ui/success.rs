//! Success page rendering

use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the read-only confirmation view for a submitted registration
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(data) = &app.state.submission else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // header
            Constraint::Length(12),            // details
            Constraint::Length(BUTTON_HEIGHT), // back button
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Registration Successful!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your account has been created successfully.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, rows[0]);

    let aadhar_display = if app.config.mask_aadhar_enabled() {
        masked_aadhar(&data.aadhar_number)
    } else {
        data.aadhar_number.clone()
    };

    let details = Paragraph::new(vec![
        detail_line("Full Name", &data.full_name()),
        detail_line("Username", &data.username),
        detail_line("Email", &data.email),
        detail_line("Phone", &format!("{} {}", data.dial_code, data.phone_number)),
        detail_line("Country", &data.country_name),
        detail_line("City", &data.city),
        detail_line("PAN Number", &data.pan_number),
        detail_line("Aadhar Number", &aadhar_display),
    ])
    .block(
        Block::default()
            .title(" Registration Details ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(details, rows[1]);

    draw_back_button(frame, rows[2]);
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {label}: "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value.to_string()),
    ])
}

fn draw_back_button(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(26),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(frame, columns[1], "Register Another User", true, true);
}

/// Mask an Aadhar number down to its last four digits
pub fn masked_aadhar(aadhar: &str) -> String {
    let skip = aadhar.chars().count().saturating_sub(4);
    let tail: String = aadhar.chars().skip(skip).collect();
    format!("****-****-{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_masked_aadhar_keeps_last_four_digits() {
        assert_eq!(masked_aadhar("123456789012"), "****-****-9012");
    }

    #[test]
    fn test_masked_aadhar_tolerates_short_input() {
        assert_eq!(masked_aadhar("12"), "****-****-12");
    }
}

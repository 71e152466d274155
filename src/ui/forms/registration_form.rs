//! Registration form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Field, FieldKind};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the registration form view
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" User Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // first / last name
            Constraint::Length(3),             // username / email
            Constraint::Length(3),             // password
            Constraint::Length(3),             // country code + phone number
            Constraint::Length(3),             // country / city
            Constraint::Length(3),             // PAN / Aadhar
            Constraint::Length(BUTTON_HEIGHT), // register button
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    draw_pair(frame, rows[0], app, Field::FirstName, Field::LastName);
    draw_pair(frame, rows[1], app, Field::Username, Field::Email);
    draw_form_field(frame, rows[2], app, Field::Password);
    draw_phone_row(frame, rows[3], app);
    draw_pair(frame, rows[4], app, Field::Country, Field::City);
    draw_pair(frame, rows[5], app, Field::PanNumber, Field::AadharNumber);
    draw_register_button(frame, rows[6], app);
}

/// Two fields side by side
fn draw_pair(frame: &mut Frame, area: Rect, app: &App, left: Field, right: Field) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_form_field(frame, columns[0], app, left);
    draw_form_field(frame, columns[1], app, right);
}

/// Narrow dial-code select next to the phone number input
fn draw_phone_row(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(area);

    draw_form_field(frame, columns[0], app, Field::CountryCode);
    draw_form_field(frame, columns[1], app, Field::PhoneNumber);
}

fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, field: Field) {
    let is_active = app.state.focused_field() == Some(field);
    let value = display_value(app, field);

    draw_field(
        frame,
        area,
        field.label(),
        &value,
        field.placeholder(),
        is_active,
        app.state.form.error(field),
    );
}

/// What the field box shows: masked dots for the password, the display
/// label for selects, the raw value otherwise
fn display_value(app: &App, field: Field) -> String {
    let raw = app.state.form.value(field);
    match field.kind() {
        FieldKind::Password if !app.state.reveal_password => "•".repeat(raw.chars().count()),
        FieldKind::Select => select_display(app, field, raw),
        _ => raw.to_string(),
    }
}

fn select_display(app: &App, field: Field, code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    match field {
        Field::Country => app
            .state
            .form
            .reference()
            .country(code)
            .map(|c| c.display_name.clone())
            .unwrap_or_else(|| code.to_string()),
        // Dial codes and cities are shown as stored
        _ => code.to_string(),
    }
}

fn draw_register_button(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(16),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        columns[1],
        "Register",
        app.state.is_register_button_active(),
        app.state.form.is_submittable(),
    );
}

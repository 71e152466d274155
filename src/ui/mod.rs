//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod success;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let content_area = layout::create_layout(area);

    match app.state.current_view {
        View::Form => forms::draw_registration(frame, content_area, app),
        View::Success => success::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, app);
}

//! Application state definitions

use crate::reference::ReferenceData;
use crate::state::{Field, RegistrationForm, SubmissionSnapshot};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The registration form
    #[default]
    Form,
    /// Read-only confirmation after a successful submit
    Success,
}

/// Focus index of the Register button row, one past the last field
pub const REGISTER_BUTTON_INDEX: usize = Field::ALL.len();

/// Fields plus the button row
const FOCUS_STOPS: usize = REGISTER_BUTTON_INDEX + 1;

/// Main application state
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Form session
    pub form: RegistrationForm,
    pub submission: Option<SubmissionSnapshot>,

    // UI state
    pub active_field: usize,
    pub reveal_password: bool,
}

impl AppState {
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            current_view: View::Form,
            form: RegistrationForm::new(reference),
            submission: None,
            active_field: 0,
            reveal_password: false,
        }
    }

    /// The focused form field, or None on the button row
    pub fn focused_field(&self) -> Option<Field> {
        Field::ALL.get(self.active_field).copied()
    }

    pub fn is_register_button_active(&self) -> bool {
        self.active_field == REGISTER_BUTTON_INDEX
    }

    /// Move focus to the next stop (wraps). Leaving a field is its blur.
    pub fn focus_next(&mut self) {
        self.blur_focused();
        self.active_field = (self.active_field + 1) % FOCUS_STOPS;
    }

    /// Move focus to the previous stop (wraps). Leaving a field is its blur.
    pub fn focus_prev(&mut self) {
        self.blur_focused();
        if self.active_field == 0 {
            self.active_field = FOCUS_STOPS - 1;
        } else {
            self.active_field -= 1;
        }
    }

    fn blur_focused(&mut self) {
        if let Some(field) = self.focused_field() {
            self.form.on_field_blur(field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn new_state() -> AppState {
        AppState::new(ReferenceData::builtin())
    }

    #[test]
    fn test_initial_view_is_form() {
        let state = new_state();
        assert_eq!(state.current_view, View::Form);
        assert_eq!(state.active_field, 0);
        assert!(state.submission.is_none());
    }

    #[test]
    fn test_focus_cycles_through_fields_and_button() {
        let mut state = new_state();
        for _ in 0..Field::ALL.len() {
            state.focus_next();
        }
        assert!(state.is_register_button_active());
        assert!(state.focused_field().is_none());

        state.focus_next();
        assert_eq!(state.focused_field(), Some(Field::FirstName));
    }

    #[test]
    fn test_focus_prev_wraps_to_button() {
        let mut state = new_state();
        state.focus_prev();
        assert!(state.is_register_button_active());
    }

    #[test]
    fn test_leaving_a_field_blurs_it() {
        let mut state = new_state();
        assert!(!state.form.is_touched(Field::FirstName));

        state.focus_next();

        assert!(state.form.is_touched(Field::FirstName));
        assert!(!state.form.is_touched(Field::LastName));
    }

    #[test]
    fn test_leaving_the_button_row_blurs_nothing() {
        let mut state = new_state();
        state.active_field = REGISTER_BUTTON_INDEX;

        state.focus_next();

        for field in Field::ALL {
            assert!(!state.form.is_touched(field));
        }
    }
}

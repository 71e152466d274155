//! Application struct and core key handling

use crate::config::TuiConfig;
use crate::platform;
use crate::reference::ReferenceData;
use crate::state::{AppState, Field, FieldKind, RegistrationForm, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        let mut state = AppState::new(ReferenceData::builtin());

        Self::apply_default_country(&mut state.form, &config);
        state.reveal_password = config.reveal_password.unwrap_or(false);

        Self {
            state,
            config,
            quit: false,
            copy_message: None,
        }
    }

    /// Pre-select the configured country on a fresh form, if it is a known
    /// code
    fn apply_default_country(form: &mut RegistrationForm, config: &TuiConfig) {
        if let Some(code) = config.default_country.as_deref() {
            if form.reference().country(code).is_some() {
                form.on_field_change(Field::Country, code);
            }
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Form => self.handle_form_key(key),
            View::Success => self.handle_success_key(key),
        }
    }

    /// Handle keys on the registration form
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_button = self.state.is_register_button_active();

        match key.code {
            KeyCode::Tab => self.state.focus_next(),
            KeyCode::BackTab => self.state.focus_prev(),
            // Submit (Ctrl+S, or Cmd+S on macOS)
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(platform::SHORTCUT_MODIFIER) =>
            {
                self.try_submit();
            }
            // Toggle password reveal
            KeyCode::Char('p') if key.modifiers.contains(platform::SHORTCUT_MODIFIER) => {
                self.state.reveal_password = !self.state.reveal_password;
            }
            KeyCode::Enter if on_button => self.try_submit(),
            // Enter advances focus like Tab, blurring the current field
            KeyCode::Enter => self.state.focus_next(),
            KeyCode::Up => self.cycle_select(-1),
            KeyCode::Down => self.cycle_select(1),
            KeyCode::Char(c)
                if !on_button
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.input_char(c);
            }
            KeyCode::Backspace if !on_button => self.backspace(),
            KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on the success view
    fn handle_success_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('r') => self.start_new_registration(),
            KeyCode::Char('y') => self.copy_registration_details()?,
            _ => {}
        }
        Ok(())
    }

    /// Append a character to the focused text field
    fn input_char(&mut self, c: char) {
        let Some(field) = self.state.focused_field() else {
            return;
        };
        // Selects are edited by cycling, not typing
        if field.kind() == FieldKind::Select {
            return;
        }

        let current = self.state.form.value(field);
        if let Some(max) = field.max_input_len() {
            if current.chars().count() >= max {
                return;
            }
        }

        let mut value = current.to_string();
        value.push(c);
        self.state.form.on_field_change(field, value);
    }

    /// Remove the last character of the focused text field
    fn backspace(&mut self) {
        let Some(field) = self.state.focused_field() else {
            return;
        };
        if field.kind() == FieldKind::Select {
            return;
        }

        let mut value = self.state.form.value(field).to_string();
        if value.pop().is_some() {
            self.state.form.on_field_change(field, value);
        }
    }

    /// Step the focused select field through its options (wraps)
    fn cycle_select(&mut self, step: isize) {
        let Some(field) = self.state.focused_field() else {
            return;
        };
        if field.kind() != FieldKind::Select {
            return;
        }

        let options = self.select_options(field);
        if options.is_empty() {
            return;
        }

        let current = self.state.form.value(field);
        let next = match options.iter().position(|option| option == current) {
            Some(index) => {
                let len = options.len() as isize;
                (index as isize + step).rem_euclid(len) as usize
            }
            None if step < 0 => options.len() - 1,
            None => 0,
        };

        let value = options[next].clone();
        self.state.form.on_field_change(field, value);
    }

    /// Options for a select field, in reference-data order
    fn select_options(&self, field: Field) -> Vec<String> {
        let reference = self.state.form.reference();
        match field {
            Field::CountryCode => reference
                .countries()
                .iter()
                .map(|c| c.dial_code.clone())
                .collect(),
            Field::Country => reference.countries().iter().map(|c| c.code.clone()).collect(),
            Field::City => self.state.form.city_options().to_vec(),
            _ => Vec::new(),
        }
    }

    /// Run full validation; on success hand the snapshot to the success
    /// view, otherwise leave all errors visible on the form.
    fn try_submit(&mut self) {
        match self.state.form.submit() {
            Some(snapshot) => {
                tracing::info!(username = %snapshot.username, "registration submitted");
                self.state.submission = Some(snapshot);
                self.state.current_view = View::Success;
            }
            None => {
                tracing::debug!(
                    errors = self.state.form.errors().len(),
                    "submit blocked by validation"
                );
            }
        }
    }

    /// Discard the submitted session and present a fresh form
    fn start_new_registration(&mut self) {
        self.state.form.reset();
        self.state.submission = None;
        self.state.current_view = View::Form;
        self.state.active_field = 0;
        self.state.reveal_password = self.config.reveal_password.unwrap_or(false);
        self.copy_message = None;

        Self::apply_default_country(&mut self.state.form, &self.config);
    }

    /// Copy the submitted registration details to the system clipboard
    fn copy_registration_details(&mut self) -> Result<()> {
        use arboard::Clipboard;

        let Some(data) = &self.state.submission else {
            return Ok(());
        };

        let text = format!(
            "Full Name: {}\nUsername: {}\nEmail: {}\nPhone: {} {}\nCountry: {}\nCity: {}\nPAN Number: {}\nAadhar Number: {}\n",
            data.full_name(),
            data.username,
            data.email,
            data.dial_code,
            data.phone_number,
            data.country_name,
            data.city,
            data.pan_number,
            data.aadhar_number,
        );

        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        self.copy_message = Some("Registration details copied!".to_string());
        Ok(())
    }
}

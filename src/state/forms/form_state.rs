//! Form navigation and the sign-up form

use super::engine::FormEngine;
use super::field::{FieldKind, FieldValue, FormField, FormValues};
use super::rules::{
    email, matches_field, max_length, min_length, must_be_checked, required, ValidationRules,
};
use crate::api::ApiClientError;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons on the last row of the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignUpButton {
    Reset,
    #[default]
    Submit,
}

static SIGN_UP_FIELDS: [FormField; 5] = [
    FormField::text("name", "Name").with_placeholder("Your full name"),
    FormField::text("email", "Email").with_placeholder("example@email.com"),
    FormField::secret("password", "Password").with_helper("At least 8 characters"),
    FormField::secret("confirm", "Confirm password"),
    FormField::checkbox("terms", "I accept the terms of service"),
];

fn sign_up_rules() -> ValidationRules {
    ValidationRules::new()
        .field(
            "name",
            [
                required("Please enter your name"),
                max_length(40, "Name must be 40 characters or fewer"),
            ],
        )
        .field(
            "email",
            [
                required("Please enter your email"),
                email("Please enter a valid email address"),
            ],
        )
        .field(
            "password",
            [
                required("Please enter a password"),
                min_length(8, "Password must be at least 8 characters"),
            ],
        )
        .field("confirm", [matches_field("password", "Passwords do not match")])
        .field("terms", [must_be_checked("You must accept the terms")])
}

/// Sign-up form: field layout, focus and a [`FormEngine`] holding the state
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub engine: FormEngine,
    pub active_field_index: usize,
    pub selected_button: SignUpButton,
}

impl SignUpForm {
    pub fn new() -> Self {
        let initial = SIGN_UP_FIELDS
            .iter()
            .fold(FormValues::new(), |values, field| {
                values.with(field.name, field.empty_value())
            });
        Self {
            engine: FormEngine::new(initial, sign_up_rules()),
            active_field_index: 0,
            selected_button: SignUpButton::default(),
        }
    }

    pub fn fields(&self) -> &'static [FormField] {
        &SIGN_UP_FIELDS
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == SIGN_UP_FIELDS.len()
    }

    /// The focused field, or `None` on the buttons row
    pub fn current_field(&self) -> Option<&'static FormField> {
        SIGN_UP_FIELDS.get(self.active_field_index)
    }

    pub fn toggle_button(&mut self) {
        self.selected_button = match self.selected_button {
            SignUpButton::Reset => SignUpButton::Submit,
            SignUpButton::Submit => SignUpButton::Reset,
        };
    }

    fn current_value(&self) -> Option<(&'static FormField, FieldValue)> {
        let field = self.current_field()?;
        let value = self
            .engine
            .value(field.name)
            .cloned()
            .unwrap_or_else(|| field.empty_value());
        Some((field, value))
    }

    /// Type a character into the focused text field
    pub fn type_char(&mut self, c: char) {
        if let Some((field, mut value)) = self.current_value() {
            if field.kind == FieldKind::Checkbox {
                if c == ' ' {
                    self.toggle_checkbox();
                }
                return;
            }
            value.push_char(c);
            self.engine.handle_change(field.name, value);
        }
    }

    pub fn backspace(&mut self) {
        if let Some((field, mut value)) = self.current_value() {
            value.pop_char();
            self.engine.handle_change(field.name, value);
        }
    }

    pub fn toggle_checkbox(&mut self) {
        if let Some((field, value)) = self.current_value() {
            if field.kind == FieldKind::Checkbox {
                self.engine
                    .handle_change(field.name, FieldValue::Checked(!value.is_checked()));
            }
        }
    }

    /// Focus a field by index, blurring the one that loses focus
    pub fn focus(&mut self, index: usize) {
        let index = index.min(SIGN_UP_FIELDS.len());
        if index != self.active_field_index {
            self.blur_current();
        }
        self.active_field_index = index;
    }

    fn blur_current(&mut self) {
        if let Some((field, value)) = self.current_value() {
            self.engine.handle_blur(field.name, value);
        }
    }

    /// Validate for submission; returns the payload when the form is valid
    pub fn submit(&mut self) -> Option<FormValues> {
        self.engine.validate_for_submit()
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.active_field_index = 0;
        self.selected_button = SignUpButton::default();
    }

    /// Copy the first server message for each field back onto the form
    pub fn apply_server_errors(&mut self, error: &ApiClientError) {
        if let Some(details) = &error.details {
            for (field, messages) in details {
                if let Some(first) = messages.first() {
                    self.engine.set_field_error(field, first.clone());
                }
            }
        }
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignUpForm {
    fn field_count(&self) -> usize {
        SIGN_UP_FIELDS.len() + 1 // fields + buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.focus(index);
    }
}

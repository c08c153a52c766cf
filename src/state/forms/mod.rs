//! Form domain layer
//!
//! `engine` owns values, touch flags and validation errors; `rules` holds the
//! declarative rule table; `form_state` wires a concrete form to focus
//! navigation.

mod engine;
mod field;
mod form_state;
mod rules;

pub use engine::{FieldErrors, FormEngine};
pub use field::{FieldKind, FieldValue, FormField, FormValues};
pub use form_state::{Form, SignUpButton, SignUpForm};
pub use rules::{
    contains, email, matches_field, max_length, min_length, must_be_checked, required,
    ValidationRule, ValidationRules,
};

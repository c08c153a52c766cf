//! Form state engine: values, touch tracking and rule-driven errors
//!
//! Errors only appear for a field once it has been touched (blurred or
//! submitted); until then typing into it never shows a message. `is_valid`
//! ignores that gating and always evaluates every rule.

use super::field::{FieldValue, FormValues};
use super::rules::ValidationRules;
use indexmap::IndexMap;
use std::future::Future;
use std::sync::Arc;

static EMPTY_VALUE: FieldValue = FieldValue::Text(String::new());

/// Per-field error messages
pub type FieldErrors = IndexMap<String, String>;

#[derive(Debug, Clone)]
pub struct FormEngine {
    initial: FormValues,
    values: FormValues,
    errors: FieldErrors,
    touched: IndexMap<String, bool>,
    rules: Arc<ValidationRules>,
}

impl FormEngine {
    pub fn new(initial: FormValues, rules: ValidationRules) -> Self {
        Self::with_shared_rules(initial, Arc::new(rules))
    }

    /// Build over a rule table shared with other engines.
    /// A field with rules but no initial value is validated as empty text.
    pub fn with_shared_rules(initial: FormValues, rules: Arc<ValidationRules>) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FieldErrors::new(),
            touched: IndexMap::new(),
            rules,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn touched(&self) -> &IndexMap<String, bool> {
        &self.touched
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.get(field).copied().unwrap_or(false)
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Every rule passes against the current values
    pub fn is_valid(&self) -> bool {
        self.rules.fields().all(|field| {
            let value = self.values.get(field).unwrap_or(&EMPTY_VALUE);
            self.validate(field, value).is_none()
        })
    }

    /// Store a new value; revalidate only if the field was already touched
    pub fn handle_change(&mut self, field: &str, value: FieldValue) {
        self.values.insert(field, value);
        if self.is_touched(field) {
            self.revalidate(field);
        }
    }

    /// Mark touched and validate the value the field lost focus with
    pub fn handle_blur(&mut self, field: &str, value: FieldValue) {
        let error = self.validate(field, &value);
        if !self.values.contains(field) {
            self.values.insert(field, value);
        }
        self.touched.insert(field.to_string(), true);
        self.record(field, error);
    }

    pub fn set_field_value(&mut self, field: &str, value: FieldValue) {
        self.handle_change(field, value);
    }

    /// Record an externally produced error (e.g. from a server response)
    pub fn set_field_error(&mut self, field: &str, message: impl Into<String>) {
        if !self.values.contains(field) {
            tracing::debug!(field, "ignoring error for unknown field");
            return;
        }
        self.errors.insert(field.to_string(), message.into());
    }

    /// Touch every field and rebuild the error map from scratch.
    /// Returns the value snapshot when nothing failed.
    pub fn validate_for_submit(&mut self) -> Option<FormValues> {
        let errors: FieldErrors = self
            .rules
            .fields()
            .filter_map(|field| {
                let value = self.values.get(field).unwrap_or(&EMPTY_VALUE);
                self.validate(field, value)
                    .map(|message| (field.to_string(), message))
            })
            .collect();

        // A failing field must exist in values to carry its error
        for field in errors.keys() {
            if !self.values.contains(field) {
                self.values.insert(field, EMPTY_VALUE.clone());
            }
        }
        self.errors = errors;
        self.touched = self
            .values
            .names()
            .map(|name| (name.to_string(), true))
            .collect();

        if self.errors.is_empty() {
            Some(self.values.clone())
        } else {
            tracing::debug!(errors = self.errors.len(), "submit blocked by validation");
            None
        }
    }

    /// Validate everything, then await `on_submit` with the values only if
    /// there were no errors. Returns the callback's output when it ran.
    pub async fn handle_submit<F, Fut, R>(&mut self, on_submit: F) -> Option<R>
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = R>,
    {
        let values = self.validate_for_submit()?;
        Some(on_submit(values).await)
    }

    /// Restore the initial snapshot and forget all errors and touches
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
        self.touched.clear();
    }

    fn validate(&self, field: &str, value: &FieldValue) -> Option<String> {
        self.rules
            .validate_field(field, value, &self.values)
            .map(str::to_string)
    }

    fn revalidate(&mut self, field: &str) {
        let value = self.values.get(field).unwrap_or(&EMPTY_VALUE);
        let error = self.validate(field, value);
        self.record(field, error);
    }

    fn record(&mut self, field: &str, error: Option<String>) {
        match error {
            Some(message) => {
                self.errors.insert(field.to_string(), message);
            }
            None => {
                self.errors.shift_remove(field);
            }
        }
    }
}

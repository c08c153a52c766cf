//! Declarative validation rules

use super::field::{FieldValue, FormValues};
use indexmap::IndexMap;
use std::fmt;

type Predicate = dyn Fn(&FieldValue, &FormValues) -> bool + Send + Sync;

/// A predicate over (field value, all values) paired with its failure message
pub struct ValidationRule {
    predicate: Box<Predicate>,
    message: String,
}

impl ValidationRule {
    pub fn new<F>(message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&FieldValue, &FormValues) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when the value passes
    pub fn check(&self, value: &FieldValue, values: &FormValues) -> bool {
        (self.predicate)(value, values)
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Non-blank text, or a ticked checkbox
pub fn required(message: impl Into<String>) -> ValidationRule {
    ValidationRule::new(message, |value, _| !value.is_blank())
}

pub fn min_length(min: usize, message: impl Into<String>) -> ValidationRule {
    ValidationRule::new(message, move |value, _| {
        value.as_text().chars().count() >= min
    })
}

pub fn max_length(max: usize, message: impl Into<String>) -> ValidationRule {
    ValidationRule::new(message, move |value, _| {
        value.as_text().chars().count() <= max
    })
}

pub fn contains(needle: &'static str, message: impl Into<String>) -> ValidationRule {
    ValidationRule::new(message, move |value, _| value.as_text().contains(needle))
}

/// `local@domain.tld` with no whitespace
pub fn email(message: impl Into<String>) -> ValidationRule {
    ValidationRule::new(message, |value, _| is_email(value.as_text()))
}

pub fn must_be_checked(message: impl Into<String>) -> ValidationRule {
    ValidationRule::new(message, |value, _| value.is_checked())
}

/// Text equal to another field's text (e.g. password confirmation)
pub fn matches_field(other: &'static str, message: impl Into<String>) -> ValidationRule {
    ValidationRule::new(message, move |value, values| {
        value.as_text() == values.text(other)
    })
}

fn is_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    match text.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// Immutable field → ordered rules table, built once per form
#[derive(Debug, Default)]
pub struct ValidationRules {
    rules: IndexMap<String, Vec<ValidationRule>>,
}

impl ValidationRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rules for a field, keeping declaration order
    pub fn field(mut self, name: &str, rules: impl IntoIterator<Item = ValidationRule>) -> Self {
        self.rules
            .entry(name.to_string())
            .or_default()
            .extend(rules);
        self
    }

    pub fn for_field(&self, name: &str) -> &[ValidationRule] {
        self.rules.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fields with at least one rule, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .filter(|(_, rules)| !rules.is_empty())
            .map(|(name, _)| name.as_str())
    }

    pub fn has_rules(&self, name: &str) -> bool {
        !self.for_field(name).is_empty()
    }

    /// Message of the first failing rule, stopping there
    pub fn validate_field(&self, name: &str, value: &FieldValue, values: &FormValues) -> Option<&str> {
        self.for_field(name)
            .iter()
            .find(|rule| !rule.check(value, values))
            .map(ValidationRule::message)
    }
}

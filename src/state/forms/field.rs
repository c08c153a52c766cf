//! Form field value objects

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
    Number(i64),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Get the text value (returns empty string for non-text values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Checked(_) | FieldValue::Number(_) => "",
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checked(true))
    }

    /// True for empty text, unchecked boxes; numbers are never blank
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Checked(c) => !c,
            FieldValue::Number(_) => false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Checked(true) => "[x]".to_string(),
            FieldValue::Checked(false) => "[ ]".to_string(),
            FieldValue::Number(n) => n.to_string(),
        }
    }

    /// Apply a typed character. Checkboxes ignore typing.
    pub fn push_char(&mut self, c: char) {
        match self {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Number(n) => {
                if let Some(d) = c.to_digit(10) {
                    *n = n.saturating_mul(10).saturating_add(i64::from(d));
                }
            }
            FieldValue::Checked(_) => {}
        }
    }

    pub fn pop_char(&mut self) {
        match self {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Number(n) => *n /= 10,
            FieldValue::Checked(_) => {}
        }
    }
}

/// Ordered snapshot of a form's values, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(IndexMap<String, FieldValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for constructing initial snapshots
    pub fn with(mut self, name: &str, value: FieldValue) -> Self {
        self.0.insert(name.to_string(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: &str, value: FieldValue) {
        self.0.insert(name.to_string(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Text of a field, empty when missing or not text
    pub fn text(&self, name: &str) -> &str {
        self.get(name).map(FieldValue::as_text).unwrap_or("")
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.get(name).is_some_and(FieldValue::is_checked)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// How a field is edited and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text rendered masked
    Secret,
    Checkbox,
}

/// Presentation metadata for a single form field
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
    pub helper_text: Option<&'static str>,
}

impl FormField {
    /// Create a new text field
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            placeholder: None,
            helper_text: None,
        }
    }

    /// Create a new masked field
    pub const fn secret(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Secret,
            placeholder: None,
            helper_text: None,
        }
    }

    /// Create a new checkbox field
    pub const fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Checkbox,
            placeholder: None,
            helper_text: None,
        }
    }

    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub const fn with_helper(mut self, helper_text: &'static str) -> Self {
        self.helper_text = Some(helper_text);
        self
    }

    /// Empty value matching this field's kind
    pub fn empty_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Text | FieldKind::Secret => FieldValue::Text(String::new()),
            FieldKind::Checkbox => FieldValue::Checked(false),
        }
    }
}

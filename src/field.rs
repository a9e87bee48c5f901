//! Field state and field value objects

use serde::{Deserialize, Serialize};

/// Type-safe field values for heterogeneous forms
///
/// Engines are generic over the value type; this enum is the ready-made
/// choice when a single form mixes text, numeric, and boolean fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    Toggle(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Create a text value
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Create a numeric value
    pub fn number(value: i64) -> Self {
        FieldValue::Number(value)
    }

    /// Create a boolean value
    pub fn toggle(value: bool) -> Self {
        FieldValue::Toggle(value)
    }

    /// Get the text value (returns empty string for non-text values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the numeric value (returns 0 for non-numeric values)
    pub fn as_number(&self) -> i64 {
        match self {
            FieldValue::Number(n) => *n,
            _ => 0,
        }
    }

    /// Get the boolean value (returns false for non-boolean values)
    pub fn as_toggle(&self) -> bool {
        match self {
            FieldValue::Toggle(b) => *b,
            _ => false,
        }
    }
}

/// Per-field state tracked by the engine
///
/// `touched` and `dirty` are monotonic: once set they stay set until the
/// field (or the whole form) is explicitly reset.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState<V> {
    pub value: V,
    pub error: Option<String>,
    pub touched: bool,
    pub dirty: bool,
}

impl<V> FieldState<V> {
    /// Create a pristine field holding the given initial value
    pub fn new(value: V) -> Self {
        Self {
            value,
            error: None,
            touched: false,
            dirty: false,
        }
    }

    /// True when the field carries no validation error
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

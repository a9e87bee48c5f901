//! Validator wrapper and built-in validation rules

use crate::field::FieldValue;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Current values of all fields, in construction order.
///
/// Handed to validators so a rule can look at sibling fields (password
/// confirmation, dependent ranges, and the like).
pub type Values<V> = IndexMap<String, V>;

/// A pure, side-effect-free validation function for one field.
///
/// Returns `None` for a valid value and `Some(message)` for an invalid one.
/// An empty message is normalized to `None` by the engine. Cloning a
/// validator is cheap; the closure is shared behind an `Arc`.
#[derive(Clone)]
pub struct Validator<V> {
    func: Arc<dyn Fn(&V, &Values<V>) -> Option<String> + Send + Sync>,
}

impl<V> Validator<V> {
    /// Wrap a closure receiving the field's value and all current values
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&V, &Values<V>) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Run the validator, normalizing empty messages to `None`
    pub(crate) fn check(&self, value: &V, all_values: &Values<V>) -> Option<String> {
        match (self.func)(value, all_values) {
            Some(message) if message.is_empty() => None,
            result => result,
        }
    }
}

impl<V> fmt::Debug for Validator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// Built-in rules for [`FieldValue`] fields.
///
/// Mirrors the common subset every form ends up needing; anything fancier
/// goes through [`Validator::new`] directly.
pub mod rules {
    use super::*;

    /// Text must be non-empty after trimming
    pub fn required() -> Validator<FieldValue> {
        Validator::new(|value, _| match value {
            FieldValue::Text(s) if s.trim().is_empty() => {
                Some("Value cannot be empty".to_string())
            }
            _ => None,
        })
    }

    /// Text must be at least `min` characters long
    pub fn min_len(min: usize) -> Validator<FieldValue> {
        Validator::new(move |value, _| match value {
            FieldValue::Text(s) if s.chars().count() < min => {
                Some(format!("Must be at least {min} characters"))
            }
            _ => None,
        })
    }

    /// Text must be at most `max` characters long
    pub fn max_len(max: usize) -> Validator<FieldValue> {
        Validator::new(move |value, _| match value {
            FieldValue::Text(s) if s.chars().count() > max => {
                Some(format!("Must be at most {max} characters"))
            }
            _ => None,
        })
    }

    /// Number must fall within `min..=max`
    pub fn range(min: i64, max: i64) -> Validator<FieldValue> {
        Validator::new(move |value, _| match value {
            FieldValue::Number(n) if *n < min || *n > max => {
                Some(format!("Must be between {min} and {max}"))
            }
            _ => None,
        })
    }

    /// Text must match one of the given options (case-insensitive)
    pub fn one_of(options: Vec<String>) -> Validator<FieldValue> {
        let lowered: Vec<String> = options.iter().map(|o| o.to_lowercase()).collect();
        Validator::new(move |value, _| match value {
            FieldValue::Text(s) => {
                let normalized = s.trim().to_lowercase();
                if lowered.contains(&normalized) {
                    None
                } else {
                    Some(format!("Value must be one of: {}", options.join(", ")))
                }
            }
            _ => None,
        })
    }

    /// Wrap a closure that only looks at the field's own value
    pub fn custom<F>(func: F) -> Validator<FieldValue>
    where
        F: Fn(&FieldValue) -> Option<String> + Send + Sync + 'static,
    {
        Validator::new(move |value, _| func(value))
    }

    /// Chain rules; the first failing rule's message wins
    pub fn all(validators: Vec<Validator<FieldValue>>) -> Validator<FieldValue> {
        Validator::new(move |value, all_values| {
            validators
                .iter()
                .find_map(|v| v.check(value, all_values))
        })
    }
}

//! Derived aggregate form state

use indexmap::IndexMap;
use serde::Serialize;

/// Read-only aggregate of a form's current state.
///
/// A value copy computed on demand from the field map; handed to the
/// rendering layer to drive error text, disabled-submit state, and dirty
/// indicators. Never mutated independently of the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot<V> {
    /// True iff no field carries a validation error
    pub is_valid: bool,
    /// True iff any field's value has ever changed
    pub is_dirty: bool,
    /// True iff any field has been marked touched
    pub is_touched: bool,
    /// Current error per field, in construction order
    pub errors: IndexMap<String, Option<String>>,
    /// Current value per field, in construction order
    pub values: IndexMap<String, V>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;

    #[test]
    fn test_serializes_for_render_layer() {
        let mut errors = IndexMap::new();
        errors.insert("email".to_string(), Some("required".to_string()));
        let mut values = IndexMap::new();
        values.insert("email".to_string(), FieldValue::text(""));

        let snapshot = FormSnapshot {
            is_valid: false,
            is_dirty: true,
            is_touched: false,
            errors,
            values,
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["errors"]["email"], "required");
    }
}

//! Error types for contract violations

use thiserror::Error;

/// Errors raised by the form engine for misuse of its API.
///
/// Validation failures are not errors: a failing validator produces an
/// `Option<String>` on the field itself. These variants cover programming
/// mistakes only, such as writing to a field that was never declared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A write referenced a field name outside the fixed key set.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A validator was registered for a field absent from the initial values.
    #[error("validator registered for unknown field: {0}")]
    UnknownValidator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_field() {
        let err = FormError::UnknownField("email".to_string());
        assert_eq!(err.to_string(), "unknown field: email");
    }

    #[test]
    fn test_display_unknown_validator() {
        let err = FormError::UnknownValidator("age".to_string());
        assert_eq!(
            err.to_string(),
            "validator registered for unknown field: age"
        );
    }
}

//! Validation trigger configuration

use serde::{Deserialize, Serialize};

/// Controls when the engine re-runs validators.
///
/// Each trigger is independently togglable; all default to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormOptions {
    /// Re-validate a field whenever its value changes
    pub validate_on_change: bool,
    /// Re-validate a field when it is marked touched
    pub validate_on_blur: bool,
    /// Run a full validation pass before submitting
    pub validate_on_submit: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            validate_on_change: true,
            validate_on_blur: true,
            validate_on_submit: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_all_triggers() {
        let options = FormOptions::default();
        assert!(options.validate_on_change);
        assert!(options.validate_on_blur);
        assert!(options.validate_on_submit);
    }

    #[test]
    fn test_serialization() {
        let options = FormOptions {
            validate_on_change: false,
            validate_on_blur: true,
            validate_on_submit: false,
        };

        let json = serde_json::to_string(&options).unwrap();
        let parsed: FormOptions = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, options);
    }
}

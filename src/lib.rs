//! Formstate - generic form state engine
//!
//! Tracks per-field value/validation/touch/dirty status for an ordered record
//! of named fields, computes aggregate form validity, and mediates submission
//! through a validate-then-submit protocol. No rendering, no transport, no
//! persistence: the engine owns only the in-memory lifecycle of a form.
//!
//! ```
//! use formstate::{FieldValue, FormEngine, Validator, rules};
//! use indexmap::IndexMap;
//!
//! let mut values = IndexMap::new();
//! values.insert("email".to_string(), FieldValue::text(""));
//! values.insert("age".to_string(), FieldValue::number(0));
//!
//! let mut validators: IndexMap<String, Validator<FieldValue>> = IndexMap::new();
//! validators.insert("email".to_string(), rules::required());
//!
//! let mut form = FormEngine::with_defaults(values, validators).unwrap();
//! form.set_field_value("email", FieldValue::text("a@b.com")).unwrap();
//! assert!(form.validate_form());
//! assert!(form.snapshot().is_valid);
//! ```

pub mod engine;
pub mod error;
pub mod field;
pub mod options;
pub mod snapshot;
pub mod submit;
pub mod validate;

pub use engine::{FormEngine, SubmitOutcome};
pub use error::FormError;
pub use field::{FieldState, FieldValue};
pub use options::FormOptions;
pub use snapshot::FormSnapshot;
pub use submit::SubmitHandler;
pub use validate::{rules, Validator, Values};

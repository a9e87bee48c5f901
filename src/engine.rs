//! The form state engine

use crate::error::FormError;
use crate::field::FieldState;
use crate::options::FormOptions;
use crate::snapshot::FormSnapshot;
use crate::validate::{Validator, Values};
use indexmap::IndexMap;
use std::future::Future;

/// Outcome of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed (or was disabled) and the submitter ran
    Submitted,
    /// The pre-submit validation pass failed; the submitter was not invoked
    Rejected,
}

/// Owns per-field state for one logical form instance.
///
/// The field set is fixed at construction from the initial values; fields are
/// mutated only through the methods here and iterate in construction order.
/// Writes taking a field name reject unknown names with
/// [`FormError::UnknownField`]; reads are permissive and return
/// `None`/`false` instead.
#[derive(Debug, Clone)]
pub struct FormEngine<V> {
    fields: IndexMap<String, FieldState<V>>,
    initial: IndexMap<String, V>,
    validators: IndexMap<String, Validator<V>>,
    options: FormOptions,
}

impl<V: Clone> FormEngine<V> {
    /// Build an engine from initial values, validators, and trigger options.
    ///
    /// Every validator key must name a field present in `initial_values`;
    /// a stray key is a programming error and fails construction.
    pub fn new(
        initial_values: IndexMap<String, V>,
        validators: IndexMap<String, Validator<V>>,
        options: FormOptions,
    ) -> Result<Self, FormError> {
        for name in validators.keys() {
            if !initial_values.contains_key(name) {
                return Err(FormError::UnknownValidator(name.clone()));
            }
        }

        let fields = initial_values
            .iter()
            .map(|(name, value)| (name.clone(), FieldState::new(value.clone())))
            .collect();

        Ok(Self {
            fields,
            initial: initial_values,
            validators,
            options,
        })
    }

    /// Engine with default options (all triggers on)
    pub fn with_defaults(
        initial_values: IndexMap<String, V>,
        validators: IndexMap<String, Validator<V>>,
    ) -> Result<Self, FormError> {
        Self::new(initial_values, validators, FormOptions::default())
    }

    /// The configured validation triggers
    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// Field names in construction order
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    // ---- writes (strict: unknown names are rejected) ----

    /// Set a field's value and mark it dirty.
    ///
    /// With `validate_on_change`, the field's validator runs against the
    /// post-mutation value set. Other fields' touched/dirty flags are
    /// untouched.
    pub fn set_field_value(&mut self, name: &str, value: V) -> Result<(), FormError> {
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.value = value;
        field.dirty = true;
        if self.options.validate_on_change {
            self.revalidate(name);
        }
        Ok(())
    }

    /// Mark a field touched.
    ///
    /// Marking runs the field's validator when `validate_on_blur` is set.
    /// `touched` is monotonic: passing `false` never lowers an
    /// already-touched field and never clears its error; only
    /// [`reset_field`](Self::reset_field) / [`reset_form`](Self::reset_form)
    /// untouch.
    pub fn set_field_touched(&mut self, name: &str, touched: bool) -> Result<(), FormError> {
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        if touched {
            field.touched = true;
            if self.options.validate_on_blur {
                self.revalidate(name);
            }
        }
        Ok(())
    }

    /// Directly override a field's error, bypassing validators.
    ///
    /// Used for server-side or otherwise out-of-band errors. Leaves the
    /// field's value, touched, and dirty flags alone. An empty message
    /// means valid and is normalized to `None`, matching validator output.
    pub fn set_field_error(&mut self, name: &str, error: Option<String>) -> Result<(), FormError> {
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.error = error.filter(|message| !message.is_empty());
        Ok(())
    }

    /// Bulk value write.
    ///
    /// Keys absent from `partial` are untouched. An unknown key rejects the
    /// whole call before any mutation, so a failed call leaves state as-is.
    pub fn set_values(&mut self, partial: Values<V>) -> Result<(), FormError> {
        if let Some(name) = partial.keys().find(|k| !self.fields.contains_key(*k)) {
            return Err(FormError::UnknownField(name.clone()));
        }
        for (name, value) in partial {
            self.set_field_value(&name, value)?;
        }
        Ok(())
    }

    /// Bulk error override, same per-key semantics as [`set_field_error`](Self::set_field_error).
    ///
    /// Rejects the whole call on the first unknown key, before any mutation.
    pub fn set_errors(
        &mut self,
        partial: IndexMap<String, Option<String>>,
    ) -> Result<(), FormError> {
        if let Some(name) = partial.keys().find(|k| !self.fields.contains_key(*k)) {
            return Err(FormError::UnknownField(name.clone()));
        }
        for (name, error) in partial {
            self.set_field_error(&name, error)?;
        }
        Ok(())
    }

    /// Clear every field's error; values and touched/dirty flags are kept
    pub fn clear_errors(&mut self) {
        for field in self.fields.values_mut() {
            field.error = None;
        }
    }

    /// Restore one field to its construction defaults
    pub fn reset_field(&mut self, name: &str) -> Result<(), FormError> {
        let initial = self
            .initial
            .get(name)
            .cloned()
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.fields[name] = FieldState::new(initial);
        Ok(())
    }

    /// Restore every field to its construction defaults.
    ///
    /// Validators and options are unchanged.
    pub fn reset_form(&mut self) {
        for (name, value) in &self.initial {
            self.fields[name] = FieldState::new(value.clone());
        }
    }

    // ---- validation ----

    /// Run every field's validator in construction order.
    ///
    /// A full pass with no short-circuit: after the call every field's
    /// error reflects its current validity. Returns `true` iff all fields
    /// are valid. Fields without a validator are always valid.
    pub fn validate_form(&mut self) -> bool {
        let values = self.values();
        let names: Vec<String> = self.fields.keys().cloned().collect();
        let mut all_valid = true;
        for name in names {
            let error = self.validate_field(&name, &values);
            all_valid &= error.is_none();
            if let Some(field) = self.fields.get_mut(&name) {
                field.error = error;
            }
        }
        tracing::debug!("validation pass complete, valid={all_valid}");
        all_valid
    }

    /// Validate one field against a values snapshot
    fn validate_field(&self, name: &str, values: &Values<V>) -> Option<String> {
        let validator = self.validators.get(name)?;
        let field = self.fields.get(name)?;
        validator.check(&field.value, values)
    }

    /// Re-run one field's validator against the live value set
    fn revalidate(&mut self, name: &str) {
        let values = self.values();
        let error = self.validate_field(name, &values);
        if let Some(field) = self.fields.get_mut(name) {
            field.error = error;
        }
    }

    // ---- reads (permissive: unknown names return defaults) ----

    /// A field's current value, or `None` for an unknown name
    pub fn field_value(&self, name: &str) -> Option<&V> {
        self.fields.get(name).map(|f| &f.value)
    }

    /// A field's current error message, if any
    pub fn field_error(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|f| f.error.as_deref())
    }

    /// Whether a field has been touched; `false` for an unknown name
    pub fn field_touched(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|f| f.touched)
    }

    /// Whether a field's value has ever changed; `false` for an unknown name
    pub fn field_dirty(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|f| f.dirty)
    }

    /// True iff no field carries an error
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(FieldState::is_valid)
    }

    /// True iff any field is dirty
    pub fn is_dirty(&self) -> bool {
        self.fields.values().any(|f| f.dirty)
    }

    /// True iff any field is touched
    pub fn is_touched(&self) -> bool {
        self.fields.values().any(|f| f.touched)
    }

    /// Value copy of every field's current value, in construction order
    pub fn values(&self) -> Values<V> {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value.clone()))
            .collect()
    }

    /// Derive the aggregate snapshot for the rendering layer
    pub fn snapshot(&self) -> FormSnapshot<V> {
        FormSnapshot {
            is_valid: self.is_valid(),
            is_dirty: self.is_dirty(),
            is_touched: self.is_touched(),
            errors: self
                .fields
                .iter()
                .map(|(name, field)| (name.clone(), field.error.clone()))
                .collect(),
            values: self.values(),
        }
    }

    // ---- submission ----

    /// Run the validate-then-submit protocol with a one-shot submitter.
    ///
    /// With `validate_on_submit`, a full validation pass gates the
    /// submission: on failure `on_submit` is never invoked and the returned
    /// future resolves to [`SubmitOutcome::Rejected`]. Otherwise the current
    /// values are frozen into a snapshot handed to `on_submit`, whose error
    /// propagates unmodified.
    ///
    /// The returned future owns the frozen snapshot and does not borrow the
    /// engine, so fields may keep changing while a submission is pending;
    /// those edits never leak into the already-captured values. There is no
    /// cancellation primitive here; build one inside `on_submit` if needed.
    pub fn handle_submit<F, Fut, E>(
        &mut self,
        on_submit: F,
    ) -> impl Future<Output = Result<SubmitOutcome, E>>
    where
        F: FnOnce(Values<V>) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let rejected = self.options.validate_on_submit && !self.validate_form();
        if rejected {
            tracing::debug!("submission rejected by validation");
        }
        let values = self.values();
        async move {
            if rejected {
                return Ok(SubmitOutcome::Rejected);
            }
            on_submit(values).await?;
            Ok(SubmitOutcome::Submitted)
        }
    }
}

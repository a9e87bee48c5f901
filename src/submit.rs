//! Trait abstraction for submission targets to enable mocking in tests

use crate::engine::{FormEngine, SubmitOutcome};
use crate::validate::Values;
use anyhow::Result;
use async_trait::async_trait;

/// Trait for the collaborator that receives a validated form's values,
/// enabling mocking in tests.
///
/// A rendering or transport layer implements this once; the engine drives
/// the validate-then-submit protocol through it via
/// [`FormEngine::submit_to`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler<V: Send + 'static>: Send {
    /// Receive the frozen value snapshot of a form that passed validation
    async fn submit(&mut self, values: Values<V>) -> Result<()>;
}

impl<V: Clone + Send + 'static> FormEngine<V> {
    /// [`handle_submit`](FormEngine::handle_submit) driven through a
    /// [`SubmitHandler`] instead of a one-shot closure
    pub async fn submit_to<H>(&mut self, handler: &mut H) -> Result<SubmitOutcome>
    where
        H: SubmitHandler<V> + ?Sized,
    {
        self.handle_submit(|values| handler.submit(values)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;
    use crate::validate::{rules, Validator};
    use indexmap::IndexMap;

    fn engine_with_required_email() -> FormEngine<FieldValue> {
        let mut values = IndexMap::new();
        values.insert("email".to_string(), FieldValue::text(""));
        let mut validators: IndexMap<String, Validator<FieldValue>> = IndexMap::new();
        validators.insert("email".to_string(), rules::required());
        FormEngine::with_defaults(values, validators).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_handler() {
        let mut engine = engine_with_required_email();
        let mut handler = MockSubmitHandler::<FieldValue>::new();
        handler.expect_submit().times(0);

        let outcome = engine.submit_to(&mut handler).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Rejected);
    }

    #[tokio::test]
    async fn test_valid_form_hands_values_to_handler() {
        let mut engine = engine_with_required_email();
        engine
            .set_field_value("email", FieldValue::text("a@b.com"))
            .unwrap();

        let mut handler = MockSubmitHandler::<FieldValue>::new();
        handler
            .expect_submit()
            .withf(|values| values["email"] == FieldValue::text("a@b.com"))
            .times(1)
            .returning(|_| Ok(()));

        let outcome = engine.submit_to(&mut handler).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Submitted);
    }

    #[tokio::test]
    async fn test_handler_error_propagates() {
        let mut engine = engine_with_required_email();
        engine
            .set_field_value("email", FieldValue::text("a@b.com"))
            .unwrap();

        let mut handler = MockSubmitHandler::<FieldValue>::new();
        handler
            .expect_submit()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("backend down")));

        let result = engine.submit_to(&mut handler).await;
        assert_eq!(result.unwrap_err().to_string(), "backend down");
    }
}

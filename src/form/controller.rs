//! State machine behind the form: pick a form type, edit its fields, submit.

use crate::errors::FormError;
use crate::form::progress::Progress;
use crate::form::validation;
use crate::form::values::FormValues;
use crate::schema::{FieldDescriptor, SchemaStore};
use crate::submissions::SubmissionRecord;

/// Lifecycle of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState<'a> {
    /// No form type selected.
    Idle,
    Editing(EditingForm<'a>),
}

/// A selected form type with its fields and the values entered so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingForm<'a> {
    pub form_type: String,
    pub fields: &'a [FieldDescriptor],
    pub values: FormValues,
    pub progress: Progress,
}

impl<'a> EditingForm<'a> {
    fn new(form_type: &str, fields: &'a [FieldDescriptor]) -> Self {
        Self {
            form_type: form_type.to_string(),
            fields,
            values: FormValues::new(),
            progress: Progress::compute(fields, &FormValues::new()),
        }
    }

    fn field(&self, name: &str) -> Option<&'a FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    fn missing_required(&self) -> Vec<&'a FieldDescriptor> {
        self.fields
            .iter()
            .filter(|field| field.required && !self.values.is_filled(field.name))
            .collect()
    }
}

/// Owns the selected form type and the in-progress values.
pub struct FormController<'a> {
    schema: &'a SchemaStore,
    state: FormState<'a>,
}

impl FormController<'static> {
    /// Controller over the built-in form types.
    pub fn builtin() -> Self {
        Self::new(SchemaStore::builtin())
    }
}

impl<'a> FormController<'a> {
    pub fn new(schema: &'a SchemaStore) -> Self {
        Self {
            schema,
            state: FormState::Idle,
        }
    }

    pub fn schema(&self) -> &'a SchemaStore {
        self.schema
    }

    pub fn state(&self) -> &FormState<'a> {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, FormState::Editing(_))
    }

    pub fn form_type(&self) -> Option<&str> {
        match &self.state {
            FormState::Idle => None,
            FormState::Editing(form) => Some(form.form_type.as_str()),
        }
    }

    /// Active fields; empty when idle or when the form type is unknown.
    pub fn fields(&self) -> &'a [FieldDescriptor] {
        match &self.state {
            FormState::Idle => &[],
            FormState::Editing(form) => form.fields,
        }
    }

    pub fn values(&self) -> Option<&FormValues> {
        match &self.state {
            FormState::Idle => None,
            FormState::Editing(form) => Some(&form.values),
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values().and_then(|values| values.get(name))
    }

    pub fn progress(&self) -> Progress {
        match &self.state {
            FormState::Idle => Progress::default(),
            FormState::Editing(form) => form.progress,
        }
    }

    /// Switches to `key`, discarding any unsaved values. An empty key
    /// returns to idle; an unknown key yields a form without fields.
    pub fn select_form_type(&mut self, key: &str) {
        let key = key.trim();
        if key.is_empty() {
            self.reset();
            return;
        }

        let fields = self.schema.lookup(key);
        if fields.is_empty() {
            tracing::debug!(form_type = key, "form type has no fields");
        }
        if let FormState::Editing(previous) = &self.state {
            if !previous.values.is_empty() {
                tracing::debug!(
                    form_type = %previous.form_type,
                    discarded = previous.values.len(),
                    "discarding unsaved values"
                );
            }
        }
        tracing::info!(form_type = key, fields = fields.len(), "form type selected");
        self.state = FormState::Editing(EditingForm::new(key, fields));
    }

    /// Stores `value` under `name` and recomputes progress.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<Progress, FormError> {
        let FormState::Editing(form) = &mut self.state else {
            return Err(FormError::NoFormSelected);
        };
        let field = form.field(name).ok_or_else(|| FormError::UnknownField {
            form: form.form_type.clone(),
            field: name.to_string(),
        })?;

        let normalized = validation::normalize(field, value)?;
        form.values.set(field.name, normalized);
        form.progress = Progress::compute(form.fields, &form.values);
        tracing::debug!(
            form_type = %form.form_type,
            field = field.name,
            progress = form.progress.percent(),
            "field updated"
        );
        Ok(form.progress)
    }

    /// Labels of required fields that are still empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        match &self.state {
            FormState::Idle => Vec::new(),
            FormState::Editing(form) => form
                .missing_required()
                .into_iter()
                .map(|field| field.label)
                .collect(),
        }
    }

    /// Snapshots the values and returns to idle. Refused, with the state
    /// left as is, while a required field is empty.
    pub fn submit(&mut self) -> Result<SubmissionRecord, FormError> {
        let FormState::Editing(form) = &self.state else {
            return Err(FormError::NoFormSelected);
        };

        let missing = form.missing_required();
        if !missing.is_empty() {
            return Err(FormError::MissingRequired(
                missing.iter().map(|field| field.label.to_string()).collect(),
            ));
        }

        let record = SubmissionRecord::capture(&form.form_type, form.fields, &form.values);
        tracing::info!(form_type = %form.form_type, id = %record.id, "form submitted");
        self.state = FormState::Idle;
        Ok(record)
    }

    /// Drops the current form without producing a record.
    pub fn reset(&mut self) {
        if let FormState::Editing(form) = &self.state {
            tracing::info!(form_type = %form.form_type, "form reset");
        }
        self.state = FormState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, FormDescriptor};

    #[test]
    fn starts_idle() {
        let controller = FormController::builtin();
        assert_eq!(controller.state(), &FormState::Idle);
        assert!(controller.fields().is_empty());
        assert_eq!(controller.progress().percent(), 0.0);
    }

    #[test]
    fn select_loads_fields_with_empty_values() {
        let mut controller = FormController::builtin();
        controller.select_form_type("addressInfo");
        assert_eq!(controller.form_type(), Some("addressInfo"));
        assert_eq!(controller.fields().len(), 4);
        assert!(controller.values().unwrap().is_empty());
        assert_eq!(controller.progress().percent(), 0.0);
    }

    #[test]
    fn changing_form_type_discards_values() {
        let mut controller = FormController::builtin();
        controller.select_form_type("userInfo");
        controller.set_field("firstName", "Ann").unwrap();
        assert_eq!(controller.progress().percent(), 50.0);

        controller.select_form_type("paymentInfo");
        assert!(controller.values().unwrap().is_empty());
        assert_eq!(controller.progress().percent(), 0.0);

        controller.select_form_type("userInfo");
        assert_eq!(controller.value("firstName"), None);
    }

    #[test]
    fn empty_key_returns_to_idle() {
        let mut controller = FormController::builtin();
        controller.select_form_type("userInfo");
        controller.select_form_type("");
        assert!(!controller.is_editing());
    }

    #[test]
    fn unknown_key_edits_a_form_without_fields() {
        let mut controller = FormController::builtin();
        controller.select_form_type("shippingInfo");
        assert!(controller.is_editing());
        assert!(controller.fields().is_empty());
        assert!(matches!(
            controller.set_field("street", "x"),
            Err(FormError::UnknownField { .. })
        ));
    }

    #[test]
    fn set_field_requires_selection() {
        let mut controller = FormController::builtin();
        assert_eq!(
            controller.set_field("firstName", "Ann"),
            Err(FormError::NoFormSelected)
        );
    }

    #[test]
    fn clearing_a_field_lowers_progress() {
        let mut controller = FormController::builtin();
        controller.select_form_type("userInfo");
        controller.set_field("firstName", "Ann").unwrap();
        controller.set_field("lastName", "Lee").unwrap();
        assert_eq!(controller.progress().percent(), 100.0);

        let progress = controller.set_field("lastName", "").unwrap();
        assert_eq!(progress.percent(), 50.0);
    }

    #[test]
    fn rejected_value_leaves_state_untouched() {
        let mut controller = FormController::builtin();
        controller.select_form_type("userInfo");
        controller.set_field("age", "30").unwrap();
        assert!(controller.set_field("age", "thirty").is_err());
        assert_eq!(controller.value("age"), Some("30"));
    }

    #[test]
    fn submit_snapshots_and_resets() {
        let mut controller = FormController::builtin();
        controller.select_form_type("userInfo");
        controller.set_field("firstName", "Ann").unwrap();
        controller.set_field("lastName", "Lee").unwrap();

        let record = controller.submit().unwrap();
        assert_eq!(record.form_type, "userInfo");
        assert_eq!(record.get("firstName"), Some("Ann"));
        assert_eq!(record.get("lastName"), Some("Lee"));
        assert_eq!(record.get("age"), None);
        assert!(!controller.is_editing());
        assert_eq!(controller.progress().percent(), 0.0);
    }

    #[test]
    fn submit_refused_while_required_missing() {
        let mut controller = FormController::builtin();
        controller.select_form_type("addressInfo");
        controller.set_field("street", "1 Main St").unwrap();

        match controller.submit() {
            Err(FormError::MissingRequired(labels)) => {
                assert_eq!(labels, vec!["City".to_string(), "State".to_string()])
            }
            other => panic!("Unexpected result: {:?}", other),
        }
        assert!(controller.is_editing());
        assert_eq!(controller.value("street"), Some("1 Main St"));
    }

    #[test]
    fn whitespace_text_counts_as_filled() {
        let mut controller = FormController::builtin();
        controller.select_form_type("userInfo");
        let progress = controller.set_field("firstName", "   ").unwrap();
        assert_eq!(controller.value("firstName"), Some("   "));
        assert_eq!(progress.rounded(), 50);

        controller.set_field("lastName", "Lee").unwrap();
        let record = controller.submit().unwrap();
        assert_eq!(record.get("firstName"), Some("   "));
    }

    #[test]
    fn form_without_required_fields_submits_at_zero_progress() {
        let schema = SchemaStore::new(vec![FormDescriptor::new(
            "feedback",
            "Feedback",
            vec![FieldDescriptor::new("comment", "Comment", FieldKind::Text).with_optional()],
        )]);
        let mut controller = FormController::new(&schema);
        controller.select_form_type("feedback");
        controller.set_field("comment", "Great").unwrap();
        assert_eq!(controller.progress().percent(), 0.0);
        assert_eq!(controller.submit().unwrap().get("comment"), Some("Great"));
    }
}

//! Step-by-step entry of every field of the selected form.
//!
//! The wizard walks the active fields in schema order, feeding answers into
//! the [`FormController`]. Prompting is delegated to a [`FormInteraction`] so
//! the terminal implementation can be swapped for a scripted one in tests.
//! The wizard never submits; callers decide what to do with a completed run.

use crate::errors::FormError;
use crate::form::controller::FormController;
use crate::form::progress::Progress;
use crate::schema::{FieldDescriptor, FieldKind};

/// Answer to a single field prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    /// User supplied a value (possibly empty).
    Value(String),
    /// Keep whatever the field currently holds.
    Keep,
    /// Go back to the previous field.
    Back,
    /// Stop the wizard, leaving entered values in place.
    Cancel,
}

/// Answer to the final review step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationResponse {
    Confirm,
    Back,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    Completed,
    Cancelled,
}

/// Everything needed to render one field prompt.
pub struct PromptContext<'a> {
    pub descriptor: &'a FieldDescriptor,
    pub current: Option<&'a str>,
    pub index: usize,
    pub total: usize,
    pub progress: Progress,
}

pub trait FormInteraction {
    fn prompt_field(&mut self, context: &PromptContext<'_>) -> PromptResponse;

    /// Called when an answer is rejected; the same field is asked again.
    fn report_invalid(&mut self, error: &FormError);

    /// `summary` holds `(label, value)` pairs in field order.
    fn confirm(
        &mut self,
        summary: &[(String, String)],
        progress: Progress,
    ) -> ConfirmationResponse;
}

/// Drives a [`FormController`] through its fields.
pub struct FormWizard<'c, 'a> {
    controller: &'c mut FormController<'a>,
}

impl<'c, 'a> FormWizard<'c, 'a> {
    pub fn new(controller: &'c mut FormController<'a>) -> Self {
        Self { controller }
    }

    pub fn run<I: FormInteraction>(
        &mut self,
        interaction: &mut I,
    ) -> Result<WizardOutcome, FormError> {
        if !self.controller.is_editing() {
            return Err(FormError::NoFormSelected);
        }

        let fields = self.controller.fields();
        let mut index = 0;

        loop {
            let Some(field) = fields.get(index) else {
                match interaction.confirm(&self.summary(), self.controller.progress()) {
                    ConfirmationResponse::Confirm => return Ok(WizardOutcome::Completed),
                    ConfirmationResponse::Back if !fields.is_empty() => {
                        index = fields.len() - 1;
                        continue;
                    }
                    ConfirmationResponse::Back | ConfirmationResponse::Cancel => {
                        return Ok(WizardOutcome::Cancelled)
                    }
                }
            };

            let response = {
                let context = PromptContext {
                    descriptor: field,
                    current: self.controller.value(field.name),
                    index,
                    total: fields.len(),
                    progress: self.controller.progress(),
                };
                interaction.prompt_field(&context)
            };

            match response {
                PromptResponse::Cancel => {
                    tracing::debug!(field = field.name, "wizard cancelled");
                    return Ok(WizardOutcome::Cancelled);
                }
                PromptResponse::Back => {
                    index = index.saturating_sub(1);
                }
                PromptResponse::Keep => {
                    if field.required && self.is_blank(field.name) {
                        interaction
                            .report_invalid(&FormError::MissingRequired(vec![field.label.into()]));
                    } else {
                        index += 1;
                    }
                }
                PromptResponse::Value(raw) => {
                    if raw.is_empty() && field.required {
                        interaction
                            .report_invalid(&FormError::MissingRequired(vec![field.label.into()]));
                        continue;
                    }
                    match self.controller.set_field(field.name, &raw) {
                        // Blank input for a trimmed kind stores nothing.
                        Ok(_) if field.required && self.is_blank(field.name) => interaction
                            .report_invalid(&FormError::MissingRequired(vec![field.label.into()])),
                        Ok(_) => index += 1,
                        Err(err) => interaction.report_invalid(&err),
                    }
                }
            }
        }
    }

    fn is_blank(&self, name: &str) -> bool {
        self.controller.value(name).map_or(true, str::is_empty)
    }

    fn summary(&self) -> Vec<(String, String)> {
        self.controller
            .fields()
            .iter()
            .map(|field| {
                let value = match self.controller.value(field.name) {
                    Some(value) if !value.is_empty() => match field.kind {
                        FieldKind::Password => "*".repeat(value.chars().count()),
                        _ => value.to_string(),
                    },
                    _ => "[unfilled]".to_string(),
                };
                (field.label.to_string(), value)
            })
            .collect()
    }
}

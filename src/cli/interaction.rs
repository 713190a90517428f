//! Terminal prompts for the `fill` wizard.

use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

use crate::errors::FormError;
use crate::form::{ConfirmationResponse, FormInteraction, Progress, PromptContext, PromptResponse};
use crate::render::{progress_bar, DROPDOWN_PLACEHOLDER};
use crate::schema::FieldKind;

use super::output;

const BACK_TOKEN: &str = ":back";
const CANCEL_TOKEN: &str = ":cancel";
const BACK_OPTION: &str = "← Back";

/// Prompts with dialoguer; ESC or a prompt failure cancels the wizard.
pub struct DialoguerInteraction<'t> {
    theme: &'t ColorfulTheme,
    progress_width: usize,
    plain: bool,
}

impl<'t> DialoguerInteraction<'t> {
    pub fn new(theme: &'t ColorfulTheme, progress_width: usize, plain: bool) -> Self {
        Self {
            theme,
            progress_width,
            plain,
        }
    }

    fn step_title(context: &PromptContext<'_>) -> String {
        let marker = if context.descriptor.required { " *" } else { "" };
        format!(
            "Step {}/{}: {}{}",
            context.index + 1,
            context.total,
            context.descriptor.label,
            marker
        )
    }

    fn print_header(&self, context: &PromptContext<'_>) {
        output::section(Self::step_title(context));
        output::info(progress_bar(context.progress, self.progress_width, self.plain));
        if context.index == 0 {
            output::hint(format!("Type `{CANCEL_TOKEN}` to stop."));
        } else {
            output::hint(format!(
                "Type `{BACK_TOKEN}` to revisit the previous field or `{CANCEL_TOKEN}` to stop."
            ));
        }
    }

    fn prompt_text(&mut self, context: &PromptContext<'_>) -> PromptResponse {
        let hint = match context.descriptor.kind {
            FieldKind::Number => " (number)",
            FieldKind::Date => " (YYYY-MM-DD)",
            _ => "",
        };
        let mut input = Input::<String>::with_theme(self.theme)
            .with_prompt(format!("{}{}", context.descriptor.label, hint))
            .allow_empty(true);
        if let Some(current) = context.current {
            input = input.with_initial_text(current);
        }
        match input.interact_text() {
            Ok(value) => interpret_text(value, context.current),
            Err(err) => {
                tracing::debug!(error = %err, "text prompt aborted");
                PromptResponse::Cancel
            }
        }
    }

    fn prompt_password(&mut self, context: &PromptContext<'_>) -> PromptResponse {
        if context.current.is_some_and(|value| !value.is_empty()) {
            output::hint("Leave empty to keep the stored value.");
        }
        let result = Password::with_theme(self.theme)
            .with_prompt(context.descriptor.label)
            .allow_empty_password(true)
            .interact();
        match result {
            Ok(value) if value.is_empty() && context.current.is_some() => PromptResponse::Keep,
            Ok(value) => interpret_text(value, None),
            Err(err) => {
                tracing::debug!(error = %err, "password prompt aborted");
                PromptResponse::Cancel
            }
        }
    }

    fn prompt_choice(&mut self, context: &PromptContext<'_>, options: &[String]) -> PromptResponse {
        let mut items = Vec::with_capacity(options.len() + 2);
        items.push(DROPDOWN_PLACEHOLDER.to_string());
        items.extend(options.iter().cloned());
        if context.index > 0 {
            items.push(BACK_OPTION.to_string());
        }

        let default = context
            .current
            .and_then(|current| options.iter().position(|option| option == current))
            .map(|position| position + 1)
            .unwrap_or(0);

        let selection = Select::with_theme(self.theme)
            .with_prompt(context.descriptor.label)
            .items(&items)
            .default(default)
            .interact_opt();

        match selection {
            Ok(Some(0)) => PromptResponse::Value(String::new()),
            Ok(Some(idx)) if idx <= options.len() => {
                let choice = &options[idx - 1];
                if context.current == Some(choice.as_str()) {
                    PromptResponse::Keep
                } else {
                    PromptResponse::Value(choice.clone())
                }
            }
            Ok(Some(_)) => PromptResponse::Back,
            Ok(None) => PromptResponse::Cancel,
            Err(err) => {
                tracing::debug!(error = %err, "choice prompt aborted");
                PromptResponse::Cancel
            }
        }
    }
}

fn interpret_text(value: String, current: Option<&str>) -> PromptResponse {
    match value.trim() {
        BACK_TOKEN => PromptResponse::Back,
        CANCEL_TOKEN => PromptResponse::Cancel,
        _ if current == Some(value.as_str()) => PromptResponse::Keep,
        _ => PromptResponse::Value(value),
    }
}

impl FormInteraction for DialoguerInteraction<'_> {
    fn prompt_field(&mut self, context: &PromptContext<'_>) -> PromptResponse {
        self.print_header(context);
        match &context.descriptor.kind {
            FieldKind::Dropdown(options) => self.prompt_choice(context, options),
            FieldKind::Password => self.prompt_password(context),
            FieldKind::Text | FieldKind::Number | FieldKind::Date => self.prompt_text(context),
        }
    }

    fn report_invalid(&mut self, error: &FormError) {
        output::warning(error);
    }

    fn confirm(
        &mut self,
        summary: &[(String, String)],
        progress: Progress,
    ) -> ConfirmationResponse {
        output::section("Review");
        let entries: Vec<(&str, String)> = summary
            .iter()
            .map(|(label, value)| (label.as_str(), value.clone()))
            .collect();
        output::two_column(&entries);
        output::info(progress_bar(progress, self.progress_width, self.plain));

        let choices = ["Submit", "Edit previous field", "Cancel"];
        let selection = Select::with_theme(self.theme)
            .with_prompt("Submit this form?")
            .items(&choices)
            .default(0)
            .interact_opt();
        match selection {
            Ok(Some(0)) => ConfirmationResponse::Confirm,
            Ok(Some(1)) => ConfirmationResponse::Back,
            _ => ConfirmationResponse::Cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_tokens_map_to_navigation() {
        assert_eq!(
            interpret_text(" :back ".into(), None),
            PromptResponse::Back
        );
        assert_eq!(
            interpret_text(":cancel".into(), Some("Ann")),
            PromptResponse::Cancel
        );
    }

    #[test]
    fn unchanged_text_keeps_current_value() {
        assert_eq!(
            interpret_text("Ann".into(), Some("Ann")),
            PromptResponse::Keep
        );
        assert_eq!(
            interpret_text("Bo".into(), Some("Ann")),
            PromptResponse::Value("Bo".into())
        );
        assert_eq!(interpret_text(String::new(), None), PromptResponse::Value(String::new()));
    }
}

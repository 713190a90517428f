use crate::app::SUBMIT_ACK;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::interaction::DialoguerInteraction;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::form::{FormWizard, WizardOutcome};
use crate::render::{progress_bar, render_table, render_view, text::render_form};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("forms", "List available form types", "forms", cmd_forms),
        CommandEntry::new(
            "select",
            "Choose a form type (no argument clears the selection)",
            "select [form]",
            cmd_select,
        ),
        CommandEntry::new(
            "set",
            "Set a field of the current form",
            "set <field> <value...>",
            cmd_set,
        ),
        CommandEntry::new(
            "clear-field",
            "Empty a field of the current form",
            "clear-field <field>",
            cmd_clear_field,
        ),
        CommandEntry::new(
            "fill",
            "Fill the current form step by step",
            "fill",
            cmd_fill,
        ),
        CommandEntry::new("show", "Render the whole screen", "show", cmd_show),
        CommandEntry::new(
            "progress",
            "Show completion of required fields",
            "progress",
            cmd_progress,
        ),
        CommandEntry::new("submit", "Submit the current form", "submit", cmd_submit),
        CommandEntry::new(
            "reset",
            "Discard the current form without submitting",
            "reset",
            cmd_reset,
        ),
    ]
}

fn cmd_forms(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let controller = context.app.controller();
    let selected = controller.form_type();
    output::section("Form types");
    let entries: Vec<(&str, String)> = controller
        .schema()
        .form_types()
        .into_iter()
        .map(|(key, title)| {
            let marker = if selected == Some(key) { " (selected)" } else { "" };
            (key, format!("{title}{marker}"))
        })
        .collect();
    output::two_column(&entries);
    Ok(())
}

fn cmd_select(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let requested = args.join(" ");
    let requested = requested.trim();
    if requested.is_empty() {
        context.app.select_form_type("");
        output::info("Form selection cleared.");
        return Ok(());
    }

    let schema = context.app.controller().schema();
    match schema.resolve_key(requested) {
        Some(key) => context.app.select_form_type(key),
        None => {
            context.app.select_form_type(requested);
            output::warning(format!("`{requested}` is not a known form type; it has no fields."));
        }
    }
    print_form(context);
    Ok(())
}

/// Accepts field names in any ASCII case.
fn resolve_field<'a>(context: &ShellContext, name: &'a str) -> &'a str {
    context
        .app
        .controller()
        .fields()
        .iter()
        .find(|field| field.name.eq_ignore_ascii_case(name))
        .map(|field| field.name)
        .unwrap_or(name)
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(name) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "usage: set <field> <value...>".into(),
        ));
    };
    let name = resolve_field(context, name);
    let value = args[1..].join(" ");
    let progress = context.app.set_field(name, &value)?;
    let options = context.render_options();
    output::info(format!(
        "{} {}",
        name,
        progress_bar(progress, options.progress_width, options.plain)
    ));
    Ok(())
}

fn cmd_clear_field(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: clear-field <field>".into(),
        ));
    };
    let name = resolve_field(context, name);
    let progress = context.app.set_field(name, "")?;
    output::info(format!("Cleared `{name}`. Progress: {progress}"));
    Ok(())
}

fn cmd_fill(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.mode != CliMode::Interactive {
        return Err(CommandError::InvalidArguments(
            "`fill` needs an interactive terminal; use `set` in scripts".into(),
        ));
    }
    if !context.app.controller().is_editing() {
        return Err(crate::errors::FormError::NoFormSelected.into());
    }

    let options = context.render_options();
    let mut interaction =
        DialoguerInteraction::new(&context.theme, options.progress_width, options.plain);
    let outcome = FormWizard::new(context.app.controller_mut()).run(&mut interaction)?;

    match outcome {
        WizardOutcome::Completed => cmd_submit(context, &[]),
        WizardOutcome::Cancelled => {
            output::info("Wizard stopped; entered values were kept.");
            Ok(())
        }
    }
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::block(render_view(&context.app.view(), &context.render_options()));
    Ok(())
}

fn cmd_progress(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let controller = context.app.controller();
    if !controller.is_editing() {
        return Err(crate::errors::FormError::NoFormSelected.into());
    }
    let options = context.render_options();
    let progress = controller.progress();
    output::info(progress_bar(progress, options.progress_width, options.plain));
    let missing = controller.missing_required();
    if !missing.is_empty() {
        output::hint(format!("Still required: {}", missing.join(", ")));
    }
    Ok(())
}

fn cmd_submit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.app.submit()?;
    output::success(SUBMIT_ACK);
    if let Some(table) = context.app.view().table {
        output::block(render_table(&table, &context.render_options()));
    }
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.app.controller().is_editing() {
        output::info("No form selected.");
        return Ok(());
    }
    context.app.controller_mut().reset();
    output::info("Form discarded.");
    Ok(())
}

fn print_form(context: &ShellContext) {
    if let Some(form) = context.app.view().form {
        output::block(render_form(&form, &context.render_options()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::errors::FormError;
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> ShellContext {
        ShellContext::with_config_manager(CliMode::Script, ConfigManager::with_base_dir(dir.path()))
            .unwrap()
    }

    #[test]
    fn select_resolves_keys_case_insensitively() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        ctx.process_line("select USERINFO").unwrap();
        assert_eq!(ctx.app.controller().form_type(), Some("userInfo"));

        ctx.process_line("select").unwrap();
        assert!(!ctx.app.controller().is_editing());
    }

    #[test]
    fn unknown_form_type_is_selected_without_fields() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        ctx.process_line("select surveyInfo").unwrap();
        assert_eq!(ctx.app.controller().form_type(), Some("surveyInfo"));
        assert!(ctx.app.controller().fields().is_empty());
    }

    #[test]
    fn set_joins_words_and_accepts_any_case_field_names() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        ctx.process_line("select addressInfo").unwrap();
        ctx.process_line("set STREET 1 Main St").unwrap();
        assert_eq!(ctx.app.controller().value("street"), Some("1 Main St"));
        assert_eq!(ctx.app.controller().progress().rounded(), 33);

        ctx.process_line("clear-field street").unwrap();
        assert_eq!(ctx.app.controller().progress().rounded(), 0);
    }

    #[test]
    fn submit_requires_required_fields() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        ctx.process_line("select userInfo").unwrap();
        ctx.process_line("set firstName Ann").unwrap();
        let err = ctx.process_line("submit").unwrap_err();
        assert!(matches!(err, CommandError::Form(FormError::MissingRequired(_))));

        ctx.process_line("set lastName Lee").unwrap();
        ctx.process_line("submit").unwrap();
        assert_eq!(ctx.app.submissions().len(), 1);
        assert!(!ctx.app.controller().is_editing());
    }

    #[test]
    fn fill_is_refused_in_script_mode() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        ctx.process_line("select userInfo").unwrap();
        assert!(matches!(
            ctx.process_line("fill"),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn reset_discards_values() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        ctx.process_line("select userInfo").unwrap();
        ctx.process_line("set firstName Ann").unwrap();
        ctx.process_line("reset").unwrap();
        assert!(!ctx.app.controller().is_editing());
        assert!(ctx.app.submissions().is_empty());
    }
}

use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::core::LoopControl;
use crate::cli::output;
use crate::cli::registry::CommandRegistry;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::config::CONFIG_KEYS;
use crate::errors::CliError;
use crate::schema::SchemaStore;

const SCRIPT_ENV: &str = "DYNAMIC_FORM_CLI_SCRIPT";
const CONFIG_ACTIONS: &[&str] = &["show", "set", "reset"];

/// Runs the shell until `exit`, end of input, or a fatal error. Commands are
/// read from stdin without a line editor when `DYNAMIC_FORM_CLI_SCRIPT` is set.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    tracing::info!(?mode, "shell started");

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<FormHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(FormHelper::new(
        &context.registry,
        context.app.controller().schema(),
    )));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    output::section(crate::render::APP_TITLE);
    output::info("Type `forms` to list form types or `help` for all commands.");

    loop {
        if let Some(helper) = editor.helper_mut() {
            helper.form = context.app.controller().form_type().map(str::to_string);
        }

        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                match context.process_line(trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err),
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        match context.process_line(&line?) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
    }
    Ok(())
}

/// Line-editor support: completes command names, form keys after `select`,
/// field names of the selected form after `set` and `clear-field`, dropdown
/// options as the value of `set`, and configuration keys. Hints show the
/// remaining usage of a typed command.
struct FormHelper {
    commands: Vec<(&'static str, &'static str)>,
    schema: &'static SchemaStore,
    form: Option<String>,
}

impl FormHelper {
    fn new(registry: &CommandRegistry, schema: &'static SchemaStore) -> Self {
        Self {
            commands: registry
                .list()
                .iter()
                .map(|entry| (entry.name, entry.usage))
                .collect(),
            schema,
            form: None,
        }
    }

    /// Start of the word under the cursor and its replacement candidates.
    fn candidates(&self, before_cursor: &str) -> (usize, Vec<String>) {
        let start = before_cursor
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let partial = &before_cursor[start..];
        let words: Vec<&str> = before_cursor[..start].split_whitespace().collect();

        let pool: Vec<String> = match words.as_slice() {
            [] => self.commands.iter().map(|(name, _)| name.to_string()).collect(),
            [command] => match command.to_ascii_lowercase().as_str() {
                "select" => self
                    .schema
                    .form_types()
                    .into_iter()
                    .map(|(key, _)| key.to_string())
                    .collect(),
                "set" | "clear-field" => self.field_names(),
                "help" => self.commands.iter().map(|(name, _)| name.to_string()).collect(),
                "config" => CONFIG_ACTIONS.iter().map(|action| action.to_string()).collect(),
                _ => Vec::new(),
            },
            [command, field] if command.eq_ignore_ascii_case("set") => {
                self.dropdown_options(field)
            }
            [command, action]
                if command.eq_ignore_ascii_case("config") && action.eq_ignore_ascii_case("set") =>
            {
                CONFIG_KEYS.iter().map(|key| key.to_string()).collect()
            }
            _ => Vec::new(),
        };

        let needle = partial.trim_start_matches('"').to_ascii_lowercase();
        let matches = pool
            .into_iter()
            .filter(|candidate| candidate.to_ascii_lowercase().starts_with(&needle))
            .map(|candidate| {
                if candidate.contains(char::is_whitespace) {
                    format!("\"{candidate}\"")
                } else {
                    candidate
                }
            })
            .collect();
        (start, matches)
    }

    fn fields(&self) -> &'static [crate::schema::FieldDescriptor] {
        self.form
            .as_deref()
            .map(|form| self.schema.lookup(form))
            .unwrap_or(&[])
    }

    fn field_names(&self) -> Vec<String> {
        self.fields()
            .iter()
            .map(|field| field.name.to_string())
            .collect()
    }

    fn dropdown_options(&self, field: &str) -> Vec<String> {
        self.fields()
            .iter()
            .find(|descriptor| descriptor.name.eq_ignore_ascii_case(field))
            .and_then(|descriptor| descriptor.kind.options())
            .map(|options| options.to_vec())
            .unwrap_or_default()
    }

    /// Usage after the command name once `<command> ` has been typed.
    fn usage_hint(&self, line: &str) -> Option<String> {
        let command = line.strip_suffix(' ')?.trim();
        let (name, usage) = self
            .commands
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(command))?;
        let rest = usage.strip_prefix(name)?.trim_start();
        (!rest.is_empty()).then(|| rest.to_string())
    }
}

impl Helper for FormHelper {}

impl Completer for FormHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for FormHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &ReadlineContext<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        self.usage_hint(line)
    }
}

impl Highlighter for FormHelper {}

impl Validator for FormHelper {}

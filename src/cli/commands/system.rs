use crate::cli::core::{CommandError, CommandResult};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::render::APP_TITLE;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("version", "Show version information", "version", cmd_version),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first() else {
        help::print_overview(&context.registry);
        return Ok(());
    };
    match context.registry.get(raw) {
        Some(entry) => help::print_command(entry),
        None => context.suggest_command(raw),
    }
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section(format!("{} {}", APP_TITLE, env!("CARGO_PKG_VERSION")));
    output::two_column(&[
        ("Package", env!("CARGO_PKG_NAME").to_string()),
        ("Version", env!("CARGO_PKG_VERSION").to_string()),
    ]);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

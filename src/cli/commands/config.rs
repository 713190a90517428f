use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::config::{Config, CONFIG_KEYS};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change display preferences",
        "config [show|set <key> <value>|reset]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let action = args.first().map(|arg| arg.to_lowercase());
    match action.as_deref() {
        None | Some("show") => {
            show_config(context);
            Ok(())
        }
        Some("set") => {
            let (Some(key), Some(_)) = (args.get(1), args.get(2)) else {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    CONFIG_KEYS.join("|")
                )));
            };
            let value = args[2..].join(" ");
            let mut updated = context.config.clone();
            updated.set(key, &value)?;
            context.update_config(updated)?;
            output::success(format!("Set `{}` to `{}`.", key, value.trim()));
            Ok(())
        }
        Some("reset") => {
            context.update_config(Config::default())?;
            output::success("Configuration restored to defaults.");
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}`; expected show, set, or reset"
        ))),
    }
}

fn show_config(context: &ShellContext) {
    output::section("Configuration");
    let mut entries = context.config.entries();
    entries.push(("file", context.config_manager.path().display().to_string()));
    output::two_column(&entries);
}

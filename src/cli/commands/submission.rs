use crate::app::DELETE_ACK;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::render::{render_table, TableView};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "list",
            "Show submitted entries",
            "list [--json]",
            cmd_list,
        ),
        CommandEntry::new(
            "delete",
            "Delete a submitted entry by its row number",
            "delete <row>",
            cmd_delete,
        ),
    ]
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let json = match args {
        [] => false,
        ["--json"] => true,
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: list [--json]".into(),
            ))
        }
    };

    let records = context.app.submissions().as_slice();
    if json {
        output::block(serde_json::to_string_pretty(records)?);
        return Ok(());
    }
    match TableView::build(records) {
        Some(table) => output::block(render_table(&table, &context.render_options())),
        None => output::info("No submissions yet."),
    }
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let row = match args {
        [raw] => raw.parse::<usize>().ok().filter(|row| *row >= 1),
        _ => None,
    }
    .ok_or_else(|| {
        CommandError::InvalidArguments("usage: delete <row> (row numbers start at 1)".into())
    })?;

    match context.app.delete(row - 1) {
        Some(_) => output::success(DELETE_ACK),
        None => output::warning(format!(
            "No submission at row {row}; {} row(s) listed.",
            context.app.submissions().len()
        )),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::shell_context::CliMode;
    use crate::config::ConfigManager;
    use tempfile::TempDir;

    fn context_with_two_records(dir: &TempDir) -> ShellContext {
        let mut ctx = ShellContext::with_config_manager(
            CliMode::Script,
            ConfigManager::with_base_dir(dir.path()),
        )
        .unwrap();
        for (first, last) in [("Ann", "Lee"), ("Bo", "Kim")] {
            ctx.process_line("select userInfo").unwrap();
            ctx.process_line(&format!("set firstName {first}")).unwrap();
            ctx.process_line(&format!("set lastName {last}")).unwrap();
            ctx.process_line("submit").unwrap();
        }
        ctx
    }

    #[test]
    fn delete_uses_one_based_rows() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context_with_two_records(&dir);
        ctx.process_line("delete 1").unwrap();

        let remaining = ctx.app.submissions();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining.first().unwrap().get("firstName"), Some("Bo"));
    }

    #[test]
    fn out_of_range_delete_is_a_warning() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context_with_two_records(&dir);
        ctx.process_line("delete 5").unwrap();
        assert_eq!(ctx.app.submissions().len(), 2);
    }

    #[test]
    fn malformed_rows_are_rejected() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context_with_two_records(&dir);
        for line in ["delete", "delete 0", "delete one", "delete 1 2"] {
            assert!(
                matches!(ctx.process_line(line), Err(CommandError::InvalidArguments(_))),
                "{line}"
            );
        }
        assert!(ctx.process_line("list --csv").is_err());
    }
}

use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    let entries: Vec<(&str, String)> = registry
        .list()
        .iter()
        .map(|entry| (entry.name, entry.description.to_string()))
        .collect();
    output::two_column(&entries);
    output::hint("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    output::two_column(&[
        ("Description", entry.description.to_string()),
        ("Usage", entry.usage.to_string()),
    ]);
}

//! Command table for the shell. Commands are few, so lookups scan a list kept
//! in registration order; that order is also the order `help` and completion
//! use.

use strsim::levenshtein;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Largest edit distance still offered as a suggestion.
const SUGGESTION_DISTANCE: usize = 3;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry`, replacing an earlier command of the same name in place.
    pub fn register(&mut self, entry: CommandEntry) {
        match self.position(entry.name) {
            Some(idx) => self.entries[idx] = entry,
            None => self.entries.push(entry),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Looks up a command, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.position(name).map(|idx| &self.entries[idx])
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }

    pub fn list(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Closest command name to a mistyped `input`, if any is close enough.
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        let needle = input.to_ascii_lowercase();
        self.names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .map(|(_, name)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        for name in ["select", "set", "show", "submit"] {
            registry.register(CommandEntry::new(name, "", name, noop));
        }
        registry
    }

    #[test]
    fn lookup_ignores_case() {
        let registry = registry();
        assert_eq!(registry.get("SUBMIT").map(|entry| entry.name), Some("submit"));
        assert!(registry.get("sub").is_none());
    }

    #[test]
    fn re_registering_keeps_position() {
        let mut registry = registry();
        registry.register(CommandEntry::new("set", "updated", "set", noop));
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["select", "set", "show", "submit"]
        );
        assert_eq!(registry.get("set").map(|entry| entry.description), Some("updated"));
    }

    #[test]
    fn suggestions_stay_within_distance() {
        let registry = registry();
        assert_eq!(registry.suggest("submti"), Some("submit"));
        assert_eq!(registry.suggest("delete-everything"), None);
    }
}

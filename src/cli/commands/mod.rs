//! Command handlers grouped by concern.

pub mod config;
pub mod form;
pub mod submission;
pub mod system;

use crate::cli::registry::{CommandEntry, CommandRegistry};

/// Registers every command; the order here is the order `help` lists them.
pub fn register_all(registry: &mut CommandRegistry) {
    let groups: [fn() -> Vec<CommandEntry>; 4] = [
        form::definitions,
        submission::definitions,
        config::definitions,
        system::definitions,
    ];
    for definitions in groups {
        for entry in definitions() {
            registry.register(entry);
        }
    }
}

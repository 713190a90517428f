//! Interactive shell exposing the form, its progress, and the submissions
//! table as line commands.

pub mod commands;
pub mod core;
pub mod help;
pub mod interaction;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;

pub use self::core::{CommandError, CommandResult, LoopControl};
pub use shell::run_cli;
pub use shell_context::{CliMode, ShellContext};

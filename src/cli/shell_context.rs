//! Shared runtime state for CLI interactions and command execution.

use dialoguer::theme::ColorfulTheme;

use crate::app::App;
use crate::cli::output::{self, OutputPreferences};
use crate::config::{Config, ConfigManager};
use crate::errors::ConfigError;
use crate::render::RenderOptions;

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub app: App<'static>,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub last_command: Option<String>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, ConfigError> {
        Self::with_config_manager(mode, ConfigManager::new())
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, ConfigError> {
        let mut registry = CommandRegistry::new();
        super::commands::register_all(&mut registry);

        let config = config_manager.load()?;
        output::set_preferences(OutputPreferences::from(&config));

        Ok(Self {
            mode,
            registry,
            app: App::builtin(),
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            last_command: None,
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        self.config.render_options()
    }

    /// Applies and persists a configuration change.
    pub fn update_config(&mut self, config: Config) -> Result<(), ConfigError> {
        self.config_manager.save(&config)?;
        output::set_preferences(OutputPreferences::from(&config));
        self.config = config;
        Ok(())
    }

    /// Prompt text reflecting the selected form and its progress.
    pub fn prompt(&self) -> String {
        let controller = self.app.controller();
        match controller.form_type() {
            Some(form_type) => format!("form[{} {}]> ", form_type, controller.progress()),
            None => "form> ".to_string(),
        }
    }
}

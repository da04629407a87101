//! Shell context, dispatch, and error reporting.

use std::io;

use dialoguer::{theme::ColorfulTheme, Confirm};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::{Config, ConfigError, ConfigManager};
use crate::core::services::ServiceError;
use crate::core::session::BomSession;
use crate::core::utils::resolve_data_dir;
pub use crate::core::errors::CliError;

use super::commands;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl CommandError {
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        CommandError::InvalidArguments(message.into())
    }
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: BomSession,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub theme: ColorfulTheme,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    /// Loads configuration and the catalog. A catalog failure is fatal.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let data_dir = resolve_data_dir(config.data_dir.as_deref());
        let catalog = Catalog::load_dir(&data_dir)?;
        Ok(Self::from_parts(mode, catalog, config, config_manager))
    }

    pub fn from_parts(
        mode: CliMode,
        catalog: Catalog,
        config: Config,
        config_manager: ConfigManager,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        output::set_plain(mode == CliMode::Script);

        let session =
            BomSession::new(catalog).with_criteria(config.selection_criteria(), config.main_amperage);

        Self {
            mode,
            registry,
            session,
            config_manager,
            config,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
        }
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn prompt(&self) -> String {
        let boards = self.session.project().boards().len();
        format!("bom [{}A main | {} boards]> ", self.session.main_amperage, boards)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenizes and dispatches one input line.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };
        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));
        if let Some(name) = self.registry.closest(input) {
            output::info(format!("Suggestion: `{name}`?"));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Exit shell? The session BOM is not saved.")
            .default(false)
            .interact()?)
    }

    /// Recoverable errors become warnings and the shell keeps running.
    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Service(err) => output::warning(err),
            other => output::error(other),
        }
        Ok(())
    }
}

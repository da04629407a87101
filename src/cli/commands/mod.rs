pub mod board;
pub mod catalog;
pub mod config;
pub mod project;
pub mod selection;
pub mod system;

use crate::cli::core::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "criteria", "set", "select", "add", "board", "commit", "project", "export", "catalog",
    "config", "help", "version", "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(selection::definitions());
    commands.extend(board::definitions());
    commands.extend(project::definitions());
    commands.extend(catalog::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}

pub(crate) fn parse_number<T: std::str::FromStr>(label: &str, raw: &str) -> Result<T, CommandError> {
    raw.trim()
        .parse()
        .map_err(|_| CommandError::usage(format!("{label} must be a number, got `{raw}`")))
}

pub(crate) fn parse_switch(raw: &str) -> Result<bool, CommandError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(CommandError::usage(format!("expected on/off, got `{raw}`"))),
    }
}

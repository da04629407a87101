use strsim::levenshtein;

use crate::cli::core::{CommandResult, ShellContext};

/// Largest edit distance still offered as a "did you mean" suggestion.
const SUGGESTION_DISTANCE: usize = 3;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

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

/// Commands in registration order. Lookups ignore case.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A later entry with the same name replaces the earlier one in place.
    pub fn register(&mut self, entry: CommandEntry) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.name.eq_ignore_ascii_case(entry.name))
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn list(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }

    /// Closest registered name to a mistyped command, if any is close enough.
    pub fn closest(&self, input: &str) -> Option<&'static str> {
        let input = input.to_ascii_lowercase();
        self.names()
            .map(|name| (levenshtein(name, &input), name))
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }
}

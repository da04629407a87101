use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::ui::{Table, TableColumn};

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    let mut table = Table::new(vec![
        TableColumn::left("Command"),
        TableColumn::left("Description"),
    ]);
    for entry in registry.list() {
        table.add_row(vec![entry.name, entry.description]);
    }
    output::text(table.render());
    output::hint("Use `help <command>` for usage details.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    output::text(format!("  {}", entry.description));
    output::text(format!("  usage: {}", entry.usage));
}

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Switchboard BOM {}", meta.version));
    for (label, value) in meta.rows() {
        output::text(format!("  {label:<11}: {value}"));
    }
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(name) = args.first() else {
        help::print_overview(&context.registry);
        return Ok(());
    };
    match context.command(name) {
        Some(entry) => help::print_command(entry),
        None => context.suggest_command(name),
    }
    Ok(())
}

fn cmd_exit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.session.project().is_empty() {
        output::hint("The project BOM is discarded on exit; `export` it first to keep it.");
    }
    Err(CommandError::ExitRequested)
}

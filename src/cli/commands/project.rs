use std::fs;
use std::path::PathBuf;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{Table, TableColumn};

const DEFAULT_PROJECT_NAME: &str = "Project";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "project",
            "Show the project BOM, remove a board, or reset the project",
            "project [remove <switchboard name> | reset]",
            cmd_project,
        ),
        CommandEntry::new(
            "export",
            "Write the project BOM as CSV",
            "export [path]",
            cmd_export,
        ),
    ]
}

fn cmd_project(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.split_first() {
        None => {}
        Some((action, rest)) if action.eq_ignore_ascii_case("remove") => {
            if rest.is_empty() {
                return Err(CommandError::usage(
                    "No board deleted. Please name the board you wish to delete.",
                ));
            }
            let name = rest.join(" ");
            let removed = context.session.remove_board(&name)?;
            output::success(format!("Board `{name}` removed ({removed} lines)."));
        }
        Some((action, _)) if action.eq_ignore_ascii_case("reset") => {
            context.session.reset_project();
            output::success("Project BOM reset.");
        }
        Some((action, _)) => {
            return Err(CommandError::usage(format!(
                "unknown project action `{action}`; expected `remove` or `reset`"
            )))
        }
    }
    print_project(context);
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = match args.first() {
        Some(raw) => PathBuf::from(raw),
        None => PathBuf::from(default_file_name(context.config.project_name.as_deref())),
    };
    let bytes = context.session.export_csv()?;
    fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), "project BOM exported");
    output::success(format!("Project BOM written to {}.", path.display()));
    Ok(())
}

pub(crate) fn default_file_name(project_name: Option<&str>) -> String {
    let name = project_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_PROJECT_NAME);
    format!("{name} LS BOM.csv")
}

fn print_project(context: &ShellContext) {
    let project = context.session.project();
    output::section("Project Bill of Materials");
    let mut table = Table::new(vec![
        TableColumn::left("Board"),
        TableColumn::left("Product"),
        TableColumn::right("Qty"),
        TableColumn::left("Item #"),
        TableColumn::left("Part #"),
    ]);
    for line in project.lines() {
        table.add_row(vec![
            line.board.clone(),
            line.product.to_string(),
            line.quantity.to_string(),
            line.item.clone(),
            line.part_number.clone(),
        ]);
    }
    output::text(table.render());
    if !project.boards().is_empty() {
        output::text(format!("Boards: {}", project.boards().join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::default_file_name;

    #[test]
    fn export_name_falls_back_to_default() {
        assert_eq!(default_file_name(Some("Tower A")), "Tower A LS BOM.csv");
        assert_eq!(default_file_name(Some("  ")), "Project LS BOM.csv");
        assert_eq!(default_file_name(None), "Project LS BOM.csv");
    }
}

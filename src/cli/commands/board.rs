use crate::bom::BoardSummary;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{Table, TableColumn};
use crate::core::services::ServiceError;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "board",
            "Show or reset the board bill of materials",
            "board [reset]",
            cmd_board,
        ),
        CommandEntry::new(
            "commit",
            "Add the board BOM to the project BOM under a switchboard name",
            "commit <switchboard name>",
            cmd_commit,
        ),
    ]
}

fn cmd_board(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_ascii_lowercase()).as_deref() {
        None => {}
        Some("reset") => {
            context.session.reset_board();
            output::success("Board BOM reset.");
        }
        Some(other) => {
            return Err(CommandError::usage(format!(
                "unknown board action `{other}`; expected `reset`"
            )))
        }
    }
    let summary = context
        .session
        .board_summary()
        .map_err(ServiceError::from)?;
    print_summary(&summary);
    Ok(())
}

fn cmd_commit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = args.join(" ");
    let added = context.session.commit_board(&name)?;
    output::success(format!(
        "Board `{}` added to the project BOM ({} lines).",
        name.trim(),
        added
    ));
    Ok(())
}

pub(crate) fn print_summary(summary: &BoardSummary) {
    output::section("Board Bill of Materials");

    output::text("Breakers");
    let mut breakers = Table::new(vec![
        TableColumn::right("Main Qty"),
        TableColumn::right("Branch Qty"),
        TableColumn::left("Item #"),
        TableColumn::left("Part #"),
    ]);
    for line in &summary.breakers {
        breakers.add_row(vec![
            line.main_qty.to_string(),
            line.branch_qty.to_string(),
            line.item.clone(),
            line.part_number.clone(),
        ]);
    }
    output::text(breakers.render());

    output::text("\nStraps");
    let mut straps = Table::new(vec![
        TableColumn::right("Qty"),
        TableColumn::left("Item #"),
        TableColumn::left("Part #"),
    ]);
    for line in &summary.straps {
        if let Some(strap) = &line.strap {
            straps.add_row(vec![
                line.quantity.to_string(),
                strap.item.clone(),
                strap.part_number.clone(),
            ]);
        }
    }
    output::text(straps.render());

    output::text(format!("\nInteriors (X Spaces: {})", summary.x_spaces));
    let mut interiors = Table::new(vec![
        TableColumn::right("Qty"),
        TableColumn::left("Item #"),
        TableColumn::left("Part #"),
    ]);
    for line in summary.interiors() {
        interiors.add_row(vec![
            line.quantity.to_string(),
            line.interior.item,
            line.interior.part_number,
        ]);
    }
    output::text(interiors.render());
}

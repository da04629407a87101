use crate::catalog::BreakerRecord;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{Table, TableColumn};

use super::parse_number;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "catalog",
        "Browse the loaded breaker, strap, and interior tables",
        "catalog [breakers [frame]|straps|interiors]",
        cmd_catalog,
    )]
}

fn cmd_catalog(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let catalog = context.session.catalog();
    match args.first().map(|arg| arg.to_ascii_lowercase()).as_deref() {
        None => {
            output::section("Catalog");
            output::text(format!("  Breakers  : {}", catalog.breakers().len()));
            output::text(format!("  Straps    : {}", catalog.straps().len()));
            output::text(format!("  Interiors : {}", catalog.interiors().len()));
        }
        Some("breakers") => {
            let rows: Vec<&BreakerRecord> = match args.get(1) {
                Some(raw) => {
                    let frame: u32 = parse_number("frame rating", raw)?;
                    catalog.breakers_in_frame(frame).collect()
                }
                None => catalog.breakers().iter().collect(),
            };
            output::section("Breakers");
            output::text(breaker_table(&rows));
        }
        Some("straps") => {
            output::section("Straps");
            let mut table = Table::new(vec![
                TableColumn::right("Frame"),
                TableColumn::left("Item #"),
                TableColumn::left("Part #"),
            ]);
            for strap in catalog.straps() {
                table.add_row(vec![
                    strap.frame_rating.to_string(),
                    strap.item.clone(),
                    strap.part_number.clone(),
                ]);
            }
            output::text(table.render());
        }
        Some("interiors") => {
            output::section("Interiors");
            let mut table = Table::new(vec![
                TableColumn::right("Amperage"),
                TableColumn::left("Item #"),
                TableColumn::left("Part #"),
                TableColumn::right("X Spaces"),
            ]);
            for interior in catalog.interiors() {
                table.add_row(vec![
                    interior.amperage.to_string(),
                    interior.item.clone(),
                    interior.part_number.clone(),
                    interior.x_spaces.to_string(),
                ]);
            }
            output::text(table.render());
        }
        Some(other) => {
            return Err(CommandError::usage(format!(
                "unknown table `{other}`; expected breakers, straps, or interiors"
            )))
        }
    }
    Ok(())
}

fn breaker_table(rows: &[&BreakerRecord]) -> String {
    let mut table = Table::new(vec![
        TableColumn::left("Item #"),
        TableColumn::left("Part #"),
        TableColumn::right("Frame"),
        TableColumn::right("Amps"),
        TableColumn::left("Trip Unit"),
        TableColumn::right("Perf %"),
        TableColumn::left("LSI"),
        TableColumn::right("240V kAIC"),
        TableColumn::right("480V kAIC"),
        TableColumn::right("List Price"),
    ]);
    for breaker in rows {
        table.add_row(vec![
            breaker.item.clone(),
            breaker.part_number.clone(),
            breaker.frame_rating.to_string(),
            breaker.amp_rating.to_string(),
            breaker.trip_unit.label.clone(),
            breaker.performance.to_string(),
            if breaker.lsi_capable { "yes" } else { "no" }.to_string(),
            breaker.kaic_240v.to_string(),
            breaker.kaic_480v.to_string(),
            format!("{:.2}", breaker.list_price),
        ]);
    }
    table.render()
}

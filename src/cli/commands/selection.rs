use crate::bom::Role;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{Table, TableColumn};
use crate::core::services::{Recommendation, Voltage, COMMIT_QUANTITY, KAIC_OPTIONS};
use crate::core::session::MAIN_AMPERAGES;

use super::{parse_number, parse_switch};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "criteria",
            "Show the current board and breaker properties",
            "criteria",
            cmd_criteria,
        ),
        CommandEntry::new(
            "set",
            "Change a property and refresh the recommendation",
            "set <amps|voltage|kaic|perf|lsi|main> <value>",
            cmd_set,
        ),
        CommandEntry::new(
            "select",
            "Recommend a breaker for the current properties",
            "select [amps]",
            cmd_select,
        ),
        CommandEntry::new(
            "add",
            "Add the recommended breaker to the board BOM",
            "add <qty> <main|branch>",
            cmd_add,
        ),
    ]
}

fn cmd_criteria(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let criteria = context.session.criteria();
    output::section("Switchboard Properties");
    output::text(format!("  Main amperage : {}A", context.session.main_amperage));
    output::text(format!(
        "  Voltage       : {}",
        criteria.voltage.map_or("-", Voltage::label)
    ));
    output::text(format!(
        "  kAIC          : {}",
        criteria.min_kaic.map_or_else(|| "-".to_string(), |k| k.to_string())
    ));
    output::section("Breaker Properties");
    output::text(format!("  Amp rating    : {}A", criteria.amp_rating));
    output::text(format!("  Performance   : {}%", criteria.performance));
    output::text(format!(
        "  LSI required  : {}",
        if criteria.lsi_required { "yes" } else { "no" }
    ));
    Ok(())
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [field, value] = args else {
        return Err(CommandError::usage(
            "usage: set <amps|voltage|kaic|perf|lsi|main> <value>",
        ));
    };
    let cleared = value.eq_ignore_ascii_case("none");
    match field.to_ascii_lowercase().as_str() {
        "amps" => {
            let amps = parse_number("amp rating", value)?;
            context.session.update_criteria(|criteria| criteria.amp_rating = amps);
        }
        "voltage" => {
            let voltage = if cleared {
                None
            } else {
                Some(Voltage::parse(value).ok_or_else(|| {
                    CommandError::usage("voltage must be 208, 480, or none")
                })?)
            };
            context.session.update_criteria(|criteria| criteria.voltage = voltage);
        }
        "kaic" => {
            let kaic = if cleared {
                None
            } else {
                let kaic: u32 = parse_number("kAIC", value)?;
                if !KAIC_OPTIONS.contains(&kaic) {
                    return Err(CommandError::usage("kAIC must be 35, 50, 65, 100, or none"));
                }
                Some(kaic)
            };
            context.session.update_criteria(|criteria| criteria.min_kaic = kaic);
        }
        "perf" | "performance" => {
            let perf: u32 = parse_number("performance", value)?;
            if perf != 80 && perf != 100 {
                return Err(CommandError::usage("performance must be 80 or 100"));
            }
            context.session.update_criteria(|criteria| criteria.performance = perf);
        }
        "lsi" => {
            let lsi = parse_switch(value)?;
            context.session.update_criteria(|criteria| criteria.lsi_required = lsi);
        }
        "main" => {
            let amps: u32 = parse_number("main amperage", value)?;
            if !MAIN_AMPERAGES.contains(&amps) {
                return Err(CommandError::usage(
                    "main amperage must be one of 1200, 1600, 2000, 2500, 3000, 4000",
                ));
            }
            context.session.main_amperage = amps;
            return Ok(());
        }
        other => {
            return Err(CommandError::usage(format!("unknown property `{other}`")));
        }
    }
    show_selection(context)
}

fn cmd_select(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    // Ratings above the largest frame reach the selector and report no match.
    if let Some(raw) = args.first() {
        let amps = parse_number("amp rating", raw)?;
        context.session.update_criteria(|criteria| criteria.amp_rating = amps);
    }
    show_selection(context)
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let qty: i64 = match args.first() {
        Some(raw) => parse_number("quantity", raw)?,
        None => 1,
    };
    if !COMMIT_QUANTITY.contains(&qty) {
        return Err(CommandError::usage("quantity must be between -1 and 10"));
    }
    let role = match args.get(1) {
        Some(raw) => Some(
            Role::parse(raw)
                .ok_or_else(|| CommandError::usage("breaker type must be main or branch"))?,
        ),
        None => None,
    };
    let line = context.session.add_recommended(qty, role)?;
    output::success(format!(
        "{} now at {} main / {} branch.",
        line.item, line.main_qty, line.branch_qty
    ));
    Ok(())
}

/// Reruns the selector. A miss is reported as "no match", never as a failure.
fn show_selection(context: &mut ShellContext) -> CommandResult {
    output::section("Recommended Breaker");
    match context.session.recommend() {
        Ok(recommendation) => {
            output::text(render_recommendation(recommendation));
            Ok(())
        }
        Err(err) => {
            output::warning(format!("No match. {err}"));
            Ok(())
        }
    }
}

pub(crate) fn render_recommendation(recommendation: &Recommendation) -> String {
    let mut table = Table::new(vec![
        TableColumn::left("Item #"),
        TableColumn::left("Part #"),
        TableColumn::right("List Price"),
        TableColumn::right("240V kAIC"),
        TableColumn::right("480V kAIC"),
    ]);
    for breaker in recommendation.candidates() {
        table.add_row(vec![
            breaker.item.clone(),
            breaker.part_number.clone(),
            format!("{:.2}", breaker.list_price),
            breaker.kaic_240v.to_string(),
            breaker.kaic_480v.to_string(),
        ]);
    }
    table.render()
}

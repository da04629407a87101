use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::config::Config;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View, change, and save the session defaults",
        "config [show|save|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "save" => {
            context.config_manager.save(&context.config)?;
            output::success(format!(
                "Configuration saved to {}.",
                context.config_manager.path().display()
            ));
            Ok(())
        }
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::usage(format!(
                    "usage: config set <{}> <value>",
                    Config::KEYS.join("|")
                )));
            }
            let key = args[1].to_lowercase();
            let value = args[2..].join(" ");
            context.config.set(&key, value.trim())?;
            apply_to_session(context, &key);
            output::success(format!("`{key}` updated. Use `config save` to keep it."));
            Ok(())
        }
        other => Err(CommandError::usage(format!(
            "unknown config action `{other}`; expected show, save, or set"
        ))),
    }
}

/// Selection defaults take effect immediately; the amp rating is left alone.
fn apply_to_session(context: &mut ShellContext, key: &str) {
    let defaults = context.config.selection_criteria();
    if key == "main_amperage" {
        context.session.main_amperage = context.config.main_amperage;
        return;
    }
    context.session.update_criteria(|criteria| match key {
        "performance" => criteria.performance = defaults.performance,
        "lsi_required" => criteria.lsi_required = defaults.lsi_required,
        "voltage" => criteria.voltage = defaults.voltage,
        "min_kaic" => criteria.min_kaic = defaults.min_kaic,
        _ => {}
    });
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    let none = || "-".to_string();
    output::section("Configuration");
    output::text(format!(
        "  File          : {}",
        context.config_manager.path().display()
    ));
    output::text(format!(
        "  data_dir      : {}",
        config
            .data_dir
            .as_ref()
            .map_or_else(none, |dir| dir.display().to_string())
    ));
    output::text(format!(
        "  project_name  : {}",
        config.project_name.clone().unwrap_or_else(none)
    ));
    output::text(format!("  main_amperage : {}", config.main_amperage));
    output::text(format!("  performance   : {}", config.performance));
    output::text(format!("  lsi_required  : {}", config.lsi_required));
    output::text(format!(
        "  voltage       : {}",
        config.voltage.map_or_else(none, |v| v.label().to_string())
    ));
    output::text(format!(
        "  min_kaic      : {}",
        config.min_kaic.map_or_else(none, |k| k.to_string())
    ));
}

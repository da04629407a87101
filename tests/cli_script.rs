mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn script(home: &TempDir, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("switchboard_bom_cli")
        .unwrap()
        .env("SWITCHBOARD_BOM_CLI_SCRIPT", "1")
        .env("SWITCHBOARD_BOM_HOME", home.path())
        .env("SWITCHBOARD_BOM_DATA", common::data_dir())
        .env_remove("RUST_LOG")
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn script_mode_selects_and_exports() {
    let home = TempDir::new().unwrap();
    let export = home.path().join("tower.csv");
    let input = format!(
        "select 100\nadd 4 branch\nadd 1 main\nboard\ncommit MSB 1\nexport {}\nexit\n",
        export.display()
    );

    script(&home, &input)
        .success()
        .stdout(contains("BKR-150-100"))
        .stdout(contains("STP-150"))
        .stdout(contains("Board `MSB 1` added to the project BOM"));

    let csv = std::fs::read_to_string(&export).unwrap();
    assert!(csv.starts_with("Board,Product,Qty,Item #,Part #\n"));
    assert!(csv.contains("MSB 1,Breaker,5,BKR-150-100,UTS150N FTU 100A 3P"));
    assert!(csv.contains("MSB 1,Strap,2,STP-150,BK-150-STRAP"));
}

#[test]
fn unmatched_selection_is_reported_as_no_match() {
    let home = TempDir::new().unwrap();
    script(&home, "set voltage 480\nset kaic 100\nselect 100\nexit\n")
        .success()
        .stdout(contains("No match."))
        .stdout(contains("interrupt rating"));

    script(&home, "select 5000\nexit\n")
        .success()
        .stdout(contains("No match. No frame size fits 5000A"));
}

#[test]
fn add_without_role_is_rejected() {
    let home = TempDir::new().unwrap();
    script(&home, "select 100\nadd 2\nboard\nexit\n")
        .success()
        .stdout(contains("Please select a breaker type"))
        .stdout(contains("BKR-150-100").count(1));
}

#[test]
fn add_after_config_change_uses_current_criteria() {
    let home = TempDir::new().unwrap();
    script(
        &home,
        "select 100\nconfig set performance 100\nconfig set lsi_required true\nadd 1 branch\nboard\nexit\n",
    )
    .success()
    .stdout(contains("No breaker matches the requested constraints"))
    .stdout(contains("now at").not())
    .stdout(contains("BKR-150-100").count(1));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let home = TempDir::new().unwrap();
    script(&home, "selct 100\nexit\n")
        .success()
        .stdout(contains("Unknown command `selct`"))
        .stdout(contains("Suggestion: `select`?"));
}

#[test]
fn config_set_and_save_persist_defaults() {
    let home = TempDir::new().unwrap();
    script(&home, "config set voltage 480\nconfig save\nexit\n").success();

    let saved = std::fs::read_to_string(home.path().join("config.json")).unwrap();
    assert!(saved.contains("\"V480\""));

    script(&home, "criteria\nexit\n")
        .success()
        .stdout(contains("277/480V"));
}

#[test]
fn missing_catalog_is_fatal() {
    let home = TempDir::new().unwrap();
    Command::cargo_bin("switchboard_bom_cli")
        .unwrap()
        .env("SWITCHBOARD_BOM_CLI_SCRIPT", "1")
        .env("SWITCHBOARD_BOM_HOME", home.path())
        .env("SWITCHBOARD_BOM_DATA", home.path().join("nowhere"))
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(contains("Catalog source not found"));
}

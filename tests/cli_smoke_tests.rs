use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "kharcha_cli";

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("KHARCHA_CLI_SCRIPT", "1");
    cmd.env("KHARCHA_HOME", home.path());
    cmd
}

#[test]
fn cli_help_command_prints_overview() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(contains("help").or(contains("Available commands")));
}

#[test]
fn cli_version_command_prints_version_info() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("version\nexit\n")
        .assert()
        .success()
        .stdout(contains("Kharcha"));
}

#[test]
fn cli_add_persists_across_runs() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("expense add 120.50 2024-01-01 evening chai\nexit\n")
        .assert()
        .success()
        .stdout(contains("Expense added successfully!"));

    script_command(&home)
        .write_stdin("expense list\nexit\n")
        .assert()
        .success()
        .stdout(contains("2024-01-01").and(contains("120.50")).and(contains("evening chai")));
}

#[test]
fn cli_remove_by_index_drops_the_record() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin(
            "expense add 10 2024-01-01 first\nexpense add 20 2024-01-01 second\nexpense remove 1\nexit\n",
        )
        .assert()
        .success()
        .stdout(contains("Expense removed."));

    script_command(&home)
        .write_stdin("expense list\nexit\n")
        .assert()
        .success()
        .stdout(contains("second").and(contains("first").not()));
}

#[test]
fn cli_removing_unknown_index_reports_an_error() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("expense remove 7\nexit\n")
        .assert()
        .success()
        .stdout(contains("out of range"));
}

#[test]
fn cli_store_info_reports_record_count() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("expense add 15 2024-02-02 snack\nstore info\nexit\n")
        .assert()
        .success()
        .stdout(contains("Records: 1"));
}

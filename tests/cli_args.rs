// tests/cli_args.rs
use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("pydocs_scrape").unwrap()
}

#[test]
fn help_lists_every_mode() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("whats-new")
                .and(predicate::str::contains("latest-versions"))
                .and(predicate::str::contains("download"))
                .and(predicate::str::contains("pep"))
                .and(predicate::str::contains("--clear-cache")),
        );
}

#[test]
fn unknown_mode_is_rejected_before_any_work() {
    let tmp = tempfile::tempdir().unwrap();
    bin()
        .current_dir(tmp.path())
        .arg("changelog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'changelog'"));
    assert!(!tmp.path().join("logs").exists());
}

#[test]
fn console_is_not_an_output_choice() {
    bin()
        .args(["pep", "--output", "console"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("possible values: pretty, file"));
}

#[test]
fn mode_is_required() {
    bin().assert().failure();
}

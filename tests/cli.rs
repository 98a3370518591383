use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tooldeck_cmd() -> Command {
    Command::cargo_bin("tooldeck").expect("binary exists")
}

#[test]
fn tooldeck_help_prints_usage() {
    tooldeck_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Inspect and reset drawing tool settings",
        ));
}

#[test]
fn subcommand_is_required() {
    tooldeck_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn show_without_settings_file_uses_defaults() {
    let temp = TempDir::new().unwrap();

    tooldeck_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("current: pen"))
        .stdout(predicate::str::contains("eraser mode: default"))
        .stdout(predicate::str::contains("#3333cc"));
}

#[test]
fn reset_then_show_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("tools.toml");

    tooldeck_cmd()
        .arg("reset")
        .arg("--settings")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default tool settings"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[tools.pen]"));

    tooldeck_cmd()
        .arg("show")
        .arg("--settings")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("highlighter"))
        .stdout(predicate::str::contains("MEDIUM"));
}

#[test]
fn show_applies_stored_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tools.toml");
    std::fs::write(
        &path,
        "[tools]\ncurrent = \"eraser\"\n\n[tools.eraser]\nsize = \"VERY_BIG\"\ntype = \"whiteout\"\n",
    )
    .unwrap();

    tooldeck_cmd()
        .arg("show")
        .arg("--settings")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("current: eraser"))
        .stdout(predicate::str::contains("eraser mode: whiteout"))
        .stdout(predicate::str::contains("VERY_THICK"));
}

#[test]
fn show_reports_malformed_settings() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tools.toml");
    std::fs::write(&path, "[tools\ncurrent = ").unwrap();

    tooldeck_cmd()
        .arg("show")
        .arg("--settings")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn schema_dump_is_json() {
    Command::cargo_bin("dump_settings_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("fillAlpha"));
}

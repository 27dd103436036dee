#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const EXPORT: &str = r#"{
    "habits": [
        { "id": "floss", "title": "Floss", "kind": "boolean", "createdAt": "2024-01-01T00:00:00Z" },
        { "id": "water", "title": "Water", "kind": "quantified", "target": 8, "unit": "glasses", "createdAt": "2024-01-01T00:00:00Z" },
        { "id": "piano", "title": "Piano", "kind": "time", "target": 30, "createdAt": "2023-06-01T00:00:00Z", "archivedAt": "2023-12-01T00:00:00Z" }
    ],
    "entries": [
        { "habitId": "floss", "date": "2024-01-08", "completed": true },
        { "habitId": "floss", "date": "2024-01-09", "completed": true },
        { "habitId": "floss", "date": "2024-01-10", "completed": true },
        { "habitId": "water", "date": "2024-01-10", "value": 4 },
        { "habitId": "water", "date": "2024-01-09", "quantity": 8, "completed": true },
        { "habitId": "piano", "date": "2024-01-10", "value": 30, "kindAtEntry": "time" }
    ],
    "settings": { "dayStart": "00:00" }
}"#;

fn write_export(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("data.json");
    fs::write(&path, content).expect("export should write");
    path
}

fn habitscore() -> Command {
    Command::cargo_bin("habitscore").expect("binary should compile")
}

#[test]
fn summary_reports_weighted_day_score() {
    let dir = TempDir::new().expect("temp dir should be created");
    let data = write_export(&dir, EXPORT);

    habitscore()
        .arg("summary")
        .arg(&data)
        .args(["--date", "2024-01-10", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"totalScore\": 75"))
        .stdout(predicate::str::contains("\"habitId\": \"water\""))
        .stdout(predicate::str::contains("piano").not());
}

#[test]
fn summary_markdown_lists_habits() {
    let dir = TempDir::new().expect("temp dir should be created");
    let data = write_export(&dir, EXPORT);

    habitscore()
        .arg("summary")
        .arg(&data)
        .args(["--date", "2024-01-09"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Total score: 100"))
        .stdout(predicate::str::contains("- [x] water: 100%, value 8"));
}

#[test]
fn summary_rejects_invalid_date() {
    let dir = TempDir::new().expect("temp dir should be created");
    let data = write_export(&dir, EXPORT);

    habitscore()
        .arg("summary")
        .arg(&data)
        .args(["--date", "10/01/2024"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid day key"));
}

#[test]
fn summary_missing_data_file_fails() {
    let dir = TempDir::new().expect("temp dir should be created");

    habitscore()
        .arg("summary")
        .arg(dir.path().join("missing.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn trend_emits_one_point_per_day() {
    let dir = TempDir::new().expect("temp dir should be created");
    let data = write_export(&dir, EXPORT);

    habitscore()
        .arg("trend")
        .arg(&data)
        .args(["--from", "2024-01-07", "--to", "2024-01-10"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("- 2024-01-07: 0"))
        .stdout(predicate::str::contains("- 2024-01-08: 50"))
        .stdout(predicate::str::contains("- 2024-01-09: 100"))
        .stdout(predicate::str::contains("- 2024-01-10: 75"));
}

#[test]
fn streaks_use_completed_flag_by_default() {
    let dir = TempDir::new().expect("temp dir should be created");
    let data = write_export(&dir, EXPORT);

    habitscore()
        .arg("streaks")
        .arg(&data)
        .args(["--anchor", "2024-01-10", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"anchor\": \"2024-01-10\""))
        .stdout(predicate::str::contains("\"streak\": 3"));
}

#[test]
fn streaks_full_score_mode_from_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    let data = write_export(&dir, EXPORT);
    fs::write(
        dir.path().join("habitscore.toml"),
        r#"
[streaks]
window_days = 30
done_test = "full-score"
"#,
    )
    .expect("config should write");

    habitscore()
        .arg("streaks")
        .arg(&data)
        .args(["--anchor", "2024-01-10"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("| water | 1 | 0 | 1 | active |"))
        .stdout(predicate::str::contains("| floss | 3 | 0 | 3 | active |"));
}

#[test]
fn streaks_full_score_mode_from_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    let data = write_export(&dir, EXPORT);

    habitscore()
        .arg("streaks")
        .arg(&data)
        .args(["--anchor", "2024-01-10", "--done-test", "full-score"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("| water | 1 | 0 | 1 | active |"))
        .stdout(predicate::str::contains("| floss | 3 | 0 | 3 | active |"));
}

#[test]
fn streaks_window_flag_limits_lookback() {
    let dir = TempDir::new().expect("temp dir should be created");
    let data = write_export(&dir, EXPORT);

    habitscore()
        .arg("streaks")
        .arg(&data)
        .args(["--anchor", "2024-01-10", "--window-days", "2", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"streak\": 2"))
        .stdout(predicate::str::contains("\"longest\": 2"))
        .stdout(predicate::str::contains("\"streak\": 3").not());
}

#[test]
fn streaks_window_flag_out_of_range_is_rejected() {
    let dir = TempDir::new().expect("temp dir should be created");
    let data = write_export(&dir, EXPORT);

    for window in ["0", "3661", "4000000000"] {
        habitscore()
            .arg("streaks")
            .arg(&data)
            .args(["--anchor", "2024-01-10", "--window-days", window])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("--window-days"))
            .stderr(predicate::str::contains("invalid day key").not());
    }
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let data = write_export(&dir, EXPORT);
    fs::write(
        dir.path().join("habitscore.toml"),
        r#"
[streaks]
window_days = 0
"#,
    )
    .expect("config should write");

    habitscore()
        .arg("streaks")
        .arg(&data)
        .args(["--anchor", "2024-01-10"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("streaks.window_days"));
}

#[test]
fn data_warnings_exit_with_code_one() {
    let dir = TempDir::new().expect("temp dir should be created");
    let data = write_export(
        &dir,
        r#"{
    "habits": [
        { "id": "floss", "title": "Floss", "createdAt": "2024-01-01T00:00:00Z" }
    ],
    "entries": [
        { "habitId": "floss", "date": "2024-01-10", "completed": true },
        { "habitId": "ghost", "date": "2024-01-10", "completed": true }
    ]
}"#,
    );

    habitscore()
        .arg("summary")
        .arg(&data)
        .args(["--date", "2024-01-10"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Total score: 100"))
        .stderr(predicate::str::contains("unknown habit ghost"));
}

#[test]
fn entry_with_invalid_date_is_skipped_with_warning() {
    let dir = TempDir::new().expect("temp dir should be created");
    let data = write_export(
        &dir,
        r#"{
    "habits": [
        { "id": "floss", "title": "Floss", "createdAt": "2024-01-01T00:00:00Z" }
    ],
    "entries": [
        { "habitId": "floss", "date": "2024-01-10", "completed": true },
        { "habitId": "floss", "date": "10/01/2024", "completed": true }
    ]
}"#,
    );

    habitscore()
        .arg("summary")
        .arg(&data)
        .args(["--date", "2024-01-10"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Total score: 100"))
        .stderr(predicate::str::contains("invalid day key 10/01/2024; skipped"));
}

use crate::cli::support::{commit_embed, stored_counter};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Settings command tests
// ============================================================================

#[test]
fn test_settings_show_defaults() {
    let dir = tempdir().unwrap();

    commit_embed()
        .current_dir(dir.path())
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("counter: 0"))
        .stdout(predicate::str::contains("target_folder: Theorems"));
}

#[test]
fn test_settings_show_json() {
    let dir = tempdir().unwrap();

    let output = commit_embed()
        .current_dir(dir.path())
        .args(["--format", "json", "settings", "show"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["counter"], 0);
    assert_eq!(json["target_folder"], "Theorems");
}

#[test]
fn test_set_counter() {
    let dir = tempdir().unwrap();

    commit_embed()
        .current_dir(dir.path())
        .args(["settings", "set-counter", "41"])
        .assert()
        .success()
        .stdout(predicate::str::contains("counter: 41"));

    assert_eq!(stored_counter(dir.path()), Some(41));
}

#[test]
fn test_set_counter_ignores_non_numeric_input() {
    let dir = tempdir().unwrap();

    commit_embed()
        .current_dir(dir.path())
        .args(["settings", "set-counter", "7"])
        .assert()
        .success();

    for input in ["abc", "-4", ""] {
        commit_embed()
            .current_dir(dir.path())
            .args(["settings", "set-counter", input])
            .assert()
            .success()
            .stdout(predicate::str::contains("counter: 7"));
    }

    assert_eq!(stored_counter(dir.path()), Some(7));
}

#[test]
fn test_set_counter_takes_leading_digits() {
    let dir = tempdir().unwrap();

    commit_embed()
        .current_dir(dir.path())
        .args(["settings", "set-counter", "12abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("counter: 12"));
}

#[test]
fn test_set_folder_blank_restores_default() {
    let dir = tempdir().unwrap();

    commit_embed()
        .current_dir(dir.path())
        .args(["settings", "set-folder", "Results"])
        .assert()
        .success()
        .stdout(predicate::str::contains("target_folder: Results"));

    commit_embed()
        .current_dir(dir.path())
        .args(["settings", "set-folder", "  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("target_folder: Theorems"));
}

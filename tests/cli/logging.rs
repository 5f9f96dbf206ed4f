use crate::cli::support::commit_embed;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();

    commit_embed()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "settings", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    let dir = tempdir().unwrap();

    commit_embed()
        .current_dir(dir.path())
        .args(["--log-level", "warn", "settings", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = tempdir().unwrap();

    commit_embed()
        .current_dir(dir.path())
        .args(["--verbose", "settings", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_produces_json_lines() {
    let dir = tempdir().unwrap();

    commit_embed()
        .current_dir(dir.path())
        .args(["--log-json", "--log-level", "debug", "settings", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\""))
        .stderr(predicate::str::contains("\"fields\""));
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = tempdir().unwrap();

    commit_embed()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("parse_args").not());
}

use crate::cli::support::commit_embed;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help, version and usage tests
// ============================================================================

#[test]
fn test_help_flag() {
    commit_embed()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: commit-embed"))
        .stdout(predicate::str::contains("commit"))
        .stdout(predicate::str::contains("settings"));
}

#[test]
fn test_version_flag() {
    commit_embed()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("commit-embed"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    let dir = tempdir().unwrap();

    commit_embed()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("commit-embed"))
        .stdout(predicate::str::contains("--help"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    commit_embed()
        .args(["--format", "invalid", "settings", "show"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    commit_embed()
        .args(["--format", "json", "settings", "show", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_unknown_kind_is_rejected() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.md"), "text\n").unwrap();

    commit_embed()
        .current_dir(dir.path())
        .args(["commit", "a.md", "--lines", "1", "--kind", "axiom"])
        .assert()
        .code(2);
}

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

/// Get a Command for commit-embed
pub fn commit_embed() -> Command {
    cargo_bin_cmd!("commit-embed")
}

/// Write a markdown document into the vault and return its vault-relative name
pub fn write_doc(vault: &Path, name: &str, contents: &str) -> String {
    fs::write(vault.join(name), contents).unwrap();
    name.to_string()
}

/// Read the counter persisted in the vault's settings file
pub fn stored_counter(vault: &Path) -> Option<i64> {
    let raw = fs::read_to_string(vault.join(".commit-embed/settings.toml")).ok()?;
    let table: toml::Table = toml::from_str(&raw).unwrap();
    table.get("counter").and_then(|v| v.as_integer())
}

/// Pull the anchor id (`thm-<millis>`) out of a note body
pub fn anchor_in(body: &str) -> String {
    let start = body.find("^thm-").unwrap() + 1;
    body[start..]
        .split_whitespace()
        .next()
        .unwrap()
        .to_string()
}

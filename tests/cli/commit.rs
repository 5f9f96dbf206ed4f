use crate::cli::support::{anchor_in, commit_embed, stored_counter, write_doc};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const DOC: &str = "# Scratch\n\nEvery presheaf is a colimit of representables.\n\nMore text.\n";

// ============================================================================
// Commit command tests
// ============================================================================

#[test]
fn test_commit_creates_note_and_embeds_it() {
    let dir = tempdir().unwrap();
    let doc = write_doc(dir.path(), "Scratch.md", DOC);

    commit_embed()
        .current_dir(dir.path())
        .args(["commit", &doc, "--lines", "3", "--kind", "lemma", "--name", "Density"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Lemma \"Density\" created successfully.",
        ))
        .stdout(predicate::str::contains("Theorems/Lemma 1 - Density.md"));

    let note_path = dir.path().join("Theorems/Lemma 1 - Density.md");
    let body = fs::read_to_string(&note_path).unwrap();
    let anchor = anchor_in(&body);

    let expected = format!(
        "---\ntags: [lemma, category-theory]\ndetails: \"Add private notes or context here.\"\n---\n\n\
         > [!lemma] Lemma 1 (Density) ^{anchor}\n\
         > Every presheaf is a colimit of representables.\n\n\
         ## Proof & Details\n\n(Write proof, related examples, or additional context here...)\n"
    );
    assert_eq!(body, expected);

    let updated = fs::read_to_string(dir.path().join("Scratch.md")).unwrap();
    assert_eq!(
        updated,
        format!("# Scratch\n\n![[Theorems/Lemma 1 - Density.md#^{anchor}]]\n\nMore text.\n")
    );
    assert_eq!(stored_counter(dir.path()), Some(1));
}

#[test]
fn test_commit_numbers_items_in_sequence() {
    let dir = tempdir().unwrap();
    let doc = write_doc(dir.path(), "Scratch.md", "First.\nSecond.\n");

    commit_embed()
        .current_dir(dir.path())
        .args(["commit", &doc, "--lines", "1", "--name", "One"])
        .assert()
        .success();

    commit_embed()
        .current_dir(dir.path())
        .args(["commit", &doc, "--match", "Second.", "--kind", "corollary"])
        .assert()
        .success();

    assert!(dir.path().join("Theorems/Theorem 1 - One.md").exists());
    assert!(dir.path().join("Theorems/Corollary 2 - Untitled.md").exists());
    assert_eq!(stored_counter(dir.path()), Some(2));
}

#[test]
fn test_commit_json_output() {
    let dir = tempdir().unwrap();
    let doc = write_doc(dir.path(), "Scratch.md", DOC);

    let output = commit_embed()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "commit",
            &doc,
            "--match",
            "colimit of representables",
            "--kind",
            "proposition",
            "--name",
            "a/b",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "created");
    assert_eq!(json["path"], "Theorems/Proposition 1 - a-b.md");
    assert_eq!(json["number"], 1);
    assert_eq!(json["title"], "Proposition 1 (a/b)");
    assert_eq!(json["appendix_written"], true);

    let anchor = json["anchor"].as_str().unwrap();
    assert!(anchor.starts_with("thm-"));
    assert_eq!(
        json["embed"],
        format!("![[Theorems/Proposition 1 - a-b.md#^{anchor}]]")
    );

    let updated = fs::read_to_string(dir.path().join("Scratch.md")).unwrap();
    assert!(updated.contains(&format!("Every presheaf is a ![[Theorems/Proposition 1 - a-b.md#^{anchor}]].")));
}

#[test]
fn test_commit_definition_uses_details_section() {
    let dir = tempdir().unwrap();
    let doc = write_doc(dir.path(), "Scratch.md", "A category is a thing.\n");

    commit_embed()
        .current_dir(dir.path())
        .args(["commit", &doc, "--lines", "1", "--kind", "definition", "--name", "Category"])
        .assert()
        .success();

    let body =
        fs::read_to_string(dir.path().join("Theorems/Definition 1 - Category.md")).unwrap();
    assert!(body.contains("tags: [definition, category-theory]"));
    assert!(body.contains("> [!definition] Definition 1 (Category) ^thm-"));
    assert!(body.ends_with(
        "\n## Details\n\n(Write details, related examples, or additional context here...)\n"
    ));
    assert!(!body.contains("Proof & Details"));
}

#[test]
fn test_commit_without_tty_defaults_to_untitled_theorem() {
    let dir = tempdir().unwrap();
    let doc = write_doc(dir.path(), "Scratch.md", DOC);

    commit_embed()
        .current_dir(dir.path())
        .args(["commit", &doc, "--lines", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Theorem \"Untitled\" created successfully.",
        ));

    let body =
        fs::read_to_string(dir.path().join("Theorems/Theorem 1 - Untitled.md")).unwrap();
    assert!(body.contains("> [!theorem] Theorem 1 ^thm-"));
}

#[test]
fn test_commit_existing_file_keeps_document_and_counter() {
    let dir = tempdir().unwrap();
    let doc = write_doc(dir.path(), "Scratch.md", DOC);
    fs::create_dir_all(dir.path().join("Theorems")).unwrap();
    fs::write(dir.path().join("Theorems/Theorem 1 - Dup.md"), "keep me\n").unwrap();

    commit_embed()
        .current_dir(dir.path())
        .args(["commit", &doc, "--lines", "3", "--name", "Dup"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "File \"Dup\" might already exist.",
        ));

    assert_eq!(
        fs::read_to_string(dir.path().join("Scratch.md")).unwrap(),
        DOC
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("Theorems/Theorem 1 - Dup.md")).unwrap(),
        "keep me\n"
    );
    assert_eq!(stored_counter(dir.path()), Some(1));
}

#[test]
fn test_commit_empty_selection_is_rejected() {
    let dir = tempdir().unwrap();
    let doc = write_doc(dir.path(), "Scratch.md", DOC);

    commit_embed()
        .current_dir(dir.path())
        .args(["commit", &doc, "--lines", "2", "--name", "Nothing"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No text selected."));

    assert!(!dir.path().join("Theorems").exists());
    assert_eq!(stored_counter(dir.path()), None);
    assert_eq!(
        fs::read_to_string(dir.path().join("Scratch.md")).unwrap(),
        DOC
    );
}

#[test]
fn test_commit_unknown_match_is_usage_error() {
    let dir = tempdir().unwrap();
    let doc = write_doc(dir.path(), "Scratch.md", DOC);

    commit_embed()
        .current_dir(dir.path())
        .args(["--format", "json", "commit", &doc, "--match", "absent", "--name", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"selection_not_found\""));
}

#[test]
fn test_commit_requires_a_selection_flag() {
    let dir = tempdir().unwrap();
    let doc = write_doc(dir.path(), "Scratch.md", DOC);

    commit_embed()
        .current_dir(dir.path())
        .args(["commit", &doc])
        .assert()
        .code(2);
}

#[test]
fn test_commit_honours_configured_folder() {
    let dir = tempdir().unwrap();
    let doc = write_doc(dir.path(), "Scratch.md", DOC);

    commit_embed()
        .current_dir(dir.path())
        .args(["settings", "set-folder", "Math/Results"])
        .assert()
        .success();

    commit_embed()
        .args(["--vault"])
        .arg(dir.path())
        .args(["commit", &doc, "--lines", "3", "--name", "Nested"])
        .assert()
        .success();

    assert!(dir
        .path()
        .join("Math/Results/Theorem 1 - Nested.md")
        .exists());
}

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn pronote_cmd(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pronote"));
    cmd.arg("--root").arg(root);
    cmd
}

fn run(root: &Path, args: &[&str]) -> Output {
    pronote_cmd(root).args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_list_on_first_run_is_empty() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["list"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No notes yet."));
    assert!(!tmp.path().join("notes.json").exists());
}

#[test]
fn test_new_creates_notes_file() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["new", "Groceries", "--content", "eggs"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created note"));
    assert!(stdout(&output).contains("Groceries"));

    let raw = std::fs::read_to_string(tmp.path().join("notes.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let notes = value.as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "Groceries");
    assert_eq!(notes[0]["content"], "eggs");
    assert_eq!(notes[0]["isFavorite"], false);
    assert_eq!(notes[0]["tintColorHex"], "#BB86FC");
    assert_eq!(notes[0]["dateCreated"], notes[0]["dateModified"]);
}

#[test]
fn test_new_with_empty_title_fails() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["new", ""]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("title cannot be empty"));
}

#[test]
fn test_full_note_workflow() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["new", "Groceries", "--color", "teal"]);
    assert!(output.status.success());

    let output = run(
        tmp.path(),
        &["new", "Work plan", "--content", "buy milk", "--favorite"],
    );
    assert!(output.status.success());

    // Newest first
    let output = run(tmp.path(), &["list"]);
    assert!(output.status.success());
    let out = stdout(&output);
    let work = out.find("Work plan").unwrap();
    let groceries = out.find("Groceries").unwrap();
    assert!(work < groceries);

    // Search is case-insensitive over content
    let output = run(tmp.path(), &["search", "MILK", "--json"]);
    assert!(output.status.success());
    let hits: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["title"], "Work plan");

    // Favorites only
    let output = run(tmp.path(), &["list", "--favorites", "--json"]);
    let favorites: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(favorites.as_array().unwrap().len(), 1);
    assert_eq!(favorites[0]["isFavorite"], true);

    // Edit the second note by position
    let output = run(tmp.path(), &["edit", "2", "--title", "Shopping", "--json"]);
    assert!(output.status.success());
    let edited: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(edited["title"], "Shopping");
    assert_eq!(edited["tintColorHex"], "#03DAC6");

    // Show by position reflects the reload order (edited note is newest)
    let output = run(tmp.path(), &["show", "1"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Shopping"));

    // Toggle favorite off
    let output = run(tmp.path(), &["favorite", "2"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Unfavorited"));
    let output = run(tmp.path(), &["list", "--favorites"]);
    assert!(stdout(&output).contains("No favorite notes."));

    // Toggling touched "Work plan", so "Shopping" is now second
    let output = run(tmp.path(), &["delete", "2", "--force"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Shopping"));

    let output = run(tmp.path(), &["list", "--json"]);
    let remaining: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(remaining.as_array().unwrap().len(), 1);
    assert_eq!(remaining[0]["title"], "Work plan");
}

#[test]
fn test_delete_out_of_range_fails() {
    let tmp = TempDir::new().unwrap();
    run(tmp.path(), &["new", "Only"]);

    let output = run(tmp.path(), &["delete", "5", "--force"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Note not found"));
}

#[test]
fn test_delete_without_force_non_interactive_fails() {
    let tmp = TempDir::new().unwrap();
    run(tmp.path(), &["new", "Keep me"]);

    let output = run(tmp.path(), &["delete", "1"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--force"));

    let output = run(tmp.path(), &["list"]);
    assert!(stdout(&output).contains("Keep me"));
}

#[test]
fn test_show_by_uuid_prefix() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["new", "Prefixed", "--json"]);
    let created: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let id = created["id"].as_str().unwrap();

    let output = run(tmp.path(), &["show", &id[..8], "--json"]);
    assert!(output.status.success());
    let shown: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(shown["id"], id);
}

#[test]
fn test_malformed_notes_file_starts_empty() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("notes.json"), "[{\"broken\": ").unwrap();

    let output = run(tmp.path(), &["list"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No notes yet."));
}

#[test]
fn test_malformed_color_is_kept() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["new", "Odd", "--color", "#XYZ", "--json"]);
    assert!(output.status.success());
    let created: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(created["tintColorHex"], "#XYZ");

    let output = run(tmp.path(), &["show", "1"]);
    assert!(stdout(&output).contains("#808080"));
}

#[test]
fn test_colors_lists_choices() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["colors"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Purple"));
    assert!(out.contains("#3498DB"));
}

#[test]
fn test_empty_id_is_rejected() {
    let tmp = TempDir::new().unwrap();
    run(tmp.path(), &["new", "Keep me"]);

    let output = run(tmp.path(), &["delete", "", "--force"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("id cannot be empty"));

    let output = run(tmp.path(), &["list"]);
    assert!(stdout(&output).contains("Keep me"));
}

#[test]
fn test_delete_by_short_id_removes_that_note() {
    let tmp = TempDir::new().unwrap();
    run(tmp.path(), &["new", "Older"]);
    let output = run(tmp.path(), &["new", "Newer", "--json"]);
    let newer: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let id = newer["id"].as_str().unwrap();

    let output = run(tmp.path(), &["delete", &id[..7], "--force"]);
    assert!(output.status.success());

    let output = run(tmp.path(), &["list", "--json"]);
    let remaining: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(remaining.as_array().unwrap().len(), 1);
    assert_eq!(remaining[0]["title"], "Older");
}

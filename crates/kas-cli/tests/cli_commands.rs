//! Integration tests for the kas CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TREASURE_ID: &str = "00000000-0000-0000-0000-0000000000a1";
const GEMS_ID: &str = "00000000-0000-0000-0000-0000000000a2";
const SPARKLES_ID: &str = "00000000-0000-0000-0000-0000000000a3";
const MISSING_ID: &str = "00000000-0000-0000-0000-0000000000ff";

/// Create a temp directory with a small table library: a root table that
/// fans out into a local sub-table and a compendium table.
fn test_library() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tables.json"),
        format!(
            r#"[
  {{
    "id": "{TREASURE_ID}",
    "name": "Treasure",
    "formula": "1d2",
    "description": "What the dragon hoarded.",
    "entries": [
      {{"range": {{"low": 1, "high": 2}}, "kind": {{"terminal": {{"icon": "icons/gem.svg", "text": "A flawless ruby"}}}}}},
      {{"range": {{"low": 1, "high": 2}}, "kind": {{"reference": {{"local": {{"id": "{GEMS_ID}"}}}}}}}},
      {{"range": {{"low": 1, "high": 2}}, "kind": {{"reference": {{"compendium": {{"pack": "world.extras", "id": "{SPARKLES_ID}"}}}}}}}}
    ]
  }},
  {{
    "id": "{GEMS_ID}",
    "name": "Gems",
    "formula": "1d2",
    "entries": [
      {{"range": {{"low": 1, "high": 2}}, "kind": {{"terminal": {{"icon": "icons/gem.svg", "text": "An emerald"}}}}}}
    ]
  }}
]"#
        ),
    )
    .unwrap();

    fs::create_dir(dir.path().join("packs")).unwrap();
    fs::write(
        dir.path().join("packs/world.extras.json"),
        format!(
            r#"[
  {{"table": {{
    "id": "{SPARKLES_ID}",
    "name": "Sparkles",
    "formula": "1d2",
    "entries": [
      {{"range": {{"low": 1, "high": 2}}, "kind": {{"terminal": {{"icon": "icons/star.svg", "text": "Stardust"}}}}}}
    ]
  }}}}
]"#
        ),
    )
    .unwrap();
    dir
}

fn kas() -> Command {
    Command::cargo_bin("kas").unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_flattens_nested_tables() {
    let dir = test_library();
    kas()
        .args(["roll", "Treasure", "--seed", "7", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("A flawless ruby")
                .and(predicate::str::contains("An emerald"))
                .and(predicate::str::contains("Stardust"))
                .and(predicate::str::contains("3 outcomes from Treasure")),
        );
}

#[test]
fn roll_announces_each_table_visited() {
    let dir = test_library();
    kas()
        .args(["roll", "Treasure", "--seed", "7", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("rolled")
                .and(predicate::str::contains("(depth 0)"))
                .and(predicate::str::contains("(depth 1)")),
        );
}

#[test]
fn roll_unknown_table_fails() {
    let dir = test_library();
    kas()
        .args(["roll", "Nothing", "-d"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("table not found"));
}

#[test]
fn roll_warns_on_circular_reference() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tables.json"),
        format!(
            r#"[
  {{
    "id": "{TREASURE_ID}",
    "name": "Ouroboros",
    "formula": "1d2",
    "entries": [
      {{"range": {{"low": 1, "high": 2}}, "kind": {{"terminal": {{"icon": "icons/snake.svg", "text": "A tail"}}}}}},
      {{"range": {{"low": 1, "high": 2}}, "kind": {{"reference": {{"local": {{"id": "{TREASURE_ID}"}}}}}}}}
    ]
  }}
]"#
        ),
    )
    .unwrap();

    kas()
        .args(["roll", "Ouroboros", "--seed", "1", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("A tail"))
        .stderr(predicate::str::contains("circular reference"));
}

// ---------------------------------------------------------------------------
// request
// ---------------------------------------------------------------------------

#[test]
fn request_shows_table_name() {
    let dir = test_library();
    kas()
        .args(["request", "Treasure", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Roll request: Treasure"));
}

#[test]
fn blind_request_masks_table_name() {
    let dir = test_library();
    kas()
        .args(["request", "Treasure", "--blind", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("???")
                .and(predicate::str::contains("Treasure").not())
                .and(predicate::str::contains("blind")),
        );
}

#[test]
fn request_with_description_includes_it() {
    let dir = test_library();
    kas()
        .args(["request", "Treasure", "--description", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("What the dragon hoarded."));
}

// ---------------------------------------------------------------------------
// list / show
// ---------------------------------------------------------------------------

#[test]
fn list_shows_tables_and_packs() {
    let dir = test_library();
    kas()
        .args(["list", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Treasure")
                .and(predicate::str::contains("Gems"))
                .and(predicate::str::contains("2 tables"))
                .and(predicate::str::contains("world.extras")),
        );
}

#[test]
fn show_displays_entries() {
    let dir = test_library();
    kas()
        .args(["show", "Treasure", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("A flawless ruby")
                .and(predicate::str::contains("1-2"))
                .and(predicate::str::contains("1d2")),
        );
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_on_valid_library() {
    let dir = test_library();
    kas()
        .args(["check", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn check_reports_broken_reference() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tables.json"),
        format!(
            r#"[
  {{
    "id": "{TREASURE_ID}",
    "name": "Broken",
    "formula": "1d2",
    "entries": [
      {{"range": {{"low": 1, "high": 2}}, "kind": {{"reference": {{"local": {{"id": "{MISSING_ID}"}}}}}}}}
    ]
  }}
]"#
        ),
    )
    .unwrap();

    kas()
        .args(["check", "-d"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("broken reference")
                .and(predicate::str::contains("1 problem found")),
        );
}

#[test]
fn check_reports_cycles() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tables.json"),
        format!(
            r#"[
  {{
    "id": "{TREASURE_ID}",
    "name": "A",
    "formula": "1d2",
    "entries": [
      {{"range": {{"low": 1, "high": 2}}, "kind": {{"reference": {{"local": {{"id": "{GEMS_ID}"}}}}}}}}
    ]
  }},
  {{
    "id": "{GEMS_ID}",
    "name": "B",
    "formula": "1d2",
    "entries": [
      {{"range": {{"low": 1, "high": 2}}, "kind": {{"reference": {{"local": {{"id": "{TREASURE_ID}"}}}}}}}}
    ]
  }}
]"#
        ),
    )
    .unwrap();

    kas()
        .args(["check", "-d"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("reference cycle"));
}

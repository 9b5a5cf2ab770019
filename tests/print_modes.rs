use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Write a path list file and return (tempdir, file path).
fn write_list(lines: &str) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("paths.txt");
    fs::write(&file, lines).unwrap();
    (tmp, file)
}

#[test]
fn test_print_ascii_from_file() {
    let (_tmp, file) = write_list("a/b\na/c\nd\n");
    Command::cargo_bin("pathview")
        .unwrap()
        .args([file.to_str().unwrap(), "--print"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "\u{251c}\u{2500}\u{2500} a\n\
             \u{2502}   \u{251c}\u{2500}\u{2500} b\n\
             \u{2502}   \u{2514}\u{2500}\u{2500} c\n\
             \u{2514}\u{2500}\u{2500} d\n",
        ));
}

#[test]
fn test_print_demo_tree() {
    Command::cargo_bin("pathview")
        .unwrap()
        .args(["--demo", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{251c}\u{2500}\u{2500} marvel"))
        .stdout(predicate::str::contains("black_widow"))
        .stdout(predicate::str::contains("\u{2514}\u{2500}\u{2500} dc"));
}

#[test]
fn test_print_from_stdin() {
    Command::cargo_bin("pathview")
        .unwrap()
        .args(["-", "--print"])
        .write_stdin("x/y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{2514}\u{2500}\u{2500} x"))
        .stdout(predicate::str::contains("    \u{2514}\u{2500}\u{2500} y"));
}

#[test]
fn test_blank_lines_and_comments_skipped() {
    let (_tmp, file) = write_list("a\n\n# a comment\nb\n");
    Command::cargo_bin("pathview")
        .unwrap()
        .args([file.to_str().unwrap(), "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a"))
        .stdout(predicate::str::contains("b"))
        .stdout(predicate::str::contains("comment").not());
}

#[test]
fn test_print_collapsed_shows_top_level_only() {
    let (_tmp, file) = write_list("a/b/c\nd\n");
    Command::cargo_bin("pathview")
        .unwrap()
        .args([file.to_str().unwrap(), "--print", "--collapsed"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "\u{251c}\u{2500}\u{2500} a\n\u{2514}\u{2500}\u{2500} d\n",
        ));
}

#[test]
fn test_print_respects_ignore_patterns() {
    let (_tmp, file) = write_list("src/main.rs\nnode_modules/pkg/index.js\n");
    Command::cargo_bin("pathview")
        .unwrap()
        .args([file.to_str().unwrap(), "--print", "-I", "node_modules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src"))
        .stdout(predicate::str::contains("node_modules").not());
}

#[test]
fn test_print_respects_depth_cap() {
    let (_tmp, file) = write_list("a/b/c/d\n");
    Command::cargo_bin("pathview")
        .unwrap()
        .args([file.to_str().unwrap(), "--print", "-L", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b"))
        .stdout(predicate::str::contains("c").not());
}

#[test]
fn test_json_format_is_nested_object() {
    let (_tmp, file) = write_list("a/b\na/c\nd\n");
    let output = Command::cargo_bin("pathview")
        .unwrap()
        .args([file.to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(value["a"]["b"].is_object());
    assert!(value["a"]["c"].is_object());
    assert_eq!(value["d"], serde_json::json!({}));
}

#[test]
fn test_records_format_lists_parents_and_children() {
    let (_tmp, file) = write_list("a/b\nd\n");
    let output = Command::cargo_bin("pathview")
        .unwrap()
        .args([file.to_str().unwrap(), "--format", "records"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let list = records.as_array().unwrap();
    assert_eq!(list.len(), 3);

    let a = list.iter().find(|r| r["name"] == "a").unwrap();
    assert!(a["parent"].is_null());
    assert_eq!(a["children"], serde_json::json!(["b"]));

    let b = list.iter().find(|r| r["name"] == "b").unwrap();
    assert_eq!(b["parent"], "a");
}

#[test]
fn test_custom_delimiter_end_to_end() {
    let (_tmp, file) = write_list("a,b\na,c\n");
    Command::cargo_bin("pathview")
        .unwrap()
        .args([file.to_str().unwrap(), "--print", "-d", ","])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{2514}\u{2500}\u{2500} a"))
        .stdout(predicate::str::contains("\u{251c}\u{2500}\u{2500} b"));
}

#[test]
fn test_verbose_diagnostics_on_stderr() {
    let (_tmp, file) = write_list("a/b\n");
    Command::cargo_bin("pathview")
        .unwrap()
        .args([file.to_str().unwrap(), "--print", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("1 path(s)"));
}

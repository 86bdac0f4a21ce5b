//! Integration tests for dirmap


use assert_cmd::Command;
use harness::{TestDir, run_dirmap, run_dirmap_with_stdin};
use predicates::prelude::*;

#[test]
fn test_basic_tree_output() {
    let dir = TestDir::new();
    dir.add_file("a/inner.txt", "");
    dir.add_file("b.txt", "");

    let result = run_dirmap(dir.path(), &[]);
    assert!(result.success(), "dirmap should succeed: {}", result.stderr);

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert!(lines[0].starts_with("📦"), "root framing first: {}", result.stdout);
    assert_eq!(&lines[1..], &["┣ 📂a", "┃ ┗ 📜inner.txt", "┗ 📜b.txt"]);
}

#[test]
fn test_root_name_in_framing() {
    let dir = TestDir::new();
    dir.add_file("project/main.rs", "");

    let result = run_dirmap(dir.path(), &["project"]);
    assert!(result.success());
    assert_eq!(result.stdout, "📦project\n┗ 📜main.rs\n");
}

#[test]
fn test_parent_dir_argument_uses_real_name() {
    let dir = TestDir::new();
    dir.add_file("project/inner/x.txt", "");

    let result = run_dirmap(&dir.path().join("project/inner"), &[".."]);
    assert!(result.success(), "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "📦project\n┗ 📂inner\n┃ ┗ 📜x.txt\n");
}

#[test]
fn test_graph_output() {
    let dir = TestDir::new();
    dir.add_file("sub/x.txt", "");

    let result = run_dirmap(dir.path(), &["--format", "graph"]);
    assert!(result.success());
    assert_eq!(result.stdout, "    sub --> x.txt\n");
}

#[test]
fn test_outline_output() {
    let dir = TestDir::new();
    dir.add_file("a/b.txt", "");

    let result = run_dirmap(dir.path(), &["-f", "outline"]);
    assert!(result.success());
    assert_eq!(result.stdout, "- a\n    - b.txt\n");
}

#[test]
fn test_json_output_has_all_documents() {
    let dir = TestDir::new();
    dir.add_file("a/b.txt", "");

    let result = run_dirmap(dir.path(), &["--format", "json"]);
    assert!(result.success());

    let value: serde_json::Value = serde_json::from_str(&result.stdout).expect("valid json");
    assert_eq!(value["tree"], "┗ 📂a\n┃ ┗ 📜b.txt\n");
    assert_eq!(value["graph"], "    a --> b.txt\n");
    assert_eq!(value["outline"], "- a\n    - b.txt\n");
}

#[test]
fn test_html_panel() {
    let dir = TestDir::new();
    dir.add_file("src/lib.rs", "");

    let result = run_dirmap(dir.path(), &["--format", "html", "--view", "outline"]);
    assert!(result.success());
    assert!(result.stdout.starts_with("<!DOCTYPE html>"));
    assert!(result.stdout.contains("Switch to Outline View"));
    assert!(result.stdout.contains("- src\n    - lib.rs\n"));
    assert!(result.stdout.contains(r#"name="icons">📂</span>src"#));
}

#[test]
fn test_missing_path_renders_empty() {
    let dir = TestDir::new();

    let result = run_dirmap(dir.path(), &["--format", "outline", "does-not-exist"]);
    assert!(result.success(), "missing path is not an error: {}", result.stderr);
    assert_eq!(result.stdout, "");
}

#[test]
fn test_save_to_workspace() {
    let dir = TestDir::new();
    dir.add_file("tree/sub/x.txt", "");
    let workspace = dir.add_dir("ws");

    let result = run_dirmap(
        dir.path(),
        &["tree", "--save", "--workspace", workspace.to_str().unwrap()],
    );
    assert!(result.success(), "save should succeed: {}", result.stderr);
    assert!(result.stderr.contains("MindMap.md has been saved successfully!"));
    assert_eq!(
        std::fs::read_to_string(workspace.join("MindMap.md")).unwrap(),
        "    sub --> x.txt\n"
    );
}

#[test]
fn test_save_outline_view() {
    let dir = TestDir::new();
    dir.add_file("tree/a/b.txt", "");
    let workspace = dir.add_dir("ws");

    let result = run_dirmap(
        dir.path(),
        &[
            "tree",
            "--view",
            "outline",
            "--save",
            "-w",
            workspace.to_str().unwrap(),
        ],
    );
    assert!(result.success());
    assert_eq!(
        std::fs::read_to_string(workspace.join("MindMap.md")).unwrap(),
        "- a\n    - b.txt\n"
    );
}

#[test]
fn test_save_without_workspace_reports_error() {
    let dir = TestDir::new();
    dir.add_file("x.txt", "");

    let result = run_dirmap(dir.path(), &["--save"]);
    assert_eq!(result.code, Some(2));
    // Render output is unaffected by the failed save
    assert_eq!(result.stdout.lines().nth(1), Some("┗ 📜x.txt"));
    assert!(
        result
            .stderr
            .contains("Failed to save MindMap.md: no workspace folder is open"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn test_messages_from_stdin() {
    let dir = TestDir::new();
    dir.add_file("x.txt", "");
    let workspace = dir.add_dir("ws");

    let stdin = concat!(
        r#"{"command":"refresh"}"#,
        "\n",
        r#"{"command":"saveMindMap","text":"edited by hand\n"}"#,
        "\n"
    );
    let result = run_dirmap_with_stdin(
        dir.path(),
        &["--messages", "--workspace", workspace.to_str().unwrap()],
        stdin,
    );
    assert!(result.success(), "stderr: {}", result.stderr);
    assert_eq!(
        std::fs::read_to_string(workspace.join("MindMap.md")).unwrap(),
        "edited by hand\n"
    );
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("dirmap")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--save"));
}

#[test]
fn test_cli_rejects_unknown_format() {
    Command::cargo_bin("dirmap")
        .unwrap()
        .args(["--format", "svg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

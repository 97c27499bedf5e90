//! Integration tests for the project-autocomplete CLI

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn get_binary_path() -> String {
    // Try release first, then debug
    let release = "target/release/project-autocomplete";
    let debug = "target/debug/project-autocomplete";

    if std::path::Path::new(release).exists() {
        release.to_string()
    } else {
        debug.to_string()
    }
}

fn run_with_stdin(args: &[&str], stdin: &str) -> std::process::Output {
    let binary = get_binary_path();
    let mut child = Command::new(&binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn process");

    {
        let handle = child.stdin.as_mut().unwrap();
        handle.write_all(stdin.as_bytes()).unwrap();
    }

    child.wait_with_output().expect("Failed to read output")
}

#[test]
fn test_cli_json_output() {
    let output = run_with_stdin(&["-", "comp"], "fn compute() { complete(); }");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0]["contents"], "compute");
    assert_eq!(parsed[1]["contents"], "complete");
}

#[test]
fn test_cli_plain_output() {
    let output = run_with_stdin(&["--format", "plain", "-", "al"], "alpha albatross");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["alpha", "albatross"]);
}

#[test]
fn test_cli_limit() {
    let output = run_with_stdin(&["--limit", "1", "-", ""], "alpha beta gamma");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.len(), 1);
}

#[test]
fn test_cli_extra_source_annotated() {
    let temp = TempDir::new().unwrap();
    let extra = temp.path().join("helper.rb");
    fs::write(&extra, "def gadget; end").unwrap();

    let output = run_with_stdin(
        &["--source", extra.to_str().unwrap(), "-", "gad"],
        "no matches here",
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0]["contents"], "gadget");
    assert_eq!(parsed[0]["trigger"], "gadget\t(helper.rb)");
}

#[test]
fn test_cli_project_folders_scanned() {
    let temp = TempDir::new().unwrap();
    let folder = temp.path().join("lib");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("util.py"), "def quantify(): pass").unwrap();

    let project = temp.path().join("project.json");
    fs::write(
        &project,
        format!(r#"{{"folders": [{{"path": "{}"}}]}}"#, folder.display()),
    )
    .unwrap();

    let output = run_with_stdin(
        &["--project", project.to_str().unwrap(), "-", "quant"],
        "nothing relevant",
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0]["trigger"], "quantify\t(util.py)");
}

#[test]
fn test_cli_broken_project_config_degrades() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project.json");
    fs::write(&project, "{definitely not json").unwrap();

    let output = run_with_stdin(
        &["--project", project.to_str().unwrap(), "-", "wor"],
        "working words",
    );

    // The active view still completes
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("working"));
}

#[test]
fn test_cli_custom_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.json");
    fs::write(&config, r#"{"min_word_size": 6}"#).unwrap();

    let output = run_with_stdin(
        &["--config", config.to_str().unwrap(), "-", ""],
        "tiny enormous",
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0]["contents"], "enormous");
}

#[test]
fn test_cli_file_input() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("buffer.txt");
    fs::write(&file, "falcon feather").unwrap();

    let output = Command::new(get_binary_path())
        .args([file.to_str().unwrap(), "fal"])
        .output()
        .expect("Failed to run command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("falcon"));
    assert!(!stdout.contains("feather"));
}

#[test]
fn test_cli_missing_file_fails() {
    let output = Command::new(get_binary_path())
        .args(["/nonexistent/buffer.txt", "pre"])
        .output()
        .expect("Failed to run command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"));
}

#[test]
fn test_cli_verbose_mode() {
    let output = run_with_stdin(&["--verbose", "-", "wor"], "words to work with");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("extra sources"));
}

#[test]
fn test_cli_help() {
    let output = Command::new(get_binary_path())
        .args(["--help"])
        .output()
        .expect("Failed to run command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("project-autocomplete"));
    assert!(stdout.contains("--project"));
    assert!(stdout.contains("--format"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(get_binary_path())
        .args(["--version"])
        .output()
        .expect("Failed to run command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("project-autocomplete"));
}

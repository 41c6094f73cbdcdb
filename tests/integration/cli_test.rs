//! End-to-end runs of the `required-exports` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run(dir: &Path, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_required-exports"));
    command
        .args(args)
        .arg("--no-progress")
        .arg("--no-colors")
        .current_dir(dir);
    for key in ["EXCLUDE", "FORMAT", "SEVERITY", "IGNORE_PRIVATE", "RULE_OPTIONS"] {
        command.env_remove(format!("REQUIRED_EXPORTS_{key}"));
    }
    command.output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_findings_fail_the_run() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.ts"), "const foo = 1;\nexport function ok() {}\n").unwrap();

    let output = run(dir.path(), &["a.ts"]);
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains(
        "a.ts:1:1  error  Declaration \"foo\" must be exported  required-exports/required-exports"
    ));
    assert!(text.contains("1 problem(s) in 1 of 1 file(s)"));
}

#[test]
fn test_warn_severity_and_clean_runs_pass() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.ts"), "class Baz {}\n").unwrap();

    let output = run(dir.path(), &["--severity", "warn"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("  warning  Declaration \"Baz\" must be exported"));

    let output = run(dir.path(), &["--no-class"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No problems found in 1 file(s)"));
}

#[test]
fn test_json_output_to_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "function bar() {}\nconst _x = 1;\n").unwrap();

    let output = run(
        dir.path(),
        &["--format", "json", "--output-file", "report.json", "--check-private"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("report.json")).unwrap()).unwrap();
    let names: Vec<&str> = report["files"][0]["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["bar", "_x"]);
    assert_eq!(report["files"][0]["findings"][0]["fix"]["replacement"], "export function bar() {}");
}

#[test]
fn test_fix_flag_rewrites_files() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("types.ts");
    fs::write(&file, "interface Qux {}\ntype Quux = string;\n").unwrap();

    let output = run(dir.path(), &["--fix"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "export interface Qux {}\nexport type Quux = string;\n"
    );
}

#[test]
fn test_config_file_and_init() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.ts"), "enum Color { Red }\n").unwrap();

    let output = run(dir.path(), &["--init"]);
    assert_eq!(output.status.code(), Some(0));
    let config_path = dir.path().join(".required-exports.toml");
    assert!(config_path.is_file());

    let config = fs::read_to_string(&config_path).unwrap();
    fs::write(&config_path, config.replace("enum = true", "enum = false")).unwrap();
    let output = run(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));

    fs::write(&config_path, "[rule]\nnamespace = true\n").unwrap();
    let output = run(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_rule_options_and_missing_path() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), &["--rule-options", r#"{"variable": "yes"}"#]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid rule options"));

    let output = run(dir.path(), &["does-not-exist"]);
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_print_schema() {
    let dir = tempdir().unwrap();
    let output = run(dir.path(), &["--print-schema"]);
    assert_eq!(output.status.code(), Some(0));

    let document: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(document["meta"]["qualifiedName"], "required-exports/required-exports");
    assert_eq!(document["recommended"]["rules"]["required-exports/required-exports"], "error");
}

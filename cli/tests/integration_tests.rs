use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Minimal option table YAML for testing.
fn write_table(dir: &Path) -> PathBuf {
    let yaml = r#"version: "1.0"
program: archiver
options:
  - short: v
    long: verbose
  - short: o
    long: output
    takes_value: true
  - takes_value: true
"#;
    let path = dir.join("archiver.yaml");
    fs::write(&path, yaml).expect("failed to write table");
    path
}

fn optbind(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_optbind"))
        .args(args)
        .output()
        .expect("failed to run optbind")
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

#[test]
fn parse_prints_bindings_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_table(dir.path());

    let out = optbind(&[
        "parse",
        "--table",
        table.to_str().unwrap(),
        "--",
        "-v",
        "--verbose",
        "-o",
        "out.tar",
        "src",
    ]);

    assert!(out.status.success(), "parse should succeed");
    assert!(out.stderr.is_empty());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["program"], "archiver");
    assert_eq!(report["ok"], true);
    assert_eq!(
        report["bindings"],
        serde_json::json!([
            {"name": "--verbose", "binding": {"count": 2}},
            {"name": "--output", "binding": {"value": "out.tar"}},
            {"name": "<positional>", "binding": {"value": "src"}},
        ])
    );
    assert_eq!(report["errors"], serde_json::json!([]));
}

#[test]
fn parse_reports_errors_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_table(dir.path());

    let out = optbind(&[
        "parse",
        "--table",
        table.to_str().unwrap(),
        "--",
        "a",
        "b",
        "-",
        "--output",
    ]);

    assert_eq!(out.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["ok"], false);
    assert_eq!(report["errors"][0]["kind"], "VALUE_WITHOUT_OPTION");
    assert_eq!(report["errors"][0]["subject"], "b");
    assert_eq!(report["errors"][1]["kind"], "ONLY_HYPHEN_MINUS");
    assert_eq!(report["errors"][1]["subject"], serde_json::Value::Null);
    assert_eq!(report["errors"][2]["message"], "--output: no value found");

    assert_eq!(
        String::from_utf8(out.stderr).unwrap(),
        "b: value without option\n\
         error: argument only consists of '-'\n\
         --output: no value found\n"
    );
}

#[test]
fn parse_yaml_output() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_table(dir.path());

    let out = optbind(&[
        "parse",
        "--table",
        table.to_str().unwrap(),
        "--format",
        "yaml",
        "--",
        "-v",
    ]);

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("program: archiver"));
    assert!(stdout.contains("--verbose"));
    assert!(stdout.contains("count: 1"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_succeeds_silently() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_table(dir.path());

    let out = optbind(&["check", "--table", table.to_str().unwrap(), "--", "-v", "in"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(out.stderr.is_empty());
}

#[test]
fn check_prints_each_error() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_table(dir.path());

    let out = optbind(&[
        "check",
        "--table",
        table.to_str().unwrap(),
        "--",
        "-xyz",
        "--nope",
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(out.stderr).unwrap(),
        "-xyz: more than 1 characters are not allowed with only 1 '-'\n\
         --nope: unknown option\n"
    );
}

#[test]
fn missing_table_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.yaml");

    let out = optbind(&["check", "--table", missing.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("error: Failed to load table"));
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[test]
fn validate_accepts_clean_table() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_table(dir.path());

    let out = optbind(&["validate", "--table", table.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Option table is valid (3 option(s)).\n"
    );
}

#[test]
fn validate_lists_issues() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.json");
    fs::write(
        &path,
        r#"{"version": "1.0", "options": [{"short": "v"}, {"short": "v"}, {}]}"#,
    )
    .unwrap();

    let out = optbind(&["validate", "--table", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "option #1: duplicate short option -v\n\
         option #2: definition has no name and takes no value\n\
         2 issue(s) found.\n"
    );
}

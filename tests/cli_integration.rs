// CLI integration tests for the yaml2json binary.
use std::{fs, path::Path, process::Command};

use serde_json::Value;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_yaml2json");
    let mut cmd = Command::new(exe);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read_dir")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn converts_file_next_to_input() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("a.yaml");
    fs::write(&input, "key: 1\nlist:\n  - a\n  - b\n").expect("write");

    let output = cmd().arg(&input).output().expect("run");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
    let json = fs::read_to_string(temp.path().join("a.yaml.json")).expect("output");
    assert_eq!(json, r#"{"key": 1, "list": ["a", "b"]}"#);
}

#[test]
fn output_matches_independent_decode() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("data.yml");
    let yaml = "name: demo\nversion: 3\nratio: 0.25\nenabled: false\nmissing: ~\n\
                tags: [x, y]\nnested:\n  deeper:\n    - {k: v}\n";
    fs::write(&input, yaml).expect("write");

    let output = cmd().arg(&input).output().expect("run");
    assert!(output.status.success());

    let expected: Value = serde_yaml::from_str(yaml).expect("reference yaml");
    let written = fs::read_to_string(temp.path().join("data.yml.json")).expect("output");
    let actual: Value = serde_json::from_str(&written).expect("valid json");
    assert_eq!(actual, expected);
    let keys: Vec<&String> = actual.as_object().expect("object").keys().collect();
    assert_eq!(keys, ["name", "version", "ratio", "enabled", "missing", "tags", "nested"]);
}

#[test]
fn second_run_is_byte_identical() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("same.yaml");
    fs::write(&input, "b: [3, 2, 1]\na: {y: 1, x: 2}\n").expect("write");
    let out = temp.path().join("same.yaml.json");

    assert!(cmd().arg(&input).status().expect("run").success());
    let first = fs::read(&out).expect("first");
    assert!(cmd().arg(&input).status().expect("run").success());
    let second = fs::read(&out).expect("second");

    assert_eq!(first, second);
}

#[test]
fn missing_argument_is_usage_error() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = cmd().current_dir(temp.path()).output().expect("run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("<PATH>"));
    assert!(dir_entries(temp.path()).is_empty());
}

#[test]
fn empty_path_is_usage_error() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = cmd().current_dir(temp.path()).arg("").output().expect("run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<PATH>"));
    assert!(dir_entries(temp.path()).is_empty());
}

#[test]
fn missing_input_fails() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("nope.yaml");

    let output = cmd().arg(&input).output().expect("run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.yaml"));
    assert!(dir_entries(temp.path()).is_empty());
}

#[test]
fn invalid_yaml_fails_without_output() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("bad.yaml");
    fs::write(&input, "key: {a: 1, b: 2\nnext: 3\n").expect("write");

    let output = cmd().arg(&input).output().expect("run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed YAML deserialization"));
    assert!(stderr.contains("line"));
    assert_eq!(dir_entries(temp.path()), ["bad.yaml"]);
}

#[test]
fn mapping_key_fails_and_removes_output() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("keys.yaml");
    fs::write(&input, "first: 1\n? {inner: map}\n: value\n").expect("write");

    let output = cmd().arg(&input).output().expect("run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("key must be a scalar"));
    assert!(!temp.path().join("keys.yaml.json").exists());
    assert_eq!(dir_entries(temp.path()), ["keys.yaml"]);
}

#[test]
fn debug_logging_goes_to_stderr() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("log.yaml");
    fs::write(&input, "a: 1\n").expect("write");

    let output = cmd()
        .env("RUST_LOG", "debug")
        .arg(&input)
        .output()
        .expect("run");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("decoded YAML document"));
    assert!(stderr.contains("wrote JSON document"));
}

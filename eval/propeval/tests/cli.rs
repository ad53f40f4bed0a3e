use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

const INPUT: &str = r#"{"y_true": [1, null, 1, 0], "y_score": [0.1, 0.4, 0.35, 0.8]}"#;

fn propeval() -> Command {
    Command::new(env!("CARGO_BIN_EXE_propeval"))
}

fn write_input(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("scores.json");
    fs::write(&path, INPUT).unwrap();
    path
}

#[test]
fn cutoff_prints_score() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir);
    let out = propeval()
        .args(["cutoff", "-p", "0.5"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "0.4");
}

#[test]
fn precision_reads_stdin_and_honours_ignore_nas() {
    let mut child = propeval()
        .args(["--json", "precision", "-p", "0.5", "--ignore-nas"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(INPUT.as_bytes())
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["precision"], 0.0);
    assert_eq!(json["cutoff"], 0.4);
}

#[test]
fn missing_label_without_ignore_nas_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir);
    let out = propeval()
        .args(["precision", "-p", "0.5"])
        .arg(&input)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing label at index 1"));
}

#[test]
fn unreadable_input_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let out = propeval()
        .args(["confusion", "-p", "0.5"])
        .arg(dir.path().join("nope.json"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn report_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir);
    let config = dir.path().join("eval.toml");
    fs::write(&config, "proportions = [0.5, 1.0]\nignore_nas = true\nnormalize = true\n").unwrap();

    let out = propeval()
        .args(["report", "--json", "--config"])
        .arg(&config)
        .arg(&input)
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["labels"], 1.0);
    assert_eq!(json["n_labeled"], 3);
}

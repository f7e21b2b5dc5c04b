use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

fn textstat(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("textstat").unwrap();
    // keep the user's real config out of the test
    cmd.arg("--config").arg(dir.path().join("config.json"));
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn report_from_stdin() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(textstat(&dir).arg("--report").write_stdin("Hi. Hi!"));

    assert!(out.contains("Total Characters  07"));
    assert!(out.contains("Word Count        02"));
    assert!(out.contains("Sentence Count    02"));
    assert!(out.contains("Approx. reading time: <1 minute"));
    assert!(out.contains("H  2 (50.00%)"));
    assert!(out.contains("I  2 (50.00%)"));
}

#[test]
fn report_from_file_with_limit() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "abcdef").unwrap();

    let out = stdout_of(
        textstat(&dir)
            .args(["--report", "--limit", "3", "--input"])
            .arg(&input),
    );

    assert!(out.starts_with("Limit reached! Your text exceeds 3 characters."));
    assert!(out.contains("Total Characters  03"));
}

#[test]
fn report_excluding_spaces() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(
        textstat(&dir)
            .args(["--report", "--exclude-spaces"])
            .write_stdin("a b c"),
    );
    assert!(out.contains("Total Characters  03"));
    assert!(out.contains("Word Count        03"));
}

#[test]
fn report_json() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(
        textstat(&dir)
            .args(["--report", "--format", "json", "--expanded"])
            .write_stdin("abcdefg"),
    );

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["metrics"]["total_characters"], 7);
    assert_eq!(value["expanded"], true);
    assert_eq!(value["density"]["entries"].as_array().unwrap().len(), 7);
}

#[test]
fn report_csv() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(
        textstat(&dir)
            .args(["--report", "--format", "csv"])
            .write_stdin("aab"),
    );
    assert_eq!(out, "letter,count,percentage\nA,2,66.67\nB,1,33.33\n");
}

#[test]
fn piped_input_implies_report() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(textstat(&dir).write_stdin("one two three."));
    assert!(out.contains("Word Count        03"));
    assert!(out.contains("Sentence Count    01"));
}

#[test]
fn report_uses_stored_options() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{ "exclude_spaces": true, "char_limit": null }"#,
    )
    .unwrap();

    let out = stdout_of(textstat(&dir).arg("--report").write_stdin("a b"));
    assert!(out.contains("Total Characters  02"));
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    textstat(&dir)
        .args(["--report", "--input"])
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure();
}

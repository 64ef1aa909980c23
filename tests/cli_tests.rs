use assert_cmd::Command;
use std::fs;

#[test]
fn lint_command_emits_json_for_a_clean_interview() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("interview.yml");
    fs::write(&path, "question: Do you want help?\nyesno: want_help\n").unwrap();

    let output = Command::cargo_bin("formlint")
        .unwrap()
        .arg("lint")
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["files"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["files"][0]["report"]["scores"]["total_fields"], 1.0);
}

#[test]
fn lint_command_fails_on_unparseable_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yml");
    fs::write(&path, "question: [unclosed\n").unwrap();

    Command::cargo_bin("formlint")
        .unwrap()
        .arg("lint")
        .arg(&path)
        .assert()
        .failure();
}

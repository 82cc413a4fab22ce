use std::fs;

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn converts_fixed_paths_in_working_directory() -> anyhow::Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("ca-cert"), "line one\nline \"two\"\n")?;

    let assert = Command::cargo_bin("ca-cert-json")?
        .current_dir(dir.path())
        .assert()
        .success();
    assert!(assert.get_output().stdout.is_empty());

    assert_eq!(
        fs::read_to_string(dir.path().join("ca-cert.json"))?,
        r#"{"cert": "line one\nline \"two\"\n"}"#
    );
    Ok(())
}

#[test]
fn missing_input_fails_with_path_in_message() -> anyhow::Result<()> {
    let dir = tempdir()?;

    let assert = Command::cargo_bin("ca-cert-json")?
        .current_dir(dir.path())
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(
        stderr.contains("Failed to read certificate from ./ca-cert"),
        "unexpected stderr: {stderr}"
    );
    assert!(!dir.path().join("ca-cert.json").exists());
    Ok(())
}

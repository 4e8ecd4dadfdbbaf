//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn yt_summarize_bin(config_home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("yt-summarize").expect("binary should build");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("ANTHROPIC_API_KEY")
        .env_remove("OBSIDIAN_REST_API_KEY");
    cmd
}

#[test]
fn config_get_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    yt_summarize_bin(dir.path())
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    yt_summarize_bin(dir.path())
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_invalid_boolean() {
    let dir = tempfile::tempdir().unwrap();
    yt_summarize_bin(dir.path())
        .args(["config", "set", "save", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'true' or 'false'"));
}

#[test]
fn config_set_invalid_port() {
    let dir = tempfile::tempdir().unwrap();
    yt_summarize_bin(dir.path())
        .args(["config", "set", "obsidian.port", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("port"));

    assert!(!dir.path().join("yt-summarize/config.toml").exists());
}

#[test]
fn config_init_twice() {
    let dir = tempfile::tempdir().unwrap();
    yt_summarize_bin(dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    yt_summarize_bin(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_list_without_file() {
    let dir = tempfile::tempdir().unwrap();
    yt_summarize_bin(dir.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn malformed_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("yt-summarize");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "save = [").unwrap();

    yt_summarize_bin(dir.path())
        .args(["config", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn shorts_url_without_key_reports_missing_key() {
    let dir = tempfile::tempdir().unwrap();
    yt_summarize_bin(dir.path())
        .arg("https://www.youtube.com/shorts/dQw4w9WgXcQ")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Missing API key"));
}

#[test]
fn bare_id_of_wrong_length_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    yt_summarize_bin(dir.path())
        .arg("dQw4w9WgXc")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("dQw4w9WgXc"));
}

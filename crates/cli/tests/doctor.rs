use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn normalize_config_line(s: &str) -> String {
    s.lines()
        .map(|line| if line.starts_with("config: ") { "config: <CFG>" } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write_file(
        &cfg,
        r#"
version = 1
locale = "de"
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cardkit"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   cardkit doctor"))
        .stdout(predicate::str::contains("locale: de (formats as de)"))
        .stdout(predicate::str::contains("sample: -1.234.567,891"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    write_file(
        &tmp.path().join("cardkit").join("config.toml"),
        r#"
version = 1
locale = "fr-CA"

[diagnostics]
dev_warnings = false
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cardkit"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("locale: fr-CA (formats as fr)"))
        .stdout(predicate::str::contains("diagnostics.dev_warnings: false"));
}

#[test]
fn doctor_falls_back_to_defaults_without_config() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cardkit"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config: (defaults, no file at"))
        .stdout(predicate::str::contains("locale: en (formats as en)"))
        .stdout(predicate::str::contains("sample: -1,234,567.891"));
}

#[test]
fn doctor_applies_locale_flag() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cardkit"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["--locale", "en-IN", "doctor"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("locale: en-IN (formats as en-in)"))
        .stdout(predicate::str::contains("sample: -12,34,567.891"));
}

#[test]
fn doctor_fails_when_explicit_config_missing() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.toml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cardkit"));
    cmd.args(["doctor", "--config", missing.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL cardkit doctor"))
        .stdout(predicate::str::contains("config file not found"));
}

#[test]
fn doctor_fails_on_unsupported_version() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write_file(&cfg, "version = 2\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cardkit"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["--config", cfg.to_str().unwrap(), "doctor"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL cardkit doctor"))
        .stdout(predicate::str::contains("version 2 is unsupported"))
        .stdout(predicate::str::contains("looked for:").not());
}

#[test]
fn doctor_snapshot() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write_file(
        &cfg,
        r#"
version = 1
locale = "en"

[diagnostics]
dev_warnings = false

[logging]
level = "warn"
"#,
    );

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("cardkit"))
        .args(["doctor", "--config", cfg.to_str().unwrap()])
        .assert()
        .success();

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    insta::assert_snapshot!(normalize_config_line(&out), @r"
    OK   cardkit doctor
    config: <CFG>
    locale: en (formats as en)
    sample: -1,234,567.891
    diagnostics.dev_warnings: false
    logging.level: warn
    ");
}

use std::fs;
use std::path::PathBuf;

use cv_gen_core::ExitCode;
use predicates::prelude::*;
use tempfile::tempdir;

fn cargo_bin() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("cv-gen").unwrap()
}

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("lebenslauf.md")
}

#[test]
fn generates_html_and_prints_summary() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("index.html");

    let mut cmd = cargo_bin();
    cmd.arg(fixture_path()).arg("-o").arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generated"))
        .stdout(predicate::str::contains("Language: de"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("Jana Hoffmann"));
    assert!(html.contains("<html lang=\"de\">"));
}

#[test]
fn unrecognized_language_falls_back_to_default() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("index.html");

    let mut cmd = cargo_bin();
    cmd.arg(fixture_path())
        .arg("-o")
        .arg(&output)
        .arg("-l")
        .arg("klingon");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Language: de"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<html lang=\"de\">"));
}

#[test]
fn english_language_switches_labels() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("index.html");

    let mut cmd = cargo_bin();
    cmd.arg(fixture_path())
        .arg("-o")
        .arg(&output)
        .arg("-l")
        .arg("en")
        .arg("--quiet");

    cmd.assert().success().stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("Print"));
}

#[test]
fn missing_source_fails_with_io_exit_code() {
    let dir = tempdir().unwrap();

    let mut cmd = cargo_bin();
    cmd.arg(dir.path().join("missing.md"))
        .arg("-o")
        .arg(dir.path().join("index.html"));

    cmd.assert()
        .failure()
        .code(ExitCode::Io as i32)
        .stderr(predicate::str::contains("failed to read"));

    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn incomplete_entries_warn_on_stderr_without_failing() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("index.html");

    let mut cmd = cargo_bin();
    cmd.arg(fixture_path()).arg("-o").arg(&output);

    // The second experience entry has neither job title nor period.
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("has no job title"))
        .stderr(predicate::str::contains("has no period"));

    assert!(output.exists());
}

#[test]
fn dump_model_prints_json() {
    let mut cmd = cargo_bin();
    cmd.arg(fixture_path()).arg("--dump-model");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"sections\""))
        .stdout(predicate::str::contains("\"experience\""));
}

//! Integration tests for groundwork-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn groundwork() -> Command {
    Command::cargo_bin("groundwork").unwrap()
}

// ── global flags ──────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    groundwork()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("finalize"))
        .stdout(predicate::str::contains("check-name"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    groundwork()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn finalize_help_lists_flags() {
    groundwork()
        .args(["finalize", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--language-version"))
        .stdout(predicate::str::contains("--license"))
        .stdout(predicate::str::contains("--visibility"))
        .stdout(predicate::str::contains("--project-url"));
}

// ── check-name ────────────────────────────────────────────────────────────────

#[test]
fn check_name_accepts_valid_names() {
    groundwork()
        .args(["check-name", "valid_module_name2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid module name"));
}

#[test]
fn check_name_rejects_empty_name() {
    groundwork()
        .args(["check-name", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
fn check_name_rejects_keywords() {
    groundwork()
        .args(["check-name", "class"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Python keyword"));
}

#[test]
fn check_name_rejects_pattern_violations() {
    groundwork()
        .args(["check-name", "invalid module name"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a valid Python module name"));
}

// ── finalize: validation boundaries ───────────────────────────────────────────

#[test]
fn finalize_requires_a_remote_target() {
    groundwork()
        .args([
            "finalize",
            "--language-version",
            "3.12",
            "--package-name",
            "my_package",
        ])
        .assert()
        .code(2);
}

#[test]
fn finalize_rejects_unknown_agent_before_running_anything() {
    let temp = TempDir::new().unwrap();
    groundwork()
        .current_dir(temp.path())
        .args([
            "finalize",
            "--language-version",
            "3.12",
            "--package-name",
            "my_package",
            "--project-url",
            "https://github.com/user/my_package.git",
            "--agent",
            "copilot",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported coding agent"));

    // Nothing was created in the empty directory.
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn finalize_rejects_invalid_visibility() {
    groundwork()
        .args([
            "finalize",
            "--language-version",
            "3.12",
            "--package-name",
            "my_package",
            "--visibility",
            "secret",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("private"))
        .stderr(predicate::str::contains("public"));
}

#[test]
fn finalize_rejects_unknown_protocol() {
    groundwork()
        .args([
            "finalize",
            "--language-version",
            "3.12",
            "--package-name",
            "my_package",
            "--project-url",
            "ssh://github.com/user/repo.git",
            "--protocol",
            "ssh",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported remote protocol"));
}

// ── finalize: dry run ─────────────────────────────────────────────────────────

#[test]
fn dry_run_prints_the_plan_and_touches_nothing() {
    let temp = TempDir::new().unwrap();
    groundwork()
        .current_dir(temp.path())
        .args([
            "finalize",
            "--language-version",
            "3.12",
            "--license",
            "MIT",
            "--package-name",
            "my_package",
            "--project-url",
            "https://github.com/user/my_package.git",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("git init"))
        .stdout(predicate::str::contains("uv sync"));

    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn dry_run_quiet_suppresses_the_plan() {
    let temp = TempDir::new().unwrap();
    groundwork()
        .current_dir(temp.path())
        .args([
            "finalize",
            "--quiet",
            "--language-version",
            "3.12",
            "--package-name",
            "my_package",
            "--project-url",
            "https://github.com/user/my_package.git",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── configuration ─────────────────────────────────────────────────────────────

#[test]
fn missing_config_file_exits_with_configuration_code() {
    groundwork()
        .args([
            "--config",
            "/definitely/not/a/real/groundwork.toml",
            "check-name",
            "my_module",
        ])
        .assert()
        .code(4);
}

#[test]
fn completions_emit_a_script() {
    groundwork()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("groundwork"));
}

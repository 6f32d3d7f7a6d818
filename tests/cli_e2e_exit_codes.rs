//! End-to-end tests for CLI exit codes.
//!
//! - Exit code 0: the application was written, or `--help`/`--version`
//! - Exit code 1: any failure, including invalid command-line usage
//!
//! A failed run never leaves an application file behind.

mod common;

use common::prelude::*;

/// Exit code 0 is returned for a successful build.
#[test]
fn test_exit_code_success() {
    let fixture = TestFixture::new().with_file("feature.json", features::MINIMAL);

    fixture
        .command()
        .args(["-f", "feature.json"])
        .assert()
        .code(0);

    fixture
        .child("application.json")
        .assert(predicate::path::is_file());
}

/// Exit code 0 is returned for --help.
#[test]
fn test_exit_code_help() {
    let fixture = TestFixture::new();

    fixture
        .bare_command()
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("--repository-urls"));
}

/// Exit code 0 is returned for --version.
#[test]
fn test_exit_code_version() {
    let fixture = TestFixture::new();

    fixture
        .bare_command()
        .arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Exit code 1 with usage when neither files nor directories are given.
#[test]
fn test_exit_code_missing_inputs() {
    let fixture = TestFixture::new();

    fixture
        .bare_command()
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Required argument missing: model files or directory",
        ))
        .stderr(predicate::str::contains("Usage:"));

    fixture
        .child("application.json")
        .assert(predicate::path::missing());
}

/// Exit code 1 is returned for an unknown flag.
#[test]
fn test_exit_code_unknown_flag() {
    let fixture = TestFixture::new();

    fixture
        .bare_command()
        .arg("--definitely-not-a-flag")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

/// Exit code 1 is returned when a flag is missing its value.
#[test]
fn test_exit_code_flag_without_value() {
    let fixture = TestFixture::new();

    fixture.bare_command().arg("-f").assert().code(1);
}

/// Exit code 1 when the directories hold no feature files.
#[test]
fn test_exit_code_no_features() {
    let fixture = TestFixture::new();
    fixture.child("empty").create_dir_all().unwrap();

    fixture
        .command()
        .args(["-d", "empty"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No feature files found."));
}

/// Exit code 1 when an explicit file does not exist.
#[test]
fn test_exit_code_missing_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["-f", "does-not-exist.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error reading feature: does-not-exist.json",
        ));

    fixture
        .child("application.json")
        .assert(predicate::path::missing());
}

/// Exit code 1 and no output for malformed JSON.
#[test]
fn test_exit_code_invalid_json() {
    let fixture = TestFixture::new()
        .with_file("good.json", features::MINIMAL)
        .with_file("bad.json", features::INVALID_JSON);

    fixture
        .command()
        .args(["-f", "good.json,bad.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error reading feature: bad.json"));

    fixture
        .child("application.json")
        .assert(predicate::path::missing());
}

/// Exit code 1 and no output for an undefined variable.
#[test]
fn test_exit_code_undefined_variable() {
    let fixture = TestFixture::new().with_file("broken.json", features::UNDEFINED_VARIABLE);

    fixture
        .command()
        .args(["-f", "broken.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Undefined variable 'missing'"));

    fixture
        .child("application.json")
        .assert(predicate::path::missing());
}

/// Exit code 1 when the output directory does not exist.
#[test]
fn test_exit_code_unwritable_output() {
    let fixture = TestFixture::new().with_file("feature.json", features::MINIMAL);

    fixture
        .command()
        .args(["-f", "feature.json", "-o", "missing/dir/app.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to write application"));
}

/// Exit code 1 when the cache directory cannot be created.
#[test]
fn test_exit_code_unusable_cache_dir() {
    let fixture = TestFixture::new()
        .with_file("feature.json", features::MINIMAL)
        .with_file("blocked", "a file, not a directory");

    fixture
        .bare_command()
        .args(["-f", "feature.json", "-c", "blocked/cache"])
        .arg("-u")
        .arg(fixture.path().join("repo"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to create artifact manager"));
}

/// Exit code 1 for an unsupported repository scheme.
#[test]
fn test_exit_code_unsupported_repository() {
    let fixture = TestFixture::new().with_file("feature.json", features::MINIMAL);

    fixture
        .bare_command()
        .args(["-f", "feature.json", "-u", "ftp://example.com/repo", "-c", "cache"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to create artifact manager"));
}

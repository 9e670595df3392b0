// Regression tests for the nestest binary: exit codes, plain output and
// miette diagnostics on stderr.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn nestest() -> Command {
    Command::cargo_bin("nestest").unwrap()
}

#[test]
fn list_prints_builtin_spec_files() {
    nestest()
        .arg("--list")
        .assert()
        .success()
        .stdout("collections\nlifecycle\n");
}

#[test]
fn passing_spec_file_exits_zero_with_plain_report() {
    let expected = "\n\
        Lifecycle hooks\n  \
        \u{2714} runs before and before_each ahead of the first case\n  \
        \u{2714} wraps every case in before_each and after_each\n\
        \n    \
        Nested suite\n      \
        \u{2714} runs before the parent's cases and ignores its hooks\n\
        \n";

    nestest()
        .args(["lifecycle", "--color", "never"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn summary_follows_the_report() {
    nestest()
        .args(["lifecycle", "--color", "never", "--summary"])
        .assert()
        .success()
        .stdout(predicates::str::ends_with("\n4 passing, 0 failing\n"));
}

#[test]
fn failing_cases_exit_one() {
    nestest()
        .args(["--color", "never"])
        .assert()
        .code(1)
        .stdout(
            contains("\u{2715} should fail this case to check the report")
                .and(contains("Lifecycle hooks")),
        );
}

#[test]
fn unknown_spec_file_is_a_usage_error() {
    nestest()
        .arg("nope")
        .assert()
        .code(2)
        .stderr(contains("unknown spec file").and(contains("nestest::cli::unknown_spec")));
}

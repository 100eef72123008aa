//! CLI integration tests using assert_cmd.
//!
//! Purely computational — no network or external state needed, so every
//! test always runs.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn primegen() -> Command {
    Command::cargo_bin("primegen").unwrap()
}

// --- Help and arg validation ---

#[test]
fn help_shows_both_modes() {
    primegen().arg("--help").assert().success().stdout(
        predicate::str::contains("--range")
            .and(predicate::str::contains("--digits"))
            .and(predicate::str::contains("[2, 3, 5, 7]")),
    );
}

#[test]
fn missing_mode_is_rejected() {
    primegen()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn modes_are_mutually_exclusive() {
    primegen()
        .args(["-r", "10", "-d", "2", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn zero_limit_is_rejected_at_parse_time() {
    primegen()
        .args(["-r", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn zero_digit_arguments_are_rejected_at_parse_time() {
    primegen()
        .args(["-d", "0", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
    primegen()
        .args(["-d", "3", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn non_integer_limit_is_rejected() {
    primegen()
        .args(["-r", "ten"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn oversized_digit_count_is_a_clean_error() {
    // Passes clap (positive) but exceeds the u64 digit ceiling in the core.
    primegen()
        .args(["-d", "25", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("digits must be at most"));
}

// --- Range mode output ---

#[test]
fn range_ten_prints_known_primes() {
    primegen()
        .args(["-r", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2, 3, 5, 7]"));
}

#[test]
fn range_thirty_prints_known_primes() {
    primegen()
        .args(["-r", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]",
        ));
}

#[test]
fn range_one_prints_no_primes_notice() {
    primegen()
        .args(["-r", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No prime numbers"));
}

#[test]
fn range_two_prints_only_two() {
    primegen()
        .args(["-r", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2]"));
}

// --- Digit mode output ---

#[test]
fn digit_mode_prints_requested_count_of_two_digit_primes() {
    let assert = primegen().args(["-d", "2", "3"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let line = stdout.trim();
    assert!(line.starts_with('[') && line.ends_with(']'), "{:?}", line);
    let values: Vec<u64> = line[1..line.len() - 1]
        .split(", ")
        .map(|v| v.parse().unwrap())
        .collect();

    assert_eq!(values.len(), 3);
    for v in values {
        assert!((10..=99).contains(&v), "{} is not two digits", v);
    }
}

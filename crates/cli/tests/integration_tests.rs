//! Integration tests for the hapticctl CLI
//!
//! These run the real binary against the console actuator, so "playback"
//! walks real wall-clock timelines; tests stick to the short effects.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test helper to create a hapticctl command
fn hapticctl() -> Command {
    Command::cargo_bin("hapticctl").unwrap()
}

#[test]
fn test_list_prints_whole_catalog() {
    hapticctl()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("pulse"))
        .stdout(predicate::str::contains("ramp-up"))
        .stdout(predicate::str::contains("soft-heartbeat"))
        .stdout(predicate::str::contains("missing-you"))
        .stdout(predicate::str::contains("Explosion / Impact"))
        .stdout(predicate::str::contains("Continuous Vibration"));
}

#[test]
fn test_play_short_effect_succeeds() {
    // soft-heartbeat finishes in a quarter second.
    hapticctl()
        .args(["play", "soft-heartbeat"])
        .assert()
        .success();
}

#[test]
fn test_play_continuous_with_parameters() {
    hapticctl()
        .args(["play", "continuous", "--duration", "0.05", "--intensity", "0.3"])
        .assert()
        .success();
}

#[test]
fn test_play_unknown_effect_fails() {
    hapticctl()
        .args(["play", "tickle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown effect 'tickle'"));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    hapticctl()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_version_flag() {
    hapticctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hapticctl"));
}

//! Policy specs
//!
//! Verify each policy decides the aggregate outcome of shell commands.

use crate::prelude::*;
use std::time::{Duration, Instant};

#[test]
fn all_succeeds_when_every_command_succeeds() {
    cli().args(&["run", "true", "true", "true"]).passes().stdout_eq("success\n");
}

#[test]
fn all_fails_when_one_command_fails() {
    cli()
        .args(&["run", "true", "false"])
        .fails()
        .stdout_eq("failure: `false` exited with 1\n");
}

#[test]
fn any_succeeds_with_one_success() {
    cli()
        .args(&["run", "--policy", "any", "false", "true", "exit 3"])
        .passes()
        .stdout_eq("success\n");
}

#[test]
fn any_fails_when_everything_fails() {
    cli()
        .args(&["run", "--policy", "any", "false", "false"])
        .fails()
        .stdout_has("failure");
}

#[test]
fn any_does_not_wait_for_slow_commands() {
    let started = Instant::now();
    cli()
        .args(&["run", "--policy", "any", "true", "sleep 10"])
        .passes();
    assert!(started.elapsed() < Duration::from_secs(8));
}

#[test]
fn some_succeeds_once_threshold_reached() {
    cli()
        .args(&["run", "--policy", "some:1", "true", "true"])
        .passes()
        .stdout_eq("success\n");
}

#[test]
fn timeout_fails_slow_commands() {
    cli()
        .args(&["run", "--timeout", "200ms", "sleep 10"])
        .fails()
        .stdout_has("timed out after 200ms");
}

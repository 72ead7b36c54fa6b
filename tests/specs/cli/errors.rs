//! Usage and launch error specs
//!
//! Errors that prevent any command from starting exit with code 2.

use crate::prelude::*;

#[test]
fn run_requires_commands() {
    cli().args(&["run"]).errors().stderr_has("required");
}

#[test]
fn unknown_policy_is_rejected() {
    cli()
        .args(&["run", "--policy", "most", "true"])
        .errors()
        .stderr_has("unknown policy");
}

#[test]
fn threshold_larger_than_command_count_is_a_launch_error() {
    cli()
        .args(&["run", "--policy", "some:3", "true"])
        .errors()
        .stderr_has("failed to launch: invalid threshold 3 for some policy over 1 pipelines");
}

#[test]
fn malformed_timeout_is_rejected() {
    cli()
        .args(&["run", "--timeout", "soon", "true"])
        .errors()
        .stderr_has("--timeout");
}

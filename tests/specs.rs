//! Behavioral specifications for the fanout CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/errors.rs"]
mod cli_errors;
#[path = "specs/cli/help.rs"]
mod cli_help;

// run/
#[path = "specs/run/config.rs"]
mod run_config;
#[path = "specs/run/output.rs"]
mod run_output;
#[path = "specs/run/policy.rs"]
mod run_policy;

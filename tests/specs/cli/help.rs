//! Help output specs

use crate::prelude::*;

#[test]
fn top_level_help_lists_run() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("aggregate status");
}

#[test]
fn run_help_lists_options() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--policy")
        .stdout_has("--timeout")
        .stdout_has("--config")
        .stdout_has("--dry-run");
}

//! Config file specs

use crate::prelude::*;

#[test]
fn config_sets_policy() {
    let project = Project::empty();
    project.file("fanout.toml", "policy = \"any\"\n");

    project
        .fanout()
        .args(&["run", "--config", "fanout.toml", "false", "true"])
        .passes();
}

#[test]
fn flags_override_config() {
    let project = Project::empty();
    project.file("fanout.toml", "policy = \"any\"\ntimeout = \"1m\"\n");

    project
        .fanout()
        .args(&[
            "run",
            "--config",
            "fanout.toml",
            "--policy",
            "all",
            "--timeout",
            "5s",
            "--dry-run",
            "false",
            "true",
        ])
        .passes()
        .stdout_eq("Parallel(false && true) [policy: all, timeout: 5s]\n");
}

#[test]
fn config_timeout_applies() {
    let project = Project::empty();
    project.file("fanout.toml", "timeout = \"150ms\"\n");

    project
        .fanout()
        .args(&["run", "--config", "fanout.toml", "sleep 10"])
        .fails()
        .stdout_has("timed out after 150ms");
}

#[test]
fn invalid_config_is_an_error() {
    let project = Project::empty();
    project.file("fanout.toml", "policy = { most = 2 }\n");

    project
        .fanout()
        .args(&["run", "--config", "fanout.toml", "true"])
        .errors()
        .stderr_has("invalid configuration");
}

#[test]
fn missing_config_is_an_error() {
    let project = Project::empty();

    project
        .fanout()
        .args(&["run", "--config", "absent.toml", "true"])
        .errors()
        .stderr_has("failed to read absent.toml");
}

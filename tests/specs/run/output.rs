//! Output format specs

use crate::prelude::*;

#[test]
fn json_success() {
    cli()
        .args(&["run", "--output", "json", "true"])
        .passes()
        .stdout_eq("{\n  \"ok\": true\n}\n");
}

#[test]
fn json_failure_carries_message() {
    cli()
        .args(&["run", "--output", "json", "exit 7"])
        .fails()
        .stdout_has("\"ok\": false")
        .stdout_has("exited with 7");
}

#[test]
fn dry_run_describes_without_running() {
    let project = Project::empty();

    project
        .fanout()
        .args(&["run", "--dry-run", "--policy", "at-least:2", "touch a", "touch b", "touch c"])
        .passes()
        .stdout_eq("Parallel(touch a && touch b && touch c) [policy: at-least:2]\n");

    assert!(!project.path().join("a").exists());
}

#[test]
fn dry_run_json() {
    cli()
        .args(&["run", "--dry-run", "--output", "json", "--timeout", "2s", "true"])
        .passes()
        .stdout_has("\"pipeline\": \"Parallel(true)\"")
        .stdout_has("\"policy\": \"all\"")
        .stdout_has("\"timeout\": \"2s\"");
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::fake::FakePipeline;
use crate::pipeline::{Completion, Pipeline};
use std::thread;

/// Pipeline that accepts the completion and throws it away
struct Forgetful;

impl Pipeline for Forgetful {
    fn run(self: Box<Self>, _timeout: Option<Duration>, _on_complete: Completion) -> Result<(), LaunchError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "forgetful".to_string()
    }
}

#[tokio::test]
async fn execute_returns_aggregate_status() {
    let op = crate::parallel![
        FakePipeline::succeeding("a"),
        FakePipeline::failing("b", "b failed"),
    ];
    let status = execute(op, None).await.unwrap();
    assert_eq!(status, Status::failure("b failed"));
}

#[tokio::test]
async fn execute_waits_for_completion_from_another_thread() {
    let (pipeline, trigger) = FakePipeline::manual("slow");
    let op = crate::parallel![pipeline].any();

    let waiter = tokio::spawn(execute(op, Some(Duration::from_secs(1))));
    while !trigger.is_launched() {
        tokio::task::yield_now().await;
    }
    assert_eq!(trigger.timeout(), Some(Duration::from_secs(1)));
    thread::spawn(move || trigger.succeed()).join().unwrap();

    assert_eq!(waiter.await.unwrap().unwrap(), Status::success());
}

#[tokio::test]
async fn execute_surfaces_launch_error() {
    let result = execute(FakePipeline::rejecting("x", "nope"), None).await;
    assert!(matches!(result, Err(LaunchError::StartFailed { .. })));
}

#[tokio::test]
async fn dropped_completion_becomes_failure() {
    let status = execute(Forgetful, None).await.unwrap();
    assert!(status.is_failure());
}

#[test]
fn blocking_execute_on_empty_parallel() {
    let status = execute_blocking(crate::parallel![], None).unwrap();
    assert_eq!(status, Status::success());
}

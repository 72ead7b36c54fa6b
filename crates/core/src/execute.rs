// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run a pipeline to completion

use crate::error::LaunchError;
use crate::pipeline::IntoPipeline;
use crate::status::Status;
use std::time::Duration;
use tokio::sync::oneshot;

/// Start `pipeline` and wait for its status
///
/// Launch errors are returned as `Err`; everything that happens after the
/// pipeline started arrives as the `Status`.
pub async fn execute(
    pipeline: impl IntoPipeline,
    timeout: Option<Duration>,
) -> Result<Status, LaunchError> {
    let rx = launch(pipeline, timeout)?;
    Ok(rx.await.unwrap_or_else(|_| dropped()))
}

/// Blocking variant of [`execute`]
///
/// Must not be called from within an async runtime.
pub fn execute_blocking(
    pipeline: impl IntoPipeline,
    timeout: Option<Duration>,
) -> Result<Status, LaunchError> {
    let rx = launch(pipeline, timeout)?;
    Ok(rx.blocking_recv().unwrap_or_else(|_| dropped()))
}

fn launch(
    pipeline: impl IntoPipeline,
    timeout: Option<Duration>,
) -> Result<oneshot::Receiver<Status>, LaunchError> {
    let pipeline = pipeline.into_pipeline();
    let (tx, rx) = oneshot::channel();
    tracing::debug!(pipeline = %pipeline.describe(), ?timeout, "executing");
    pipeline.run(
        timeout,
        Box::new(move |status| {
            // Receiver gone means the caller stopped waiting
            let _ = tx.send(status);
        }),
    )?;
    Ok(rx)
}

fn dropped() -> Status {
    Status::failure("pipeline dropped its completion without reporting")
}

#[cfg(test)]
#[path = "execute_tests.rs"]
mod tests;

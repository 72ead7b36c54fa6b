// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipelines that run a job on the tokio runtime

use crate::job::{FnJob, Job};
use fanout_core::{effective_timeout, Completion, LaunchError, Pipeline, Status};
use std::future::Future;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinError;

/// Runs a [`Job`] as a spawned tokio task
///
/// The effective timeout is enforced here: a job still running when it
/// expires is dropped and reported as a failure. A job that panics is
/// reported as a failure too.
pub struct TaskPipeline<J> {
    job: J,
    timeout: Option<Duration>,
    handle: Option<Handle>,
}

impl<J: Job> TaskPipeline<J> {
    pub fn new(job: J) -> Self {
        Self {
            job,
            timeout: None,
            handle: None,
        }
    }

    /// Own timeout, combined with the caller's ceiling
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Spawn on `handle` instead of the ambient runtime
    pub fn on(mut self, handle: Handle) -> Self {
        self.handle = Some(handle);
        self
    }
}

/// Task pipeline from an async closure
pub fn task<F, Fut>(name: impl Into<String>, f: F) -> TaskPipeline<FnJob<F>>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Status> + Send + 'static,
{
    TaskPipeline::new(FnJob::new(name, f))
}

impl<J: Job> Pipeline for TaskPipeline<J> {
    fn run(
        self: Box<Self>,
        timeout: Option<Duration>,
        on_complete: Completion,
    ) -> Result<(), LaunchError> {
        let TaskPipeline {
            job,
            timeout: configured,
            handle,
        } = *self;

        let handle = match handle {
            Some(handle) => handle,
            None => Handle::try_current().map_err(|_| LaunchError::NoRuntime {
                pipeline: job.describe(),
            })?,
        };
        let timeout = effective_timeout(timeout, configured);
        let name = job.describe();

        handle.spawn(async move {
            // The job runs in its own task so a panic surfaces as a JoinError
            let mut work = tokio::spawn(async move { job.execute().await });
            let joined = match timeout {
                Some(limit) => match tokio::time::timeout(limit, &mut work).await {
                    Ok(joined) => joined,
                    Err(_) => {
                        work.abort();
                        on_complete(Status::failure(format!(
                            "{} timed out after {}",
                            name,
                            humantime::format_duration(limit)
                        )));
                        return;
                    }
                },
                None => work.await,
            };
            on_complete(joined.unwrap_or_else(|e| job_lost(&name, &e)));
        });
        Ok(())
    }

    fn describe(&self) -> String {
        self.job.describe()
    }
}

fn job_lost(name: &str, error: &JoinError) -> Status {
    if error.is_panic() {
        tracing::error!(job = name, "job panicked");
        Status::failure(format!("{} panicked", name))
    } else {
        Status::failure(format!("{} was cancelled", name))
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;

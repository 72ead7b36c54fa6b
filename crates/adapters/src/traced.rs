// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced pipeline wrapper for consistent observability

use fanout_core::{Completion, LaunchError, Pipeline};
use std::time::{Duration, Instant};

/// Wrapper that adds tracing to any Pipeline
pub struct TracedPipeline<P> {
    inner: P,
}

impl<P> TracedPipeline<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Pipeline> Pipeline for TracedPipeline<P> {
    fn run(
        self: Box<Self>,
        timeout: Option<Duration>,
        on_complete: Completion,
    ) -> Result<(), LaunchError> {
        let TracedPipeline { inner } = *self;
        let name = inner.describe();
        let span = tracing::info_span!("pipeline.run", name = %name);
        let _guard = span.enter();

        tracing::info!(timeout = ?timeout, "starting");

        let start = Instant::now();
        let completion_span = span.clone();
        let result = Box::new(inner).run(
            timeout,
            Box::new(move |status| {
                let _guard = completion_span.enter();
                let elapsed_ms = start.elapsed().as_millis() as u64;
                if status.is_success() {
                    tracing::info!(elapsed_ms, %status, "completed");
                } else {
                    tracing::warn!(elapsed_ms, %status, "completed with failure");
                }
                on_complete(status);
            }),
        );

        if let Err(e) = &result {
            tracing::error!(error = %e, "launch failed");
        }
        result
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;

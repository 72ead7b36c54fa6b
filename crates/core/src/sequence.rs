// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential composition of pipelines
//!
//! Each stage starts from the completion of the previous one. The first
//! failing stage ends the sequence and its status is reported.

use crate::context::HandlerSlot;
use crate::error::LaunchError;
use crate::pipeline::{effective_timeout, BoxPipeline, Completion, IntoPipeline, Pipeline};
use crate::status::Status;
use std::sync::Arc;
use std::time::Duration;

/// Runs pipelines one after another
#[derive(Default)]
pub struct Sequence {
    stages: Vec<BoxPipeline>,
    timeout: Option<Duration>,
}

impl Sequence {
    pub fn new(stages: Vec<BoxPipeline>) -> Self {
        Self {
            stages,
            timeout: None,
        }
    }

    /// Append a stage
    pub fn then(mut self, stage: impl IntoPipeline) -> Self {
        self.stages.push(stage.into_pipeline());
        self
    }

    /// Upper bound forwarded to every stage
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<P: IntoPipeline> FromIterator<P> for Sequence {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Sequence::new(iter.into_iter().map(IntoPipeline::into_pipeline).collect())
    }
}

impl Pipeline for Sequence {
    fn run(
        self: Box<Self>,
        timeout: Option<Duration>,
        on_complete: Completion,
    ) -> Result<(), LaunchError> {
        let Sequence {
            stages,
            timeout: configured,
        } = *self;
        let timeout = effective_timeout(timeout, configured);
        let slot = Arc::new(HandlerSlot::new(on_complete));
        launch_next(stages.into_iter(), 0, timeout, slot)
    }

    fn describe(&self) -> String {
        let stages: Vec<String> = self.stages.iter().map(|s| s.describe()).collect();
        stages.join(" | ")
    }
}

/// Start the next stage, or report success when none are left
fn launch_next(
    mut stages: std::vec::IntoIter<BoxPipeline>,
    index: usize,
    timeout: Option<Duration>,
    slot: Arc<HandlerSlot>,
) -> Result<(), LaunchError> {
    let Some(stage) = stages.next() else {
        slot.fire(Status::success());
        return Ok(());
    };

    tracing::trace!(index, stage = %stage.describe(), "starting stage");
    let next = Arc::clone(&slot);
    stage.run(
        timeout,
        Box::new(move |status| {
            if status.is_failure() {
                tracing::debug!(index, %status, "stage failed");
                next.fire(status);
                return;
            }
            // Too late to return the error; report it as the outcome instead
            if let Err(e) = launch_next(stages, index + 1, timeout, Arc::clone(&next)) {
                tracing::warn!(index = index + 1, error = %e, "failed to launch stage");
                next.fire(Status::from(e));
            }
        }),
    )
}

/// Sequence over a fixed list of pipelines of any type
#[macro_export]
macro_rules! sequence {
    ($($stage:expr),* $(,)?) => {
        $crate::Sequence::new(::std::vec![
            $($crate::IntoPipeline::into_pipeline($stage)),*
        ])
    };
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;

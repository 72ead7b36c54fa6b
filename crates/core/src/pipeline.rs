// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The pipeline contract
//!
//! A pipeline is an asynchronous unit of work. `run` returns as soon as the
//! work has been started; the completion callback is invoked exactly once,
//! later, possibly on another thread.

use crate::error::LaunchError;
use crate::status::Status;
use std::time::Duration;

/// Callback receiving the final status of a pipeline
pub type Completion = Box<dyn FnOnce(Status) + Send + 'static>;

/// A type-erased pipeline
pub type BoxPipeline = Box<dyn Pipeline>;

/// Asynchronous unit of work that reports its outcome exactly once
pub trait Pipeline: Send {
    /// Start the pipeline
    ///
    /// On `Ok(())` the pipeline owns `on_complete` and must call it exactly
    /// once. On `Err` `on_complete` is dropped without being called; a
    /// pipeline that has already reported through it returns `Ok(())`.
    ///
    /// `timeout` is a ceiling imposed by the caller; `None` is unbounded.
    fn run(self: Box<Self>, timeout: Option<Duration>, on_complete: Completion)
        -> Result<(), LaunchError>;

    /// Human readable form for logs
    fn describe(&self) -> String;
}

/// Conversion into a boxed pipeline
///
/// Implemented for every concrete [`Pipeline`] and for [`BoxPipeline`]
/// itself, so heterogeneous lists can be collected without double boxing.
pub trait IntoPipeline {
    fn into_pipeline(self) -> BoxPipeline;
}

impl<P: Pipeline + 'static> IntoPipeline for P {
    fn into_pipeline(self) -> BoxPipeline {
        Box::new(self)
    }
}

impl IntoPipeline for BoxPipeline {
    fn into_pipeline(self) -> BoxPipeline {
        self
    }
}

/// Smallest of the caller's ceiling and the operation's own timeout
pub fn effective_timeout(
    supplied: Option<Duration>,
    configured: Option<Duration>,
) -> Option<Duration> {
    match (supplied, configured) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;

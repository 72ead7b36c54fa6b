// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake pipelines for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::error::LaunchError;
use crate::pipeline::{Completion, Pipeline};
use crate::status::Status;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded launch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCall {
    pub name: String,
    pub timeout: Option<Duration>,
}

/// Shared log of launch attempts, in order
#[derive(Clone, Default)]
pub struct FakeRecorder {
    calls: Arc<Mutex<Vec<LaunchCall>>>,
}

impl FakeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded launches
    pub fn calls(&self) -> Vec<LaunchCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Names of launched pipelines, in launch order
    pub fn names(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.name).collect()
    }

    fn record(&self, name: &str, timeout: Option<Duration>) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(LaunchCall {
                name: name.to_string(),
                timeout,
            });
    }
}

/// Handle completing a manual [`FakePipeline`] from any thread
#[derive(Clone, Default)]
pub struct FakeTrigger {
    launched: Arc<AtomicBool>,
    timeout: Arc<Mutex<Option<Duration>>>,
    pending: Arc<Mutex<Option<Completion>>>,
}

impl FakeTrigger {
    pub fn is_launched(&self) -> bool {
        self.launched.load(Ordering::Acquire)
    }

    /// Timeout the pipeline was launched with
    pub fn timeout(&self) -> Option<Duration> {
        *self.timeout.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Report `status` to whoever launched the pipeline
    ///
    /// Returns false if the pipeline was never launched or already completed.
    pub fn complete(&self, status: Status) -> bool {
        let pending = self
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        match pending {
            Some(on_complete) => {
                on_complete(status);
                true
            }
            None => false,
        }
    }

    pub fn succeed(&self) -> bool {
        self.complete(Status::success())
    }

    pub fn fail(&self, message: &str) -> bool {
        self.complete(Status::failure(message))
    }

    fn arm(&self, timeout: Option<Duration>, on_complete: Completion) {
        *self.timeout.lock().unwrap_or_else(|e| e.into_inner()) = timeout;
        *self.pending.lock().unwrap_or_else(|e| e.into_inner()) = Some(on_complete);
        self.launched.store(true, Ordering::Release);
    }
}

enum Behavior {
    Complete(Status),
    Manual(FakeTrigger),
    Reject(String),
}

/// Fake pipeline for testing
pub struct FakePipeline {
    name: String,
    behavior: Behavior,
    recorder: Option<FakeRecorder>,
}

impl FakePipeline {
    fn new(name: impl Into<String>, behavior: Behavior) -> Self {
        Self {
            name: name.into(),
            behavior,
            recorder: None,
        }
    }

    /// Completes with `status` as soon as it is launched
    pub fn completing(name: impl Into<String>, status: Status) -> Self {
        Self::new(name, Behavior::Complete(status))
    }

    pub fn succeeding(name: impl Into<String>) -> Self {
        Self::completing(name, Status::success())
    }

    pub fn failing(name: impl Into<String>, message: &str) -> Self {
        Self::completing(name, Status::failure(message))
    }

    /// Refuses to start
    pub fn rejecting(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(name, Behavior::Reject(reason.into()))
    }

    /// Completes only when the returned trigger fires
    pub fn manual(name: impl Into<String>) -> (Self, FakeTrigger) {
        let trigger = FakeTrigger::default();
        (Self::new(name, Behavior::Manual(trigger.clone())), trigger)
    }

    /// Record launch attempts into `recorder`
    pub fn recorded_by(mut self, recorder: &FakeRecorder) -> Self {
        self.recorder = Some(recorder.clone());
        self
    }
}

impl Pipeline for FakePipeline {
    fn run(
        self: Box<Self>,
        timeout: Option<Duration>,
        on_complete: Completion,
    ) -> Result<(), LaunchError> {
        let FakePipeline {
            name,
            behavior,
            recorder,
        } = *self;
        if let Some(recorder) = &recorder {
            recorder.record(&name, timeout);
        }

        match behavior {
            Behavior::Complete(status) => {
                on_complete(status);
                Ok(())
            }
            Behavior::Manual(trigger) => {
                trigger.arm(timeout, on_complete);
                Ok(())
            }
            Behavior::Reject(reason) => Err(LaunchError::StartFailed {
                pipeline: name,
                reason,
            }),
        }
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

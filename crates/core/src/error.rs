// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for launching pipelines

use thiserror::Error;

/// Errors raised synchronously while starting a pipeline
///
/// A launch error is only ever returned from `run`; it is never delivered
/// to a completion handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("invalid threshold {threshold} for {policy} policy over {size} pipelines")]
    InvalidThreshold {
        policy: &'static str,
        threshold: usize,
        size: usize,
    },
    #[error("no async runtime available to start {pipeline}")]
    NoRuntime { pipeline: String },
    #[error("failed to start {pipeline}: {reason}")]
    StartFailed { pipeline: String, reason: String },
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! fanout-core: parallel completion coordination for asynchronous pipelines
//!
//! This crate provides:
//! - The pipeline contract: start now, report exactly once later
//! - Decision policies (all, any, some, at least) over concurrent completions
//! - A parallel operation that launches pipelines and reports one aggregate status
//! - Sequential composition and helpers to run a pipeline to completion
//! - TOML configuration for policy and timeout defaults

pub mod config;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod policy;
pub mod status;

// Composition
pub mod builder;
pub mod execute;
pub mod parallel;
pub mod sequence;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub mod fake;

// Re-exports
pub use builder::{parallel, parallel_from};
pub use config::{ConfigError, ParallelConfig};
pub use context::{AggregationContext, HandlerSlot};
pub use error::LaunchError;
pub use execute::{execute, execute_blocking};
pub use parallel::{Assembling, Bound, Parallel, State};
pub use pipeline::{effective_timeout, BoxPipeline, Completion, IntoPipeline, Pipeline};
pub use policy::{
    AllPolicy, AnyPolicy, AtLeastPolicy, Policy, PolicyKind, PolicyParseError, SomePolicy,
};
pub use sequence::Sequence;
pub use status::Status;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePipeline, FakeRecorder, FakeTrigger, LaunchCall};

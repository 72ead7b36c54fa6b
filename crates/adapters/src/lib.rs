// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Concrete pipelines backed by the tokio runtime

pub mod job;
pub mod shell;
pub mod task;
pub mod traced;

pub use job::{FnJob, Job};
pub use shell::ShellJob;
pub use task::{task, TaskPipeline};
pub use traced::TracedPipeline;

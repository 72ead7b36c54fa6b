// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Async jobs that back task pipelines

use async_trait::async_trait;
use fanout_core::Status;
use std::future::Future;

/// A unit of async work producing a status
#[async_trait]
pub trait Job: Send + Sync + 'static {
    async fn execute(&self) -> Status;

    fn describe(&self) -> String;
}

/// Job backed by an async closure
pub struct FnJob<F> {
    name: String,
    f: F,
}

impl<F> FnJob<F> {
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

#[async_trait]
impl<F, Fut> Job for FnJob<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Status> + Send + 'static,
{
    async fn execute(&self) -> Status {
        (self.f)().await
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

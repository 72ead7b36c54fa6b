// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel operation: run several pipelines at once under a policy
//!
//! A `Parallel` starts in the [`Assembling`] state, where the policy and
//! timeout may be changed. Attaching a completion hook moves it to
//! [`Bound`], after which only execution is possible. Both states are
//! themselves pipelines, so parallel operations nest inside other parallel
//! operations and sequences.

use crate::context::AggregationContext;
use crate::error::LaunchError;
use crate::pipeline::{effective_timeout, BoxPipeline, Completion, Pipeline};
use crate::policy::PolicyKind;
use crate::status::Status;
use std::sync::Arc;
use std::time::Duration;

mod sealed {
    use crate::pipeline::Completion;

    pub trait Sealed {
        /// Wrap the engine's completion with whatever the state adds
        fn chain(self, on_complete: Completion) -> Completion;
    }
}

/// Configuration state of a [`Parallel`] operation
pub trait State: sealed::Sealed + Send + 'static {}

/// Policy and timeout can still be changed
#[derive(Debug, Default)]
pub struct Assembling;

/// A completion hook is attached; configuration is frozen
pub struct Bound {
    hook: Box<dyn FnOnce(&Status) + Send>,
}

impl sealed::Sealed for Assembling {
    fn chain(self, on_complete: Completion) -> Completion {
        on_complete
    }
}

impl State for Assembling {}

impl sealed::Sealed for Bound {
    fn chain(self, on_complete: Completion) -> Completion {
        let hook = self.hook;
        Box::new(move |status| {
            hook(&status);
            on_complete(status);
        })
    }
}

impl State for Bound {}

/// Runs an ordered set of pipelines concurrently
pub struct Parallel<S = Assembling> {
    pipelines: Vec<BoxPipeline>,
    policy: Option<PolicyKind>,
    timeout: Option<Duration>,
    state: S,
}

impl Parallel<Assembling> {
    pub fn new(pipelines: Vec<BoxPipeline>) -> Self {
        Self {
            pipelines,
            policy: None,
            timeout: None,
            state: Assembling,
        }
    }

    /// Every pipeline must succeed (the default)
    pub fn all(self) -> Self {
        self.policy(PolicyKind::All)
    }

    /// One successful pipeline is enough
    pub fn any(self) -> Self {
        self.policy(PolicyKind::Any)
    }

    /// `threshold` successes are required; decided as soon as they are
    /// reached or can no longer be reached
    pub fn some(self, threshold: usize) -> Self {
        self.policy(PolicyKind::Some(threshold))
    }

    /// At least `threshold` successes are required
    pub fn at_least(self, threshold: usize) -> Self {
        self.policy(PolicyKind::AtLeast(threshold))
    }

    pub fn policy(mut self, kind: PolicyKind) -> Self {
        self.policy = Some(kind);
        self
    }

    /// Upper bound forwarded to every pipeline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attach a hook that observes the aggregate status
    ///
    /// The hook runs before the status is passed on to whoever runs this
    /// operation.
    pub fn on_complete<F>(self, hook: F) -> Parallel<Bound>
    where
        F: FnOnce(&Status) + Send + 'static,
    {
        Parallel {
            pipelines: self.pipelines,
            policy: self.policy,
            timeout: self.timeout,
            state: Bound {
                hook: Box::new(hook),
            },
        }
    }
}

impl<S> Parallel<S> {
    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }

    /// Policy that will be used when the operation runs
    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.unwrap_or_default()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl<S: State> Pipeline for Parallel<S> {
    fn run(
        self: Box<Self>,
        timeout: Option<Duration>,
        on_complete: Completion,
    ) -> Result<(), LaunchError> {
        let Parallel {
            pipelines,
            policy,
            timeout: configured,
            state,
        } = *self;
        let kind = policy.unwrap_or_default();
        let size = pipelines.len();

        let span = tracing::debug_span!("parallel.run", policy = %kind, size);
        let _guard = span.enter();

        // An empty set resolves through the context release, whatever the policy
        if size > 0 {
            kind.validate(size)?;
        }

        let ctx = Arc::new(AggregationContext::new(
            sealed::Sealed::chain(state, on_complete),
            kind.build(size),
        ));
        let timeout = effective_timeout(timeout, configured);

        for (index, pipeline) in pipelines.into_iter().enumerate() {
            let shared = Arc::clone(&ctx);
            if let Err(e) = pipeline.run(timeout, Box::new(move |status| shared.examine(status))) {
                // Pipelines already started keep their reference; silence the handler
                // so the launch error is the only outcome reported
                if ctx.disarm() {
                    tracing::warn!(index, error = %e, "failed to launch pipeline");
                    return Err(e);
                }
                // An earlier completion already decided and reported the outcome
                tracing::warn!(index, error = %e, "failed to launch pipeline after outcome decided");
                return Ok(());
            }
        }

        tracing::debug!(?timeout, "launched");
        Ok(())
    }

    fn describe(&self) -> String {
        let inner: Vec<String> = self.pipelines.iter().map(|p| p.describe()).collect();
        format!("Parallel({})", inner.join(" && "))
    }
}

#[cfg(test)]
#[path = "parallel_tests.rs"]
mod tests;

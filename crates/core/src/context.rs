// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared aggregation context for parallel operations
//!
//! Every pipeline launched by a parallel operation holds a reference to the
//! same context. The context routes each completion through the policy and
//! guarantees the downstream handler is invoked exactly once, including when
//! no completion ever decides (the context fires a success when released).

use crate::pipeline::Completion;
use crate::policy::Policy;
use crate::status::Status;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// One-shot holder for a completion handler
///
/// The `spent` latch decides the single winner with one atomic swap; only
/// that winner ever locks the handler cell, so the mutex is never contended
/// and never decides anything.
pub struct HandlerSlot {
    spent: AtomicBool,
    handler: Mutex<Option<Completion>>,
}

impl HandlerSlot {
    pub fn new(handler: Completion) -> Self {
        Self {
            spent: AtomicBool::new(false),
            handler: Mutex::new(Some(handler)),
        }
    }

    /// Invoke the handler with `status` unless it already fired
    ///
    /// Returns true if this call invoked the handler.
    pub fn fire(&self, status: Status) -> bool {
        match self.take() {
            Some(handler) => {
                handler(status);
                true
            }
            None => false,
        }
    }

    /// Drop the handler without invoking it
    ///
    /// Returns true if the handler was still pending.
    pub fn disarm(&self) -> bool {
        self.take().is_some()
    }

    pub fn is_spent(&self) -> bool {
        self.spent.load(Ordering::Acquire)
    }

    fn take(&self) -> Option<Completion> {
        if self.spent.swap(true, Ordering::AcqRel) {
            return None;
        }
        self.handler.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}

/// Routes completions through a policy into a single handler call
pub struct AggregationContext {
    slot: HandlerSlot,
    policy: Box<dyn Policy>,
}

impl AggregationContext {
    pub fn new(handler: Completion, policy: Box<dyn Policy>) -> Self {
        Self {
            slot: HandlerSlot::new(handler),
            policy,
        }
    }

    /// Feed one pipeline completion through the policy
    pub fn examine(&self, status: Status) {
        let decided = self.policy.examine(&status);
        tracing::trace!(ok = status.is_success(), decided, "completion examined");
        if decided {
            self.handle(status);
        }
    }

    /// Forward `status` to the handler if it has not fired yet
    pub fn handle(&self, status: Status) -> bool {
        let fired = self.slot.fire(status);
        if fired {
            tracing::debug!("aggregate handler invoked");
        }
        fired
    }

    /// Give up on the handler; later completions become no-ops
    pub fn disarm(&self) -> bool {
        self.slot.disarm()
    }

    pub fn is_resolved(&self) -> bool {
        self.slot.is_spent()
    }
}

impl Drop for AggregationContext {
    fn drop(&mut self) {
        self.handle(Status::success());
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decision policies for parallel operations
//!
//! A policy sees the status of every pipeline as it completes and answers
//! whether the aggregate outcome is now known:
//! - **All**     - every pipeline must succeed; the first failure decides
//! - **Any**     - one success suffices; all failing decides on the last one
//! - **Some**    - `k` successes are required; decided once reached or unreachable
//! - **AtLeast** - `k` successes are required; successes never decide early
//!
//! `examine` is called at most once per pipeline, concurrently, from any
//! thread. Counters are plain atomics and every decision is derived from
//! the value returned by a single atomic operation.

use crate::error::LaunchError;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Stateful decision function over pipeline completions
pub trait Policy: Send + Sync {
    /// Returns true when `status` decides the aggregate outcome
    ///
    /// Calls after a decision are expected; their result is ignored.
    fn examine(&self, status: &Status) -> bool;
}

/// All pipelines need to succeed
#[derive(Debug, Default)]
pub struct AllPolicy;

impl Policy for AllPolicy {
    fn examine(&self, status: &Status) -> bool {
        status.is_failure()
    }
}

/// One successful pipeline is enough
#[derive(Debug)]
pub struct AnyPolicy {
    remaining: AtomicUsize,
}

impl AnyPolicy {
    pub fn new(size: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(size),
        }
    }
}

impl Policy for AnyPolicy {
    fn examine(&self, status: &Status) -> bool {
        let before = self.remaining.fetch_sub(1, Ordering::AcqRel);
        if status.is_success() {
            return true;
        }
        // Last one and nothing succeeded
        before == 1
    }
}

/// Exactly `threshold` successes are needed
#[derive(Debug)]
pub struct SomePolicy {
    remaining: AtomicUsize,
    succeeded: AtomicUsize,
    threshold: usize,
}

impl SomePolicy {
    pub fn new(size: usize, threshold: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(size),
            succeeded: AtomicUsize::new(0),
            threshold,
        }
    }
}

impl Policy for SomePolicy {
    fn examine(&self, status: &Status) -> bool {
        let before = self.remaining.fetch_sub(1, Ordering::AcqRel);
        if status.is_success() {
            let succeeded = self.succeeded.fetch_add(1, Ordering::AcqRel) + 1;
            return succeeded == self.threshold;
        }
        // Dropped below the threshold
        before == self.threshold
    }
}

/// At least `threshold` successes are needed
///
/// A success never decides. A failure decides when the remaining count
/// before it equals the threshold; otherwise the outcome is reported once
/// every pipeline has resolved and the aggregation context is released.
#[derive(Debug)]
pub struct AtLeastPolicy {
    remaining: AtomicUsize,
    threshold: usize,
}

impl AtLeastPolicy {
    pub fn new(size: usize, threshold: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(size),
            threshold,
        }
    }
}

impl Policy for AtLeastPolicy {
    fn examine(&self, status: &Status) -> bool {
        let before = self.remaining.fetch_sub(1, Ordering::AcqRel);
        if status.is_success() {
            return false;
        }
        before == self.threshold
    }
}

/// Selects which policy a parallel operation runs with
///
/// In TOML: `policy = "all"`, `policy = "any"`, `policy = { some = 2 }`,
/// `policy = { at_least = 2 }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    All,
    Any,
    Some(usize),
    AtLeast(usize),
}

impl PolicyKind {
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::All => "all",
            PolicyKind::Any => "any",
            PolicyKind::Some(_) => "some",
            PolicyKind::AtLeast(_) => "at-least",
        }
    }

    pub fn threshold(&self) -> Option<usize> {
        match self {
            PolicyKind::Some(k) | PolicyKind::AtLeast(k) => Some(*k),
            PolicyKind::All | PolicyKind::Any => None,
        }
    }

    /// Check the threshold against a pipeline set of `size`
    pub fn validate(&self, size: usize) -> Result<(), LaunchError> {
        match self.threshold() {
            Some(threshold) if threshold == 0 || threshold > size => {
                Err(LaunchError::InvalidThreshold {
                    policy: self.name(),
                    threshold,
                    size,
                })
            }
            _ => Ok(()),
        }
    }

    /// Fresh policy instance for a pipeline set of `size`
    pub fn build(&self, size: usize) -> Box<dyn Policy> {
        match *self {
            PolicyKind::All => Box::new(AllPolicy),
            PolicyKind::Any => Box::new(AnyPolicy::new(size)),
            PolicyKind::Some(k) => Box::new(SomePolicy::new(size, k)),
            PolicyKind::AtLeast(k) => Box::new(AtLeastPolicy::new(size, k)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.threshold() {
            Some(k) => write!(f, "{}:{}", self.name(), k),
            None => write!(f, "{}", self.name()),
        }
    }
}

/// Errors parsing the textual policy form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyParseError {
    #[error("unknown policy '{0}' (expected all, any, some:K or at-least:K)")]
    Unknown(String),
    #[error("policy '{0}' requires a threshold, e.g. {0}:2")]
    MissingThreshold(String),
    #[error("invalid threshold '{value}' for policy '{policy}'")]
    InvalidThreshold { policy: String, value: String },
}

impl FromStr for PolicyKind {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, threshold) = match s.split_once(':') {
            Some((name, value)) => (name, Some(value)),
            None => (s, None),
        };
        let name = name.to_ascii_lowercase().replace('_', "-");

        let parse_threshold = |value: Option<&str>| -> Result<usize, PolicyParseError> {
            let value = value.ok_or_else(|| PolicyParseError::MissingThreshold(name.clone()))?;
            value
                .trim()
                .parse()
                .map_err(|_| PolicyParseError::InvalidThreshold {
                    policy: name.clone(),
                    value: value.to_string(),
                })
        };

        match name.as_str() {
            "all" if threshold.is_none() => Ok(PolicyKind::All),
            "any" if threshold.is_none() => Ok(PolicyKind::Any),
            "some" => Ok(PolicyKind::Some(parse_threshold(threshold)?)),
            "at-least" => Ok(PolicyKind::AtLeast(parse_threshold(threshold)?)),
            _ => Err(PolicyParseError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completion status reported by pipelines

use crate::error::LaunchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single pipeline, or the aggregate outcome of many
///
/// Immutable once built. The default status is a generic success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Status {
    /// Generic success
    pub fn success() -> Self {
        Self {
            ok: true,
            message: None,
        }
    }

    /// Success carrying an informational message
    pub fn success_with(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: Some(message.into()),
        }
    }

    /// Generic failure
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.ok
    }

    pub fn is_failure(&self) -> bool {
        !self.ok
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::success()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.ok { "success" } else { "failure" };
        match &self.message {
            Some(message) => write!(f, "{}: {}", outcome, message),
            None => write!(f, "{}", outcome),
        }
    }
}

impl From<LaunchError> for Status {
    fn from(err: LaunchError) -> Self {
        Self::failure(err.to_string())
    }
}

impl From<&LaunchError> for Status {
    fn from(err: &LaunchError) -> Self {
        Self::failure(err.to_string())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;

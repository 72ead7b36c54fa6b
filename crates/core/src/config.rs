// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration for parallel operations
//!
//! ```toml
//! policy = { at_least = 2 }
//! timeout = "30s"
//! ```

use crate::parallel::{Assembling, Parallel};
use crate::policy::PolicyKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Defaults applied to a parallel operation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Decision policy
    pub policy: PolicyKind,
    /// Upper bound forwarded to every pipeline
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

impl ParallelConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Apply policy and timeout to an operation still being assembled
    pub fn apply(&self, op: Parallel<Assembling>) -> Parallel<Assembling> {
        let op = op.policy(self.policy);
        match self.timeout {
            Some(timeout) => op.with_timeout(timeout),
            None => op,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

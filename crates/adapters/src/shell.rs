// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell command jobs

use crate::job::Job;
use crate::task::TaskPipeline;
use async_trait::async_trait;
use fanout_core::Status;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Runs `sh -c <command>`; succeeds when the exit status is zero
#[derive(Clone, Debug)]
pub struct ShellJob {
    command: String,
    cwd: Option<PathBuf>,
    env: Vec<(String, String)>,
}

impl ShellJob {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            cwd: None,
            env: Vec::new(),
        }
    }

    pub fn current_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

#[async_trait]
impl Job for ShellJob {
    async fn execute(&self) -> Status {
        let mut cmd = Command::new("sh");
        cmd.arg("-c")
            .arg(&self.command)
            .envs(self.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            // A timed out job drops this future; take the child down with it
            .kill_on_drop(true);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        let output = match cmd.output().await {
            Ok(output) => output,
            Err(e) => return Status::failure(format!("failed to spawn `{}`: {}", self.command, e)),
        };

        if output.status.success() {
            return Status::success();
        }

        let code = output
            .status
            .code()
            .map_or_else(|| "signal".to_string(), |c| c.to_string());
        let stderr = String::from_utf8_lossy(&output.stderr);
        match stderr.lines().rev().find(|l| !l.trim().is_empty()) {
            Some(line) => Status::failure(format!(
                "`{}` exited with {}: {}",
                self.command,
                code,
                line.trim()
            )),
            None => Status::failure(format!("`{}` exited with {}", self.command, code)),
        }
    }

    fn describe(&self) -> String {
        self.command.clone()
    }
}

impl TaskPipeline<ShellJob> {
    /// Pipeline running a shell command
    pub fn shell(command: impl Into<String>) -> Self {
        TaskPipeline::new(ShellJob::new(command))
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fanout run [options] <command>...` - Run shell commands in parallel

use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use fanout_adapters::{TaskPipeline, TracedPipeline};
use fanout_core::{execute, parallel, ParallelConfig, Pipeline, PolicyKind};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Args)]
pub struct RunArgs {
    /// Shell commands to run, one pipeline each
    #[arg(required = true, trailing_var_arg = true)]
    pub commands: Vec<String>,

    /// Completion policy: all, any, some:K or at-least:K
    #[arg(short, long)]
    pub policy: Option<PolicyKind>,

    /// Upper bound for every command (e.g. 30s, 1m 30s)
    #[arg(short, long, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// TOML file with policy and timeout defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Print what would run without running it
    #[arg(long)]
    pub dry_run: bool,
}

/// What a run would do
#[derive(Serialize)]
struct Plan {
    pipeline: String,
    policy: String,
    timeout: Option<String>,
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [policy: {}", self.pipeline, self.policy)?;
        if let Some(timeout) = &self.timeout {
            write!(f, ", timeout: {}", timeout)?;
        }
        write!(f, "]")
    }
}

pub async fn run(args: RunArgs) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => ParallelConfig::load(path)?,
        None => ParallelConfig::default(),
    };

    let pipelines = args
        .commands
        .iter()
        .map(|command| TracedPipeline::new(TaskPipeline::shell(command.as_str())));
    let mut op = config.apply(parallel(pipelines));
    if let Some(policy) = args.policy {
        op = op.policy(policy);
    }
    if let Some(timeout) = args.timeout {
        op = op.with_timeout(timeout);
    }

    if args.dry_run {
        let plan = Plan {
            pipeline: op.describe(),
            policy: op.policy_kind().to_string(),
            timeout: op
                .timeout()
                .map(|t| humantime::format_duration(t).to_string()),
        };
        output::print(&plan, args.output);
        return Ok(ExitCode::SUCCESS);
    }

    tracing::info!(
        commands = args.commands.len(),
        policy = %op.policy_kind(),
        timeout = ?op.timeout(),
        "running"
    );
    let status = execute(op, None).await.context("failed to launch")?;
    output::print(&status, args.output);

    Ok(if status.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

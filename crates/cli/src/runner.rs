// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential plan runner.
//!
//! Steps run one at a time, each to completion, and the first non-zero exit
//! status stops the plan. Tool output is inherited, never captured.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::alias::Plan;
use crate::command::CommandLine;
use crate::error::{Error, Result};

/// Exit status of one external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    code: i32,
}

impl Status {
    pub fn from_code(code: i32) -> Self {
        Self { code }
    }

    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Shell-style exit code. Signal deaths are reported as `128 + signal`.
    pub fn code(&self) -> i32 {
        self.code
    }
}

impl From<std::process::ExitStatus> for Status {
    fn from(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::from_code(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::from_code(128 + signal);
            }
        }
        Self::from_code(1)
    }
}

/// Runs one command line and reports its exit status.
pub trait Executor {
    fn execute(&self, cmd: &CommandLine, root: &Path) -> Result<Status>;
}

/// Executes commands as child processes with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&self, cmd: &CommandLine, root: &Path) -> Result<Status> {
        tracing::debug!(alias = %cmd.alias, command = %cmd, root = %root.display(), "spawning");
        let status = cmd
            .to_process(root)
            .status()
            .map_err(|source| Error::Spawn {
                program: cmd.program.clone(),
                source,
            })?;
        Ok(Status::from(status))
    }
}

/// Observes plan progress. Used for status lines; never sees tool output.
pub trait Reporter {
    fn step_started(&mut self, _step: &CommandLine, _index: usize, _total: usize) {}

    fn step_finished(&mut self, _result: &StepResult) {}
}

/// Reporter that ignores every event.
pub struct SilentReporter;

impl Reporter for SilentReporter {}

/// Result of one executed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub alias: String,
    pub status: Status,
    pub duration: Duration,
}

/// Result of running a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub alias: String,
    /// Steps that actually ran, in order. Stops at the first failure.
    pub ran: Vec<StepResult>,
    /// Steps in the plan, including those never reached.
    pub planned: usize,
    pub elapsed: Duration,
}

impl Outcome {
    pub fn success(&self) -> bool {
        self.failed().is_none()
    }

    /// The step that stopped the plan, if any.
    pub fn failed(&self) -> Option<&StepResult> {
        self.ran.iter().find(|r| !r.status.success())
    }

    /// Exit code of the run: the failing step's code, or 0.
    pub fn exit_code(&self) -> i32 {
        self.failed().map_or(0, |r| r.status.code())
    }

    /// Number of planned steps that never ran.
    pub fn skipped(&self) -> usize {
        self.planned - self.ran.len()
    }
}

/// Run every step of `plan` in order from `root`, stopping at the first
/// non-zero status.
///
/// A step that cannot be spawned ends the run with an error; no later step
/// runs.
pub fn run_plan<E, R>(plan: &Plan, root: &Path, executor: &E, reporter: &mut R) -> Result<Outcome>
where
    E: Executor + ?Sized,
    R: Reporter + ?Sized,
{
    let started = Instant::now();
    let total = plan.steps.len();
    let mut ran = Vec::with_capacity(total);

    for (index, step) in plan.steps.iter().enumerate() {
        reporter.step_started(step, index, total);

        let step_started = Instant::now();
        let status = executor.execute(step, root)?;
        let result = StepResult {
            alias: step.alias.clone(),
            status,
            duration: step_started.elapsed(),
        };
        reporter.step_finished(&result);

        let failed = !status.success();
        ran.push(result);
        if failed {
            tracing::info!(
                alias = %step.alias,
                code = status.code(),
                skipped = total - index - 1,
                "step failed, stopping"
            );
            break;
        }
    }

    Ok(Outcome {
        alias: plan.alias.clone(),
        ran,
        planned: total,
        elapsed: started.elapsed(),
    })
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

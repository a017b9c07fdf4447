// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Alias execution command.
//!
//! Runs every step of an alias in order and exits with the first failing
//! tool's exit code. crdtask's own status lines go to stderr; tool output is
//! inherited untouched.

use std::io::Write;
use std::process::ExitCode;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crdtask::color::scheme;
use crdtask::command::CommandLine;
use crdtask::runner::{Outcome, ProcessExecutor, Reporter, StepResult, run_plan};
use crdtask::Project;

/// Run `alias` for `project`.
pub fn run(project: &Project, alias: &str, color: ColorChoice) -> anyhow::Result<ExitCode> {
    let plan = project.plan(alias)?;
    let mut reporter = StatusReporter::new(color);
    let outcome = run_plan(&plan, &project.root, &ProcessExecutor, &mut reporter)?;
    reporter.summary(&outcome)?;

    let code = outcome.exit_code();
    // Codes outside 0..=255 (Windows) collapse to a generic failure.
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}

/// Prints one line per step and a final line for failures or multi-step runs.
struct StatusReporter {
    stderr: StandardStream,
}

impl StatusReporter {
    fn new(color: ColorChoice) -> Self {
        Self {
            stderr: StandardStream::stderr(color),
        }
    }

    fn step_line(&mut self, step: &CommandLine) -> std::io::Result<()> {
        self.stderr.set_color(&scheme::alias_name())?;
        write!(self.stderr, "==> {}", step.alias)?;
        self.stderr.reset()?;
        write!(self.stderr, ": ")?;
        self.stderr.set_color(&scheme::command())?;
        write!(self.stderr, "{step}")?;
        self.stderr.reset()?;
        writeln!(self.stderr)?;
        self.stderr.flush()
    }

    fn summary(&mut self, outcome: &Outcome) -> std::io::Result<()> {
        if let Some(failed) = outcome.failed() {
            self.stderr.set_color(&scheme::fail())?;
            write!(self.stderr, "FAIL")?;
            self.stderr.reset()?;
            write!(
                self.stderr,
                ": {} (exit {})",
                failed.alias,
                failed.status.code()
            )?;
            let skipped = outcome.skipped();
            if skipped > 0 {
                write!(self.stderr, ", {skipped} step(s) not run")?;
            }
            writeln!(self.stderr)?;
        } else if outcome.planned > 1 {
            self.stderr.set_color(&scheme::pass())?;
            write!(self.stderr, "PASS")?;
            self.stderr.reset()?;
            writeln!(
                self.stderr,
                ": {} ({} steps, {:.2}s)",
                outcome.alias,
                outcome.planned,
                outcome.elapsed.as_secs_f64()
            )?;
        }
        self.stderr.flush()
    }
}

impl Reporter for StatusReporter {
    fn step_started(&mut self, step: &CommandLine, _index: usize, _total: usize) {
        if let Err(e) = self.step_line(step) {
            tracing::warn!("failed to write status line: {e}");
        }
    }

    fn step_finished(&mut self, result: &StepResult) {
        tracing::debug!(
            alias = %result.alias,
            code = result.status.code(),
            elapsed_ms = result.duration.as_millis() as u64,
            "step finished"
        );
    }
}

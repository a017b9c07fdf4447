// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `crdtask show` command implementation.

use std::io::Write;
use std::process::ExitCode;

use crdtask::Project;

/// Print the command lines `alias` would run, one per line, without running
/// anything.
pub fn run(project: &Project, alias: &str) -> anyhow::Result<ExitCode> {
    let plan = project.plan(alias)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for step in &plan.steps {
        writeln!(handle, "{step}")?;
    }
    Ok(ExitCode::SUCCESS)
}

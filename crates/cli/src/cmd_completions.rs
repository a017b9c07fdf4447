// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `crdtask completions` command implementation.

use std::io::Write;

use clap::CommandFactory;

use crdtask::cli::{Cli, CompletionsArgs};

/// Write a completion script for the requested shell to stdout.
pub fn run(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    clap_complete::generate(args.shell, &mut cmd, "crdtask", &mut handle);
    handle.flush()?;
    Ok(())
}

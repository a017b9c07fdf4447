// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `crdtask list` command implementation.

use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use serde::Serialize;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crdtask::Project;
use crdtask::alias::Origin;
use crdtask::cli::{ListArgs, OutputFormat};
use crdtask::color::scheme;

/// One alias in JSON output.
#[derive(Serialize)]
struct AliasEntry<'a> {
    name: &'a str,
    origin: Origin,
    description: &'a str,
    /// Expanded command lines, or an error if the alias cannot be resolved.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    commands: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn run(project: &Project, args: &ListArgs, color: ColorChoice) -> anyhow::Result<ExitCode> {
    match args.output {
        OutputFormat::Text => list_text(project, color)?,
        OutputFormat::Json => list_json(project)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn list_text(project: &Project, color: ColorChoice) -> anyhow::Result<()> {
    let color = if color == ColorChoice::Auto && !std::io::stdout().is_terminal() {
        ColorChoice::Never
    } else {
        color
    };
    let mut out = StandardStream::stdout(color);
    let width = project
        .aliases
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(0);

    for alias in project.aliases.iter() {
        out.set_color(&scheme::alias_name())?;
        write!(out, "{:<width$}", alias.name)?;
        out.reset()?;
        out.set_color(&scheme::description())?;
        writeln!(out, "  {}", alias.description)?;
        out.reset()?;
    }
    out.flush()?;
    Ok(())
}

fn list_json(project: &Project) -> anyhow::Result<()> {
    let entries: Vec<AliasEntry<'_>> = project
        .aliases
        .iter()
        .map(|alias| {
            let (commands, error) = match project.plan(&alias.name) {
                Ok(plan) => (plan.steps.iter().map(ToString::to_string).collect(), None),
                Err(e) => (Vec::new(), Some(e.to_string())),
            };
            AliasEntry {
                name: &alias.name,
                origin: alias.origin,
                description: &alias.description,
                commands,
                error,
            }
        })
        .collect();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, &entries)?;
    writeln!(handle)?;
    Ok(())
}

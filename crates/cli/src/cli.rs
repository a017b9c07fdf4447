// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::builder::Styles;
use clap::{Parser, Subcommand, ValueEnum};

use crate::color::ColorMode;

/// Help output styling.
fn styles() -> Styles {
    use anstyle::{AnsiColor, Effects};

    Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Cyan.on_default())
}

/// Run tests, formatting and type checks for the crdlib project
#[derive(Parser)]
#[command(name = "crdtask")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
#[command(styles = styles())]
pub struct Cli {
    /// Use specific task file instead of searching for crdtask.toml
    #[arg(short = 'C', long = "tasks", global = true, env = "CRDTASK_TASKS")]
    pub tasks: Option<PathBuf>,

    /// Configuration file passed to the formatter and type checker
    #[arg(
        long = "config-path",
        global = true,
        env = "CONFIG_PATH",
        value_name = "PATH"
    )]
    pub config_path: Option<String>,

    /// Color output mode
    #[arg(long, global = true, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run all test suites in order, stopping at the first failure
    Test,
    /// Run the unit test suite (tests.unit)
    UnitTest,
    /// Run the integration test suite (tests.integration)
    IntegrationTest,
    /// Format sources in place
    Format,
    /// Run the static type checker
    StaticAnalysis,
    /// Run any alias by name, including suite and task file aliases
    Run(RunArgs),
    /// List available aliases
    List(ListArgs),
    /// Print the command lines an alias would run, without running them
    Show(RunArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Alias name (see `crdtask list`)
    #[arg(value_name = "ALIAS")]
    pub alias: String,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

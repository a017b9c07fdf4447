// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_completions;
mod cmd_list;
mod cmd_run;
mod cmd_show;

use std::process::ExitCode;

use clap::Parser;
use termcolor::ColorChoice;

use crdtask::cli::{Cli, Command};
use crdtask::color::resolve_color;
use crdtask::{Project, alias, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let color = resolve_color(cli.color, cli.no_color);
    logging::init(cli.verbose, color != ColorChoice::Never);

    match run(&cli, color) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<crdtask::Error>()
                .map_or(crdtask::ExitCode::ConfigError, crdtask::Error::exit_code);
            code.into()
        }
    }
}

fn run(cli: &Cli, color: ColorChoice) -> anyhow::Result<ExitCode> {
    let Some(command) = &cli.command else {
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Command::Test => cmd_run::run(&load(cli)?, alias::TEST, color),
        Command::UnitTest => cmd_run::run(&load(cli)?, "unit-test", color),
        Command::IntegrationTest => cmd_run::run(&load(cli)?, "integration-test", color),
        Command::Format => cmd_run::run(&load(cli)?, alias::FORMAT, color),
        Command::StaticAnalysis => cmd_run::run(&load(cli)?, alias::STATIC_ANALYSIS, color),
        Command::Run(args) => cmd_run::run(&load(cli)?, &args.alias, color),
        Command::List(args) => cmd_list::run(&load(cli)?, args, color),
        Command::Show(args) => cmd_show::run(&load(cli)?, &args.alias),
        Command::Completions(args) => {
            cmd_completions::run(args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load the project seen from the working directory.
fn load(cli: &Cli) -> anyhow::Result<Project> {
    let cwd = std::env::current_dir()?;
    Ok(Project::load(
        cli.tasks.as_deref(),
        &cwd,
        cli.config_path.as_deref(),
    )?)
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Developer task runner for the crdlib project.
//!
//! Named aliases map to single external command lines (test runner,
//! formatter, type checker) or to ordered sequences of other aliases.

pub mod alias;
pub mod cli;
pub mod color;
pub mod command;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod project;
pub mod runner;


pub use alias::{Alias, AliasTable, Plan};
pub use command::{CommandLine, Vars};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use project::Project;
pub use runner::{Executor, Outcome, ProcessExecutor, run_plan};

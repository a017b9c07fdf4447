// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation project context.
//!
//! Locates the task file, loads it, builds the alias table and resolves the
//! shared configuration path once, so every alias reads the same value.

use std::path::{Path, PathBuf};

use crate::alias::{AliasTable, Plan};
use crate::command::Vars;
use crate::config::{self, Config};
use crate::discovery::{self, Discovery};
use crate::error::Result;

/// Everything needed to resolve and run aliases.
#[derive(Debug, Clone)]
pub struct Project {
    /// Working directory for every tool.
    pub root: PathBuf,
    /// Task file in use, if any.
    pub task_file: Option<PathBuf>,
    pub config: Config,
    pub aliases: AliasTable,
    /// Resolved shared configuration path.
    pub config_path: String,
}

impl Project {
    /// Load the project seen from `cwd`.
    ///
    /// `tasks` is an explicit task file (`--tasks`), relative to `cwd`.
    /// Without one, crdtask.toml is discovered upward from `cwd`, and the
    /// git root becomes the project root when none is found.
    /// `config_path` is the `--config-path`/`CONFIG_PATH` override.
    pub fn load(tasks: Option<&Path>, cwd: &Path, config_path: Option<&str>) -> Result<Self> {
        let found = match tasks {
            Some(path) => Discovery::explicit(cwd.join(path)),
            None => discovery::discover(cwd),
        };
        let root = found.root(cwd);
        let task_file = found.task_file;

        let config = match &task_file {
            Some(path) => config::load(path)?,
            None => {
                tracing::debug!(cwd = %cwd.display(), "no task file found, using defaults");
                Config::default()
            }
        };

        let aliases = AliasTable::from_config(&config)?;
        let config_path = config.config_path(config_path).to_string();
        tracing::debug!(root = %root.display(), config_path = %config_path, "project loaded");

        Ok(Self {
            root,
            task_file,
            config,
            aliases,
            config_path,
        })
    }

    /// Template variables shared by every alias.
    pub fn vars(&self) -> Vars<'_> {
        Vars::new(&self.config_path)
    }

    /// Resolve an alias into its plan.
    pub fn plan(&self, alias: &str) -> Result<Plan> {
        self.aliases.resolve(alias, &self.vars())
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;

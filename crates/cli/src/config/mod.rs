// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Task file configuration.
//!
//! `crdtask.toml` is optional. Every key has a default matching the
//! project's standard toolchain, so a missing file runs the stock aliases.

pub mod defaults;
pub mod tools;

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

pub use tools::{FormatterConfig, TestRunnerConfig, ToolsConfig, TypeCheckerConfig};

/// Parsed task file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version (must be 1).
    pub version: i64,

    /// Shared configuration path for the formatter and the type checker.
    #[serde(default)]
    pub config_path: Option<String>,

    /// External tool invocations.
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Test suites, in execution order. An explicit empty list makes
    /// `test` run the test runner unscoped.
    #[serde(default = "Config::default_suites")]
    pub suite: Vec<SuiteConfig>,

    /// User-defined aliases.
    #[serde(default)]
    pub alias: Vec<AliasConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::VERSION,
            config_path: None,
            tools: ToolsConfig::default(),
            suite: Self::default_suites(),
            alias: Vec::new(),
        }
    }
}

impl Config {
    pub(crate) fn default_suites() -> Vec<SuiteConfig> {
        defaults::SUITES
            .iter()
            .map(|(name, package)| SuiteConfig {
                name: name.to_string(),
                package: package.to_string(),
            })
            .collect()
    }

    /// Resolve the shared configuration path.
    ///
    /// `cli` carries the `--config-path` flag or `CONFIG_PATH` environment
    /// variable and wins over the task file, which wins over the default.
    pub fn config_path<'a>(&'a self, cli: Option<&'a str>) -> &'a str {
        cli.or(self.config_path.as_deref())
            .unwrap_or(defaults::CONFIG_PATH)
    }
}

/// A named test suite scoped to one package.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Suite name; the alias is `<name>-test`.
    pub name: String,

    /// Dotted package passed to the test runner (e.g. `tests.unit`).
    pub package: String,
}

/// A user-defined alias: either an ordered list of other aliases or a
/// single command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasConfig {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Aliases to run in order.
    #[serde(default)]
    pub steps: Option<Vec<String>>,

    /// Program followed by argument templates.
    #[serde(default)]
    pub command: Option<Vec<String>>,
}

/// Parse task file content. `path` is used for error messages only.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string().trim_end().to_string(),
    })?;

    if config.version != defaults::VERSION {
        return Err(Error::Config {
            path: path.to_path_buf(),
            message: format!(
                "unsupported version {} (expected {})",
                config.version,
                defaults::VERSION
            ),
        });
    }

    Ok(config)
}

/// Load and parse a task file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        suites = config.suite.len(),
        aliases = config.alias.len(),
        "loaded task file"
    );
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

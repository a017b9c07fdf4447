// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External tool configuration.
//!
//! Each table falls back field-by-field to its defaults, so overriding only
//! `program` keeps the default arguments.

use serde::Deserialize;

use super::defaults::{self, strings};

/// Test runner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestRunnerConfig {
    /// Program to execute (looked up on `PATH`).
    pub program: String,

    /// Arguments for every invocation.
    pub args: Vec<String>,

    /// Arguments appended when scoped to a suite package (`{package}`).
    pub scope_args: Vec<String>,
}

impl TestRunnerConfig {
    fn default_program() -> String {
        defaults::test_runner::PROGRAM.to_string()
    }

    fn default_args() -> Vec<String> {
        strings(defaults::test_runner::ARGS)
    }

    fn default_scope_args() -> Vec<String> {
        strings(defaults::test_runner::SCOPE_ARGS)
    }
}

impl Default for TestRunnerConfig {
    fn default() -> Self {
        Self {
            program: Self::default_program(),
            args: Self::default_args(),
            scope_args: Self::default_scope_args(),
        }
    }
}

/// Source formatter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    pub program: String,

    /// Argument templates (`{config}` is the shared configuration path).
    pub args: Vec<String>,
}

impl FormatterConfig {
    fn default_program() -> String {
        defaults::formatter::PROGRAM.to_string()
    }

    fn default_args() -> Vec<String> {
        strings(defaults::formatter::ARGS)
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            program: Self::default_program(),
            args: Self::default_args(),
        }
    }
}

/// Static type checker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeCheckerConfig {
    pub program: String,

    /// Argument templates (`{config}` is the shared configuration path).
    pub args: Vec<String>,
}

impl TypeCheckerConfig {
    fn default_program() -> String {
        defaults::type_checker::PROGRAM.to_string()
    }

    fn default_args() -> Vec<String> {
        strings(defaults::type_checker::ARGS)
    }
}

impl Default for TypeCheckerConfig {
    fn default() -> Self {
        Self {
            program: Self::default_program(),
            args: Self::default_args(),
        }
    }
}

/// All external tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub test: TestRunnerConfig,

    pub format: FormatterConfig,

    #[serde(rename = "static-analysis", alias = "static_analysis")]
    pub static_analysis: TypeCheckerConfig,
}

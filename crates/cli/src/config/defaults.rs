// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Individual config structs delegate to these constants via their `default_*` methods.

/// Task file name searched for during discovery.
pub const TASK_FILE: &str = "crdtask.toml";

/// Only supported task file schema version.
pub const VERSION: i64 = 1;

/// Shared configuration path consumed by the formatter and the type checker.
pub const CONFIG_PATH: &str = "./pyproject.toml";

/// Default test runner invocation (`python -m unittest discover`).
pub mod test_runner {
    pub const PROGRAM: &str = "python";

    pub const ARGS: &[&str] = &["-m", "unittest", "discover"];

    /// Appended when a run is scoped to a single suite package.
    pub const SCOPE_ARGS: &[&str] = &[
        "--start-directory",
        "{package}",
        "--top-level-directory",
        ".",
    ];
}

/// Default source formatter invocation (apply mode, whole tree).
pub mod formatter {
    pub const PROGRAM: &str = "black";

    pub const ARGS: &[&str] = &["--config", "{config}", "./"];
}

/// Default static type checker invocation (whole tree).
pub mod type_checker {
    pub const PROGRAM: &str = "mypy";

    pub const ARGS: &[&str] = &["--config-file", "{config}", "./"];
}

/// Default test suites, in execution order for the aggregate `test` alias.
pub const SUITES: &[(&str, &str)] = &[("unit", "tests.unit"), ("integration", "tests.integration")];

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

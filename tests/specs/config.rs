//! Behavioral specs for task file loading and the shared configuration path.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// CONFIGURATION PATH PRECEDENCE
// =============================================================================

/// > Without overrides the configuration path is ./pyproject.toml
#[test]
fn default_config_path() {
    let temp = Project::empty();

    temp.cmd()
        .args(["show", "format"])
        .assert()
        .success()
        .stdout("black --config ./pyproject.toml ./\n");
}

/// > The task file's config_path replaces the default
#[test]
fn task_file_config_path() {
    let temp = Project::empty();
    temp.config("version = 1\nconfig_path = \"setup.cfg\"\n");

    temp.cmd()
        .args(["show", "static-analysis"])
        .assert()
        .success()
        .stdout("mypy --config-file setup.cfg ./\n");
}

/// > CONFIG_PATH overrides the task file
#[test]
fn env_config_path_beats_task_file() {
    let temp = Project::empty();
    temp.config("version = 1\nconfig_path = \"setup.cfg\"\n");

    temp.cmd()
        .args(["show", "format"])
        .env("CONFIG_PATH", "ci/pyproject.toml")
        .assert()
        .success()
        .stdout("black --config ci/pyproject.toml ./\n");
}

/// > --config-path overrides CONFIG_PATH
#[test]
fn flag_config_path_beats_env() {
    let temp = Project::empty();

    temp.cmd()
        .args(["show", "format", "--config-path", "flag.toml"])
        .env("CONFIG_PATH", "env.toml")
        .assert()
        .success()
        .stdout("black --config flag.toml ./\n");
}

// =============================================================================
// TASK FILE
// =============================================================================

/// > --tasks selects an explicit task file
#[test]
fn explicit_task_file() {
    let temp = Project::empty();
    temp.file(
        "ci/tasks.toml",
        "version = 1\n[tools.format]\nprogram = \"ruff\"\nargs = [\"format\", \"--config\", \"{config}\", \".\"]\n",
    );

    temp.cmd()
        .args(["--tasks", "ci/tasks.toml", "show", "format"])
        .assert()
        .success()
        .stdout("ruff format --config ./pyproject.toml .\n");
}

/// > CRDTASK_TASKS selects an explicit task file
#[test]
fn task_file_from_env() {
    let temp = Project::empty();
    temp.file("alt.toml", "version = 1\nsuite = []\n");

    temp.cmd()
        .args(["show", "test"])
        .env("CRDTASK_TASKS", "alt.toml")
        .assert()
        .success()
        .stdout("python -m unittest discover\n");
}

/// > Unknown keys are errors
#[test]
fn unknown_config_key_fails() {
    let temp = Project::empty();
    temp.config("version = 1\nunknown_key = true\n");

    temp.cmd()
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

/// > Unsupported versions are errors
#[test]
fn unsupported_version_fails() {
    let temp = Project::empty();
    temp.config("version = 9\n");

    temp.cmd()
        .arg("test")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported version 9"));
}

/// > Alias cycles are reported before anything runs
#[test]
fn alias_cycle_fails() {
    let temp = Project::empty();
    temp.config(
        r#"version = 1

[[alias]]
name = "a"
steps = ["b"]

[[alias]]
name = "b"
steps = ["a"]
"#,
    );

    temp.cmd()
        .arg("format")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("alias cycle: a -> b -> a"));
}

//! Behavioral specs for `list` and `show`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > list prints the aliases in order with descriptions
#[test]
fn list_shows_default_aliases() {
    let temp = Project::empty();

    let output = temp.cmd().arg("list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<_> = stdout
        .lines()
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(
        names,
        vec![
            "test",
            "unit-test",
            "integration-test",
            "format",
            "static-analysis"
        ]
    );
    assert!(stdout.contains("Run all test suites (unit-test, integration-test)"));
}

/// > list --output json includes expanded commands
#[test]
fn list_json_includes_commands() {
    let temp = Project::empty();
    temp.config(
        r#"version = 1

[[alias]]
name = "lint"
description = "Format then type-check"
steps = ["format", "static-analysis"]
"#,
    );

    let output = temp
        .cmd()
        .args(["list", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 6);

    let lint = &entries[5];
    assert_eq!(lint["name"], "lint");
    assert_eq!(lint["origin"], "user");
    assert_eq!(lint["description"], "Format then type-check");
    assert_eq!(
        lint["commands"],
        serde_json::json!([
            "black --config ./pyproject.toml ./",
            "mypy --config-file ./pyproject.toml ./"
        ])
    );
    assert_eq!(entries[1]["origin"], "suite");
    assert_eq!(entries[0]["origin"], "builtin");
}

/// > show prints one command line per step and runs nothing
#[test]
fn show_test_prints_both_suites() {
    let temp = Project::empty();

    temp.cmd()
        .args(["show", "test"])
        .assert()
        .success()
        .stdout(
            "python -m unittest discover --start-directory tests.unit --top-level-directory .\n\
             python -m unittest discover --start-directory tests.integration --top-level-directory .\n",
        );
}

/// > show quotes arguments that need it
#[test]
fn show_quotes_arguments() {
    let temp = Project::empty();

    temp.cmd()
        .args(["show", "format", "--config-path", "my config.toml"])
        .assert()
        .success()
        .stdout("black --config 'my config.toml' ./\n");
}

//! Behavioral specs for alias execution.
//!
//! Tools are replaced by shell scripts that log their arguments, so these
//! specs check exactly what each alias invokes and in which order.

#![cfg(unix)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// TEST SUITES
// =============================================================================

/// > test runs unit-test then integration-test
#[test]
fn test_runs_unit_then_integration() {
    let temp = Project::with_stub_tools();

    temp.cmd()
        .arg("test")
        .assert()
        .success()
        .stderr(predicates::str::contains("==> unit-test"))
        .stderr(predicates::str::contains("PASS: test (2 steps"));

    assert_eq!(
        temp.calls(),
        vec!["runner tests.unit", "runner tests.integration"]
    );
}

/// > If the unit suite fails, the integration suite must not run
#[test]
fn unit_failure_stops_aggregate() {
    let temp = Project::with_stub_tools();

    temp.cmd()
        .arg("test")
        .env("UNIT_EXIT", "1")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("FAIL: unit-test (exit 1), 1 step(s) not run"));

    assert_eq!(temp.calls(), vec!["runner tests.unit"]);
}

/// > unit-test alone fails with the runner's status
#[test]
fn unit_test_reports_runner_failure() {
    let temp = Project::with_stub_tools();

    temp.cmd().arg("unit-test").env("UNIT_EXIT", "1").assert().code(1);
    assert_eq!(temp.calls(), vec!["runner tests.unit"]);
}

/// > integration-test is scoped to tests.integration only
#[test]
fn integration_test_runs_one_suite() {
    let temp = Project::with_stub_tools();

    temp.cmd().arg("integration-test").assert().success();
    assert_eq!(temp.calls(), vec!["runner tests.integration"]);
}

/// > The failing suite's exit code propagates unchanged
#[test]
fn integration_exit_code_propagates() {
    let temp = Project::with_stub_tools();

    temp.cmd()
        .arg("test")
        .env("INTEGRATION_EXIT", "4")
        .assert()
        .code(4);
    assert_eq!(
        temp.calls(),
        vec!["runner tests.unit", "runner tests.integration"]
    );
}

/// > With no suites configured, test runs the runner unscoped
#[test]
fn test_without_suites_is_unscoped() {
    let temp = Project::with_stub_tools();
    temp.config(&STUB_TOOLS.replacen("version = 1\n", "version = 1\nsuite = []\n", 1));

    temp.cmd().arg("test").assert().success();
    assert_eq!(temp.calls(), vec!["runner "]);
}

// =============================================================================
// FORMAT AND STATIC ANALYSIS
// =============================================================================

/// > format on a clean tree exits zero and modifies nothing
#[test]
fn format_clean_tree_exits_zero() {
    let temp = Project::with_stub_tools();
    let before = temp.read("crdlib/streams/stream.py");

    temp.cmd().arg("format").assert().success();

    assert_eq!(temp.read("crdlib/streams/stream.py"), before);
    assert_eq!(temp.calls(), vec!["formatter --config ./pyproject.toml ./"]);
}

/// > static-analysis with a type error exits non-zero and is read-only
#[test]
fn static_analysis_type_error_fails_read_only() {
    let temp = Project::with_stub_tools();
    let before = temp.read("crdlib/streams/stream.py");

    temp.cmd()
        .arg("static-analysis")
        .env("TYPE_ERROR", "1")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("Incompatible return value type"));

    assert_eq!(temp.read("crdlib/streams/stream.py"), before);
    assert_eq!(temp.calls(), vec!["checker --config-file ./pyproject.toml ./"]);
}

/// > format and static-analysis read the same configuration path
#[test]
fn config_path_is_shared() {
    let temp = Project::with_stub_tools();

    temp.cmd()
        .arg("format")
        .env("CONFIG_PATH", "setup.cfg")
        .assert()
        .success();
    temp.cmd()
        .arg("static-analysis")
        .env("CONFIG_PATH", "setup.cfg")
        .assert()
        .success();

    assert_eq!(
        temp.calls(),
        vec![
            "formatter --config setup.cfg ./",
            "checker --config-file setup.cfg ./"
        ]
    );
}

/// > Tool output is passed through untouched
#[test]
fn tool_output_is_not_captured() {
    let temp = Project::with_stub_tools();
    temp.file(
        "formatter.sh",
        "echo 'All done! 3 files left unchanged.'\nexit 0\n",
    );

    temp.cmd()
        .arg("format")
        .assert()
        .success()
        .stdout(predicates::str::contains("All done! 3 files left unchanged."));
}

// =============================================================================
// USER ALIASES
// =============================================================================

/// > Task file aliases run their steps in order through `run`
#[test]
fn user_alias_runs_steps() {
    let temp = Project::with_stub_tools();
    temp.append_config(
        r#"
[[alias]]
name = "lint"
steps = ["format", "static-analysis"]
"#,
    );

    temp.cmd().args(["run", "lint"]).assert().success();
    assert_eq!(
        temp.calls(),
        vec![
            "formatter --config ./pyproject.toml ./",
            "checker --config-file ./pyproject.toml ./"
        ]
    );
}

/// > A failing step stops a user aggregate too
#[test]
fn user_alias_stops_on_failure() {
    let temp = Project::with_stub_tools();
    temp.append_config(
        r#"
[[alias]]
name = "ci"
steps = ["static-analysis", "test"]
"#,
    );

    temp.cmd()
        .args(["run", "ci"])
        .env("TYPE_ERROR", "1")
        .assert()
        .code(1);
    assert_eq!(temp.calls(), vec!["checker --config-file ./pyproject.toml ./"]);
}

/// > Tools run from the project root even when invoked from a subdirectory
#[test]
fn tools_run_from_project_root() {
    let temp = Project::with_stub_tools();

    crdtask_cmd()
        .arg("unit-test")
        .current_dir(temp.path().join("crdlib/streams"))
        .assert()
        .success();
    assert_eq!(temp.calls(), vec!["runner tests.unit"]);
}

/// > Without a task file, format and static-analysis still run against the
/// > repository root
#[test]
fn tools_run_from_git_root_without_task_file() {
    let temp = Project::empty();
    temp.file("pyproject.toml", "[tool.black]\nline-length = 88\n");
    temp.file("crdlib/streams/stream.py", "class Stream:\n    pass\n");
    temp.bin("black", PATH_TOOL_SCRIPT);
    temp.bin("mypy", PATH_TOOL_SCRIPT);

    temp.cmd_with_bin("crdlib/streams")
        .arg("format")
        .assert()
        .success();
    temp.cmd_with_bin("crdlib/streams")
        .arg("static-analysis")
        .assert()
        .success();

    assert_eq!(
        temp.calls(),
        vec![
            "black --config ./pyproject.toml ./",
            "mypy --config-file ./pyproject.toml ./",
        ]
    );
    assert!(!temp.path().join("crdlib/streams/calls.log").exists());
}

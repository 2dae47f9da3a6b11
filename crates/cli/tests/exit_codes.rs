// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit code specs
//!
//! Run the real binary and verify the process status and stderr of every
//! fatal path.

#![allow(clippy::unwrap_used)]

use assert_cmd::assert::Assert;
use assert_cmd::Command;

fn errcheck() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_errcheck"));
    cmd.env("NO_COLOR", "1").env_remove("COLOR").env_remove("ERRCHECK_BACKTRACE").env_remove("ERRCHECK_LOG");
    cmd
}

fn stdout(assert: &Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

fn stderr(assert: &Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn check_without_error_continues_silently() {
    let assert = errcheck().args(["check"]).assert().success();
    assert!(stderr(&assert).is_empty());
}

#[test]
fn check_with_error_exits_20_with_stack_trace() {
    let assert = errcheck().args(["check", "--error", "disk full"]).assert().code(20);
    let err = stderr(&assert);
    assert!(err.contains("stack backtrace:"), "stderr: {err}");
    assert!(err.contains("disk full"), "stderr: {err}");
    assert!(err.contains("exit_code=20"), "stderr: {err}");
}

#[test]
fn backtrace_can_be_disabled() {
    let assert = errcheck()
        .env("ERRCHECK_BACKTRACE", "0")
        .args(["check", "--error", "disk full"])
        .assert()
        .code(20);
    let err = stderr(&assert);
    assert!(!err.contains("stack backtrace:"), "stderr: {err}");
    assert!(err.contains("disk full"), "stderr: {err}");
}

#[test]
fn check_code_exits_with_supplied_code() {
    let assert =
        errcheck().args(["check-code", "--code", "11", "--error", "no conn"]).assert().code(11);
    let err = stderr(&assert);
    assert!(err.contains("no conn"), "stderr: {err}");
    assert!(!err.contains("stack backtrace:"), "stderr: {err}");
}

#[test]
fn check_code_without_error_succeeds() {
    errcheck().args(["check-code", "--code", "11"]).assert().success();
}

#[test]
fn fail_on_err_prints_value() {
    let assert = errcheck().args(["fail-on-err", "42"]).assert().success();
    assert_eq!(stdout(&assert), "42\n");
}

#[test]
fn fail_on_err_with_error_exits_20() {
    let assert = errcheck().args(["fail-on-err", "42", "--error", "bad"]).assert().code(20);
    assert!(stdout(&assert).is_empty());
}

#[test]
fn fatal_concatenates_arguments() {
    let assert = errcheck().args(["fatal", "--code", "12", "auth ", "failed"]).assert().code(12);
    let err = stderr(&assert);
    assert!(err.contains("auth failed"), "stderr: {err}");
}

#[test]
fn fatalf_interpolates_arguments() {
    let assert = errcheck().args(["fatalf", "--code", "13", "val=%d", "5"]).assert().code(13);
    let err = stderr(&assert);
    assert!(err.contains("val=5"), "stderr: {err}");
}

#[test]
fn returned_errors_are_reported_by_main() {
    let assert =
        errcheck().args(["run", "--code", "13", "--error", "no app"]).assert().code(13);
    let err = stderr(&assert);
    assert!(err.contains("run: no app"), "stderr: {err}");
}

#[test]
fn run_defaults_to_generic_code() {
    errcheck().args(["run", "--error", "oops"]).assert().code(20);
}

#[test]
fn run_without_error_succeeds() {
    errcheck().args(["run"]).assert().success();
}

#[test]
fn log_filter_can_silence_the_fatal_record() {
    let assert = errcheck()
        .env("ERRCHECK_LOG", "off")
        .args(["check-code", "--code", "11", "--error", "no conn"])
        .assert()
        .code(11);
    assert!(!stderr(&assert).contains("no conn"));
}

#[test]
fn codes_lists_table_as_json() {
    let assert = errcheck().args(["codes", "--output", "json"]).assert().success();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&stdout(&assert)).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[4]["name"], "Generic");
    assert_eq!(rows[4]["code"], 20);
}

#[test]
fn codes_lists_table_as_text() {
    let assert = errcheck().args(["codes"]).assert().success();
    let out = stdout(&assert);
    assert!(out.contains("ResourceDoesNotExist"));
    assert!(out.contains("APIResponse"));
}

#[test]
fn non_numeric_code_is_a_usage_error() {
    errcheck().args(["check-code", "--code", "eleven"]).assert().code(2);
}

#[test]
fn help_shows_usage() {
    let assert = errcheck().args(["--help"]).assert().success();
    assert!(stdout(&assert).contains("Usage:"));
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide shortcuts over a single shared [`Reporter`].
//!
//! Prefer returning [`ExitError`](crate::ExitError) from commands and calling
//! [`Reporter::exit_with`] once in `main()`; these exist for call sites that
//! cannot propagate.

use std::fmt;
use std::sync::OnceLock;

use crate::reporter::Reporter;

static PROCESS_REPORTER: OnceLock<Reporter> = OnceLock::new();

/// The shared reporter, configured from the environment on first use.
pub fn process_reporter() -> &'static Reporter {
    PROCESS_REPORTER.get_or_init(Reporter::process)
}

/// See [`Reporter::check_error`].
pub fn check_error<E: fmt::Display>(err: Option<E>) {
    process_reporter().check_error(err)
}

/// See [`Reporter::check_error_with_code`].
pub fn check_error_with_code<E: fmt::Display>(err: Option<E>, code: impl Into<i32>) {
    process_reporter().check_error_with_code(err, code)
}

/// See [`Reporter::fail_on_err`].
pub fn fail_on_err<V, E: fmt::Display>(result: Result<V, E>) -> V {
    process_reporter().fail_on_err(result)
}

/// See [`Reporter::fatal`].
pub fn fatal(code: impl Into<i32>, message: impl fmt::Display) -> ! {
    process_reporter().fatal(code, message)
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;

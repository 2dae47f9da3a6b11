// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of terminating the process themselves,
//! leaving a single call site in `main()` to report it and exit.

use std::fmt;

use crate::exit_code::ExitCode;

pub type ExitResult<T> = Result<T, ExitError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: impl Into<i32>, message: impl Into<String>) -> Self {
        Self { code: code.into(), message: message.into() }
    }

    /// An unclassified failure (`ExitCode::Generic`).
    pub fn generic(message: impl Into<String>) -> Self {
        Self::new(ExitCode::Generic, message)
    }

    /// The named code, if `code` is one of them.
    pub fn exit_code(&self) -> Option<ExitCode> {
        ExitCode::try_from(self.code).ok()
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Tags a lower-layer error with the exit code the process should end with.
pub trait ExitContext<T> {
    fn exit_code(self, code: impl Into<i32>) -> ExitResult<T>;

    /// Like `exit_code`, prefixing the message with `context: `.
    fn with_exit_code(self, code: impl Into<i32>, context: impl fmt::Display) -> ExitResult<T>;
}

impl<T, E: fmt::Display> ExitContext<T> for Result<T, E> {
    fn exit_code(self, code: impl Into<i32>) -> ExitResult<T> {
        self.map_err(|e| ExitError::new(code, e.to_string()))
    }

    fn with_exit_code(self, code: impl Into<i32>, context: impl fmt::Display) -> ExitResult<T> {
        self.map_err(|e| ExitError::new(code, format!("{}: {}", context, e)))
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;

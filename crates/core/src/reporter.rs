// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal reporting: log an unrecoverable error and end the process with a
//! chosen exit code.
//!
//! Every fatal path registers the exit code first, emits one fatal log record,
//! and then hands the registered code to the [`Terminator`]. Registration
//! overwrites: if several threads race through `fatal`, the process exits with
//! whichever code was registered last before the terminating emission.

use std::backtrace::Backtrace;
use std::fmt;
use std::io::Write;

use parking_lot::Mutex;

use crate::env;
use crate::exit_code::ExitCode;
use crate::exit_error::ExitResult;
use crate::terminator::{ProcessTerminator, Terminator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Print a stack trace before `check_error` reports
    pub backtrace: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self { backtrace: true }
    }
}

impl ReporterConfig {
    pub fn from_env() -> Self {
        Self { backtrace: env::backtrace_enabled() }
    }
}

pub struct Reporter<T: Terminator = ProcessTerminator> {
    terminator: T,
    config: ReporterConfig,
    registered: Mutex<Option<i32>>,
}

impl Reporter<ProcessTerminator> {
    /// Reporter that really exits, configured from the environment.
    pub fn process() -> Self {
        Self::new(ProcessTerminator, ReporterConfig::from_env())
    }
}

impl<T: Terminator> Reporter<T> {
    pub fn new(terminator: T, config: ReporterConfig) -> Self {
        Self { terminator, config, registered: Mutex::new(None) }
    }

    pub fn terminator(&self) -> &T {
        &self.terminator
    }

    pub fn config(&self) -> ReporterConfig {
        self.config
    }

    /// Exit code the next fatal emission will terminate with.
    pub fn registered_exit_code(&self) -> Option<i32> {
        *self.registered.lock()
    }

    /// Print a stack trace and exit with `ExitCode::Generic` if `err` is present.
    pub fn check_error<E: fmt::Display>(&self, err: Option<E>) {
        if let Some(err) = err {
            self.check_failed(err)
        }
    }

    /// Exit with `code` if `err` is present. No stack trace.
    pub fn check_error_with_code<E: fmt::Display>(&self, err: Option<E>, code: impl Into<i32>) {
        if let Some(err) = err {
            self.fatal(code, err)
        }
    }

    /// Unwrap `result`, treating an error exactly like [`Reporter::check_error`].
    pub fn fail_on_err<V, E: fmt::Display>(&self, result: Result<V, E>) -> V {
        match result {
            Ok(value) => value,
            Err(err) => self.check_failed(err),
        }
    }

    /// Log `message` at fatal severity and exit with `code`.
    pub fn fatal(&self, code: impl Into<i32>, message: impl fmt::Display) -> ! {
        self.register(code.into());
        self.emit(&message)
    }

    /// Like [`Reporter::fatal`], for `format_args!` payloads.
    pub fn fatalf(&self, code: impl Into<i32>, args: fmt::Arguments<'_>) -> ! {
        self.fatal(code, args)
    }

    /// Report a command's terminal error, if any, with the code it carries.
    pub fn exit_with(&self, result: ExitResult<()>) {
        if let Err(err) = result {
            self.fatal(err.code, err.message)
        }
    }

    fn check_failed<E: fmt::Display>(&self, err: E) -> ! {
        if self.config.backtrace {
            print_stack();
        }
        self.fatal(ExitCode::Generic, err)
    }

    fn register(&self, code: i32) {
        *self.registered.lock() = Some(code);
    }

    fn emit(&self, message: &dyn fmt::Display) -> ! {
        let code = self.registered_exit_code().unwrap_or(ExitCode::Generic.code());
        tracing::error!(fatal = true, exit_code = code, "{}", message);
        self.terminator.terminate(code)
    }
}

fn print_stack() {
    let trace = Backtrace::force_capture();
    let _ = writeln!(std::io::stderr().lock(), "stack backtrace:\n{}", trace);
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! errcheck-core: exit codes and fatal error reporting for command-line tools

pub mod macros;

pub mod env;
pub mod exit_code;
pub mod exit_error;
pub mod process;
pub mod reporter;
pub mod terminator;

pub use exit_code::{ExitCode, UnknownExitCode};
pub use exit_error::{ExitContext, ExitError, ExitResult};
pub use process::{check_error, check_error_with_code, fail_on_err, fatal, process_reporter};
pub use reporter::{Reporter, ReporterConfig};
#[cfg(any(test, feature = "test-support"))]
pub use terminator::{FakeTerminator, Terminated};
pub use terminator::{ProcessTerminator, Terminator};

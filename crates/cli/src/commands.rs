// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command handlers. Each subcommand drives one reporter entry point.

use clap::Subcommand;
use errcheck_core::{ExitCode, ExitContext, ExitResult, Reporter, Terminator};

use crate::output::{format_codes, OutputFormat};
use crate::printf::sprintf;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the exit codes and their meaning
    Codes {
        #[arg(short = 'o', long = "output", value_enum, default_value_t)]
        output: OutputFormat,
    },
    /// Exit 20 with a stack trace if an error is given
    Check {
        /// Error message to report
        #[arg(long)]
        error: Option<String>,
    },
    /// Exit with the given code if an error is given
    CheckCode {
        /// Exit code to terminate with
        #[arg(long)]
        code: i32,
        /// Error message to report
        #[arg(long)]
        error: Option<String>,
    },
    /// Print the value, or exit 20 if an error is given
    FailOnErr {
        value: String,
        /// Error message to report instead of printing the value
        #[arg(long)]
        error: Option<String>,
    },
    /// Log the concatenated arguments as fatal and exit with the given code
    Fatal {
        #[arg(long)]
        code: i32,
        #[arg(required = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Log a printf-style message as fatal and exit with the given code
    Fatalf {
        #[arg(long)]
        code: i32,
        /// Format string (%s, %v, %d, %q, %%)
        format: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Fail through a returned error, reported once by main
    Run {
        #[arg(long, default_value_t = ExitCode::Generic.code())]
        code: i32,
        /// Error the run fails with
        #[arg(long)]
        error: Option<String>,
    },
}

pub fn run<T: Terminator>(command: Command, reporter: &Reporter<T>) -> ExitResult<()> {
    match command {
        Command::Codes { output } => {
            let listing = format_codes(output).exit_code(ExitCode::Generic)?;
            print!("{listing}");
            Ok(())
        }
        Command::Check { error } => {
            reporter.check_error(error);
            Ok(())
        }
        Command::CheckCode { code, error } => {
            reporter.check_error_with_code(error, code);
            Ok(())
        }
        Command::FailOnErr { value, error } => {
            let value = reporter.fail_on_err(attempt(value, error));
            println!("{value}");
            Ok(())
        }
        Command::Fatal { code, args } => reporter.fatal(code, args.concat()),
        Command::Fatalf { code, format, args } => {
            let message = sprintf(&format, &args);
            reporter.fatalf(code, format_args!("{message}"))
        }
        Command::Run { code, error } => {
            attempt((), error).with_exit_code(code, "run")?;
            Ok(())
        }
    }
}

fn attempt<V>(value: V, error: Option<String>) -> Result<V, String> {
    match error {
        Some(err) => Err(err),
        None => Ok(value),
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

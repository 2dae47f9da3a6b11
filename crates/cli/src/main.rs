// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! errcheck: inspect and exercise the exit-code contract from the shell

mod color;
mod commands;
mod logging;
mod output;
mod printf;

use clap::Parser;
use errcheck_core::Reporter;

use commands::Command;

#[derive(Parser)]
#[command(name = "errcheck", version, styles = color::styles())]
#[command(about = "Report fatal errors with well-known exit codes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    logging::init();
    tracing::debug!(command = ?cli.command, "dispatching");

    let reporter = Reporter::process();
    let result = commands::run(cli.command, &reporter);
    reporter.exit_with(result);
}

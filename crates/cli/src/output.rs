// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use errcheck_core::ExitCode;

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render the exit-code table in the requested format.
pub fn format_codes(format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&ExitCode::ALL),
        OutputFormat::Text => Ok(format_codes_text()),
    }
}

fn format_codes_text() -> String {
    let name_width = ExitCode::ALL.iter().map(|c| c.name().len()).max().unwrap_or(0);
    let mut out = format!(
        "{}  {}  {}\n",
        color::header("CODE"),
        color::header(&format!("{:<name_width$}", "NAME")),
        color::header("DESCRIPTION"),
    );
    for code in ExitCode::ALL {
        out.push_str(&format!(
            "{}  {:<name_width$}  {}\n",
            color::literal(&format!("{:>4}", code.code())),
            code.name(),
            color::context(code.description()),
        ));
    }
    out
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

/// Default log filter when `ERRCHECK_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "error";

/// Whether `check_error` prints a stack trace (`ERRCHECK_BACKTRACE`, default on).
///
/// `0`, `false`, `off` and `no` disable it; anything else leaves it on.
pub fn backtrace_enabled() -> bool {
    match std::env::var("ERRCHECK_BACKTRACE") {
        Ok(v) => !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no"),
        Err(_) => true,
    }
}

/// Log filter directive: ERRCHECK_LOG > DEFAULT_LOG_FILTER
pub fn log_filter() -> String {
    std::env::var("ERRCHECK_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

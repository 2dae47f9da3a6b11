// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros for fatal reporting.
//!
//! - [`fatal!`] — concatenate `Display` arguments into the fatal message
//! - [`fatalf!`] — `format!`-style fatal message
//!
//! Both report through the process-wide reporter unless prefixed with
//! `in <reporter>,`.

/// Log the concatenation of the arguments at fatal severity and exit with `code`.
///
/// ```ignore
/// errcheck_core::fatal!(ExitCode::ConnectionFailure, "dial ", addr, ": ", err);
/// errcheck_core::fatal!(in reporter, 11, "no conn");
/// ```
#[macro_export]
macro_rules! fatal {
    (in $reporter:expr, $code:expr, $($arg:expr),+ $(,)?) => {{
        let mut message = ::std::string::String::new();
        $( let _ = ::std::fmt::Write::write_fmt(&mut message, format_args!("{}", $arg)); )+
        $reporter.fatal($code, message)
    }};
    ($code:expr, $($arg:expr),+ $(,)?) => {
        $crate::fatal!(in $crate::process_reporter(), $code, $($arg),+)
    };
}

/// Log a formatted message at fatal severity and exit with `code`.
///
/// ```ignore
/// errcheck_core::fatalf!(ExitCode::Generic, "val={}", 5);
/// ```
#[macro_export]
macro_rules! fatalf {
    (in $reporter:expr, $code:expr, $($fmt:tt)+) => {
        $reporter.fatalf($code, format_args!($($fmt)+))
    };
    ($code:expr, $($fmt:tt)+) => {
        $crate::process_reporter().fatalf($code, format_args!($($fmt)+))
    };
}

#[cfg(test)]
#[path = "macros_tests.rs"]
mod tests;

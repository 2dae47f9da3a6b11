// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log subscriber setup. Records go to stderr so stdout stays pipeable.

use errcheck_core::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::color;

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(color::should_colorize_stderr());

    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}

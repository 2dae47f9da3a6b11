// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::reporter::{Reporter, ReporterConfig};
use crate::terminator::{FakeTerminator, Terminated};
use crate::ExitCode;

fn reporter() -> Reporter<FakeTerminator> {
    Reporter::new(FakeTerminator::new(), ReporterConfig { backtrace: false })
}

#[test]
fn fatal_macro_concatenates_and_exits() {
    let reporter = reporter();
    let port = 8080;
    let result = FakeTerminator::catch(|| crate::fatal!(in reporter, 11, "dial ", "localhost:", port));
    assert_eq!(result, Err(Terminated { code: 11 }));
}

#[test]
fn fatal_macro_accepts_named_codes() {
    let reporter = reporter();
    let result =
        FakeTerminator::catch(|| crate::fatal!(in reporter, ExitCode::ResourceDoesNotExist, "gone"));
    assert_eq!(result, Err(Terminated { code: 13 }));
}

#[test]
fn fatalf_macro_exits_with_code() {
    let reporter = reporter();
    let result = FakeTerminator::catch(|| crate::fatalf!(in reporter, 12, "val={}", 5));
    assert_eq!(result, Err(Terminated { code: 12 }));
    assert_eq!(reporter.registered_exit_code(), Some(12));
}

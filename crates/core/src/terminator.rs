// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process termination abstraction for testable fatal paths

use std::io::Write;

/// Ends the current process with an exit code
pub trait Terminator: Send + Sync {
    fn terminate(&self, code: i32) -> !;
}

/// Real terminator: flushes stdio and calls `std::process::exit`
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessTerminator;

impl Terminator for ProcessTerminator {
    fn terminate(&self, code: i32) -> ! {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
        std::process::exit(code)
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeTerminator, Terminated};

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::Terminator;
    use parking_lot::Mutex;
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::Arc;

    /// Unwind payload raised by [`FakeTerminator`] in place of exiting.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Terminated {
        pub code: i32,
    }

    /// Fake terminator for testing: records the code and unwinds instead of exiting
    #[derive(Clone, Default)]
    pub struct FakeTerminator {
        codes: Arc<Mutex<Vec<i32>>>,
    }

    impl FakeTerminator {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every code passed to `terminate`, oldest first
        pub fn codes(&self) -> Vec<i32> {
            self.codes.lock().clone()
        }

        pub fn last_code(&self) -> Option<i32> {
            self.codes.lock().last().copied()
        }

        /// Run `f`, turning a fake termination into `Err(Terminated)`.
        ///
        /// Panics that did not come from a `FakeTerminator` keep unwinding.
        pub fn catch<R>(f: impl FnOnce() -> R) -> Result<R, Terminated> {
            match panic::catch_unwind(AssertUnwindSafe(f)) {
                Ok(value) => Ok(value),
                Err(payload) => match payload.downcast::<Terminated>() {
                    Ok(terminated) => Err(*terminated),
                    Err(other) => panic::resume_unwind(other),
                },
            }
        }
    }

    impl Terminator for FakeTerminator {
        fn terminate(&self, code: i32) -> ! {
            self.codes.lock().push(code);
            panic::panic_any(Terminated { code })
        }
    }
}

#[cfg(test)]
#[path = "terminator_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure reporting for stub verification.

use std::fmt;

/// Sink for deferred test failures.
pub trait Reporter {
    /// Marks the boundary failures should be attributed to.
    ///
    /// Rust attributes panics via `#[track_caller]`, so most reporters
    /// leave this empty.
    fn helper(&mut self) {}

    /// Record a formatted failure.
    fn errorf(&mut self, message: fmt::Arguments<'_>);
}

/// Reporter that fails the current test by panicking at the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    #[track_caller]
    #[allow(clippy::panic)]
    fn errorf(&mut self, message: fmt::Arguments<'_>) {
        panic!("{}", message);
    }
}

/// Reporter that collects failures for later inspection.
#[derive(Clone, Debug, Default)]
pub struct Failures {
    messages: Vec<String>,
    helper_calls: usize,
}

impl Failures {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded failure messages
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Check if no failures were recorded
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether a helper boundary was ever marked
    pub fn helper_called(&self) -> bool {
        self.helper_calls > 0
    }
}

impl Reporter for Failures {
    fn helper(&mut self) {
        self.helper_calls += 1;
    }

    fn errorf(&mut self, message: fmt::Arguments<'_>) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;

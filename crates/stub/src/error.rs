// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors returned when an invocation cannot be served by a stub.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StubError {
    /// No registered matcher accepted the invocation.
    #[error("no registered stubs matching: {invocation}")]
    NoStubMatched { invocation: String },

    /// Every stub accepting the invocation has already been consumed.
    ///
    /// `wanted` counts the failing call itself, so it is always
    /// `available + 1`.
    #[error("wanted {wanted} of only {available} stubs matching: {invocation}")]
    ExhaustedStubs {
        wanted: usize,
        available: usize,
        invocation: String,
    },

    /// Stubs were registered against a client that is not in stub mode.
    #[error("must enable stubbing before registering stubs")]
    NotStubbing,
}

impl StubError {
    /// Build the error for a failed selection given how many stubs matched.
    pub(crate) fn unserved(matches: usize, invocation: String) -> Self {
        if matches == 0 {
            StubError::NoStubMatched { invocation }
        } else {
            StubError::ExhaustedStubs {
                wanted: matches + 1,
                available: matches,
                invocation,
            }
        }
    }
}

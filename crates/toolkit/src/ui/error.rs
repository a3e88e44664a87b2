// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clikit_stub::StubError;
use thiserror::Error;

/// Errors that can occur while prompting
#[derive(Debug, Error)]
pub enum UiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot use '{answer}' as {expected}")]
    InvalidAnswer {
        expected: &'static str,
        answer: String,
    },

    #[error("input closed while prompting: {0}")]
    Eof(String),

    #[error("no options to select from: {0}")]
    NoOptions(String),

    /// Error scripted by a responder.
    #[error("{0}")]
    Custom(String),

    #[error(transparent)]
    Stub(#[from] StubError),
}

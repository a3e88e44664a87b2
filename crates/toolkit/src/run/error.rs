// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clikit_stub::StubError;
use thiserror::Error;

/// Non-zero exit of a command, real or stubbed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("exit status {code}")]
pub struct ExitError {
    code: i32,
    stderr: Vec<u8>,
}

impl ExitError {
    pub fn new(code: i32) -> Self {
        Self {
            code,
            stderr: Vec::new(),
        }
    }

    pub fn with_stderr(mut self, stderr: impl Into<Vec<u8>>) -> Self {
        self.stderr = stderr.into();
        self
    }

    /// Exit code; -1 when the process was killed by a signal
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Captured standard error, if any
    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    pub(crate) fn set_stderr(&mut self, stderr: Vec<u8>) {
        self.stderr = stderr;
    }
}

/// Errors that can occur when running a command
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Exit(#[from] ExitError),

    #[error("run: stdout already set")]
    StdoutAlreadySet,

    #[error("invalid match: cmd='{command}', pattern='{pattern}', index='{index}'")]
    InvalidMatch {
        command: String,
        pattern: String,
        index: usize,
    },

    /// Error scripted by a responder.
    #[error("{0}")]
    Custom(String),

    #[error(transparent)]
    Stub(#[from] StubError),
}

impl RunError {
    /// Exit code carried by an [`ExitError`]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RunError::Exit(e) => Some(e.code()),
            _ => None,
        }
    }
}

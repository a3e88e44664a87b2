// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::cmd::Cmd;
use super::error::{ExitError, RunError};
use super::executor::Output;
use regex::Regex;
use std::sync::Arc;

/// Produces stubbed command output.
pub type Responder = clikit_stub::Responder<Cmd, Output, RunError>;

/// Fails with `message`.
pub fn error_response(message: impl Into<String>) -> Responder {
    let message = message.into();
    Arc::new(move |_: &Cmd| -> Result<Output, RunError> {
        Err(RunError::Custom(message.clone()))
    })
}

/// Exits with `code`, writing `stderr` to the command's error stream.
pub fn exit_response(code: i32, stderr: impl Into<Vec<u8>>) -> Responder {
    let stderr = stderr.into();
    Arc::new(move |_: &Cmd| -> Result<Output, RunError> {
        Err(ExitError::new(code).with_stderr(stderr.clone()).into())
    })
}

/// Writes capture group `index` of `pattern` matched against the command
/// line.
///
/// `regexp_response(r"echo (\w+)$", 1)` answers `echo howdy` with `howdy`.
/// Fails with [`RunError::InvalidMatch`] when the pattern does not match or
/// has no group `index`; a group that did not participate yields "".
pub fn regexp_response(pattern: &str, index: usize) -> Result<Responder, regex::Error> {
    let re = Regex::new(pattern)?;
    let pattern = pattern.to_string();
    Ok(Arc::new(move |cmd: &Cmd| -> Result<Output, RunError> {
        let line = cmd.to_string();
        let captures = re.captures(&line).filter(|c| index < c.len());
        match captures {
            Some(c) => Ok(Output::new(c.get(index).map_or("", |m| m.as_str()))),
            None => Err(RunError::InvalidMatch {
                command: line.clone(),
                pattern: pattern.clone(),
                index,
            }),
        }
    }))
}

/// Writes `s` to stdout.
pub fn string_response(s: impl Into<String>) -> Responder {
    let s = s.into();
    Arc::new(move |_: &Cmd| -> Result<Output, RunError> { Ok(Output::new(s.clone())) })
}

#[cfg(test)]
#[path = "responder_tests.rs"]
mod tests;

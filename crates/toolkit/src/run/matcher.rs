// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::cmd::Cmd;
use regex::Regex;
use std::sync::Arc;

/// Predicate over commands.
pub type Matcher = clikit_stub::Matcher<Cmd>;

/// Matches any command.
pub fn match_any() -> Matcher {
    Arc::new(|_: &Cmd| true)
}

/// Matches when every one of `matchers` does.
pub fn match_all(matchers: Vec<Matcher>) -> Matcher {
    Arc::new(move |cmd: &Cmd| matchers.iter().all(|m| m(cmd)))
}

/// Matches commands whose stdin is exactly `expected`.
///
/// Stdin is peeked, so it stays readable for the execution that follows.
/// A read failure counts as no match.
pub fn match_stdin(expected: impl Into<String>) -> Matcher {
    let expected = expected.into();
    Arc::new(move |cmd: &Cmd| match cmd.peek_stdin() {
        Ok(Some(buf)) => buf == expected.as_bytes(),
        Ok(None) => false,
        Err(err) => {
            tracing::warn!(command = %cmd, error = %err, "failed to peek stdin");
            false
        }
    })
}

/// Matches the command line (program and args joined by spaces).
pub fn match_string(expected: impl Into<String>) -> Matcher {
    let expected = expected.into();
    Arc::new(move |cmd: &Cmd| cmd.to_string() == expected)
}

/// Matches command lines against a regular expression.
pub fn match_regexp(pattern: &str) -> Result<Matcher, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(Arc::new(move |cmd: &Cmd| re.is_match(&cmd.to_string())))
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;

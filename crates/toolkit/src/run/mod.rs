// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External process execution with pluggable stubbing.

mod client;
mod cmd;
mod error;
mod executor;
mod matcher;
mod responder;

pub use client::Client;
pub use cmd::{Cmd, CmdRecord};
pub use error::{ExitError, RunError};
pub use executor::{Executor, Output, StubExecutor, SystemExecutor};
pub use matcher::{match_all, match_any, match_regexp, match_stdin, match_string, Matcher};
pub use responder::{
    error_response, exit_response, regexp_response, string_response, Responder,
};

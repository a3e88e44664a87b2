// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process client that supports stubbing.

use super::cmd::{Cmd, CmdRecord};
use super::error::RunError;
use super::executor::{Executor, StubExecutor, SystemExecutor};
use super::matcher::Matcher;
use super::responder::Responder;
use clikit_stub::{Reporter, StubError, StubId};
use std::sync::Arc;

#[derive(Clone)]
enum Mode {
    Live(Arc<dyn Executor>),
    Stub(Arc<StubExecutor>),
}

/// Runs external commands; see [`Client::enable_stubbing`] for tests.
#[derive(Clone)]
pub struct Client {
    mode: Mode,
}

impl Client {
    /// Client spawning real processes
    pub fn new() -> Self {
        Self::with_executor(Arc::new(SystemExecutor))
    }

    pub fn with_executor(executor: Arc<dyn Executor>) -> Self {
        Self {
            mode: Mode::Live(executor),
        }
    }

    /// Build a command for `program` with `args`
    pub fn command<I, S>(&self, program: impl Into<String>, args: I) -> Cmd
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Cmd::new(program).args(args)
    }

    fn executor(&self) -> &dyn Executor {
        match &self.mode {
            Mode::Live(executor) => executor.as_ref(),
            Mode::Stub(executor) => executor.as_ref(),
        }
    }

    /// Run `cmd` to completion
    pub fn run(&self, cmd: &mut Cmd) -> Result<(), RunError> {
        self.executor().run(cmd)
    }

    /// Run `cmd` and collect its standard output
    pub fn output(&self, cmd: &mut Cmd) -> Result<Vec<u8>, RunError> {
        self.executor().output(cmd)
    }

    /// Returns true if the client is configured for stubbing
    pub fn is_stubbing(&self) -> bool {
        matches!(self.mode, Mode::Stub(_))
    }

    /// Switch to a stub executor; a no-op when already stubbing
    pub fn enable_stubbing(&mut self) -> &mut Self {
        if !self.is_stubbing() {
            self.mode = Mode::Stub(Arc::new(StubExecutor::new()));
        }
        self
    }

    /// Register a new stub for the given matcher/responder pair.
    ///
    /// # Panics
    ///
    /// Panics if stubbing has not been enabled.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn register_stub(&self, matcher: Matcher, responder: Responder) -> &Self {
        if let Err(err) = self.try_register_stub(matcher, responder) {
            panic!("{}", err);
        }
        self
    }

    /// Register a new stub, or [`StubError::NotStubbing`] outside stub mode
    pub fn try_register_stub(
        &self,
        matcher: Matcher,
        responder: Responder,
    ) -> Result<StubId, StubError> {
        match &self.mode {
            Mode::Stub(executor) => Ok(executor.register_stub(matcher, responder)),
            Mode::Live(_) => Err(StubError::NotStubbing),
        }
    }

    /// Fail the test if there are unmatched stubs.
    ///
    /// # Panics
    ///
    /// Panics if stubbing has not been enabled.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn verify_stubs<T: Reporter + ?Sized>(&self, reporter: &mut T) {
        match &self.mode {
            Mode::Stub(executor) => executor.verify_stubs(reporter),
            Mode::Live(_) => panic!("must enable stubbing before verifying stubs"),
        }
    }

    /// Commands served by stubs, in order; empty outside stub mode
    pub fn commands(&self) -> Vec<CmdRecord> {
        match &self.mode {
            Mode::Stub(executor) => executor.commands(),
            Mode::Live(_) => Vec::new(),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("stubbing", &self.is_stubbing())
            .finish()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

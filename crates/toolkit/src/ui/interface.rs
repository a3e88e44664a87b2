// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! High level terminal interface.

use super::error::UiError;
use super::matcher::Matcher;
use super::prompt::{Prompt, PromptOptions};
use super::prompter::{LinePrompter, Prompter, StubPrompter};
use super::responder::Responder;
use super::streams::IoStreams;
use clikit_stub::{Reporter, StubError, StubId};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
enum Mode {
    Live(Arc<dyn Prompter>),
    Stub(Arc<StubPrompter>),
}

/// Prints to the CLI streams and prompts the user.
///
/// Prompts go through a [`LinePrompter`] unless stubbing is enabled.
#[derive(Clone)]
pub struct UserInterface {
    streams: IoStreams,
    mode: Mode,
}

impl UserInterface {
    pub fn new(streams: IoStreams) -> Self {
        let prompter = Arc::new(LinePrompter::new(streams.clone()));
        Self::with_prompter(streams, prompter)
    }

    pub fn with_prompter(streams: IoStreams, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            streams,
            mode: Mode::Live(prompter),
        }
    }

    pub fn streams(&self) -> &IoStreams {
        &self.streams
    }

    /// Write to the out stream
    pub fn out(&self, args: fmt::Arguments<'_>) -> Result<(), UiError> {
        Ok(self.streams.write_out(args)?)
    }

    /// Write to the err stream
    pub fn err(&self, args: fmt::Arguments<'_>) -> Result<(), UiError> {
        Ok(self.streams.write_err(args)?)
    }

    fn prompter(&self) -> &dyn Prompter {
        match &self.mode {
            Mode::Live(prompter) => prompter.as_ref(),
            Mode::Stub(prompter) => prompter.as_ref(),
        }
    }

    pub fn confirm(&self, message: &str, default: bool, help: &str) -> Result<bool, UiError> {
        self.prompter()
            .confirm(message, default, &PromptOptions::from_help(help))
    }

    pub fn input(&self, message: &str, default: &str, help: &str) -> Result<String, UiError> {
        self.prompter()
            .input(message, default, &PromptOptions::from_help(help))
    }

    pub fn multi_select(
        &self,
        message: &str,
        choices: &[&str],
        defaults: &[&str],
        help: &str,
    ) -> Result<Vec<String>, UiError> {
        self.prompter()
            .multi_select(message, choices, defaults, &PromptOptions::from_help(help))
    }

    pub fn select(
        &self,
        message: &str,
        choices: &[&str],
        default: &str,
        help: &str,
    ) -> Result<String, UiError> {
        self.prompter()
            .select(message, choices, default, &PromptOptions::from_help(help))
    }

    /// Returns true if prompts are answered by stubs
    pub fn is_stubbing(&self) -> bool {
        matches!(self.mode, Mode::Stub(_))
    }

    /// Switch to a stub prompter; a no-op when already stubbing
    pub fn enable_stubbing(&mut self) -> &mut Self {
        if !self.is_stubbing() {
            self.mode = Mode::Stub(Arc::new(StubPrompter::new(self.streams.clone())));
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
            Mode::Stub(prompter) => Ok(prompter.register_stub(matcher, responder)),
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
            Mode::Stub(prompter) => prompter.verify_stubs(reporter),
            Mode::Live(_) => panic!("must enable stubbing before verifying stubs"),
        }
    }

    /// Prompts answered by stubs, in order; empty outside stub mode
    pub fn prompts(&self) -> Vec<Prompt> {
        match &self.mode {
            Mode::Stub(prompter) => prompter.prompts(),
            Mode::Live(_) => Vec::new(),
        }
    }
}

impl fmt::Debug for UserInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInterface")
            .field("streams", &self.streams)
            .field("stubbing", &self.is_stubbing())
            .finish()
    }
}

#[cfg(test)]
#[path = "interface_tests.rs"]
mod tests;

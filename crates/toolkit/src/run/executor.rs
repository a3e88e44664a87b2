// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Executors that run a [`Cmd`], for real or against stubs.

use super::cmd::{Cmd, CmdRecord};
use super::error::{ExitError, RunError};
use super::matcher::Matcher;
use super::responder::Responder;
use crate::buffer::SharedBuffer;
use clikit_stub::{Reporter, StubId, StubRegistry};
use std::io;
use std::process::{Command, Stdio};
use std::thread;

/// Scripted result of a stubbed command
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Output {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl Output {
    pub fn new(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    pub fn with_stderr(mut self, stderr: impl Into<Vec<u8>>) -> Self {
        self.stderr = stderr.into();
        self
    }
}

/// Ability to execute an external command.
pub trait Executor: Send + Sync {
    /// Run the command to completion, streaming into its writers.
    fn run(&self, cmd: &mut Cmd) -> Result<(), RunError>;

    /// Run the command and return its standard output.
    ///
    /// Stderr is captured too when the command has no writer for it, and
    /// attached to the [`ExitError`] of a failed run.
    fn output(&self, cmd: &mut Cmd) -> Result<Vec<u8>, RunError> {
        if cmd.stdout.is_some() {
            return Err(RunError::StdoutAlreadySet);
        }
        let stdout = SharedBuffer::new();
        cmd.stdout = Some(Box::new(stdout.clone()));

        let stderr = SharedBuffer::new();
        let capture_err = cmd.stderr.is_none();
        if capture_err {
            cmd.stderr = Some(Box::new(stderr.clone()));
        }

        match self.run(cmd) {
            Ok(()) => Ok(stdout.contents()),
            Err(RunError::Exit(mut err)) if capture_err => {
                err.set_stderr(stderr.contents());
                Err(RunError::Exit(err))
            }
            Err(err) => Err(err),
        }
    }
}

/// Executor spawning real processes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemExecutor;

fn piped_if(wanted: bool) -> Stdio {
    if wanted {
        Stdio::piped()
    } else {
        Stdio::null()
    }
}

impl Executor for SystemExecutor {
    fn run(&self, cmd: &mut Cmd) -> Result<(), RunError> {
        let mut command = Command::new(cmd.program());
        command.args(cmd.get_args());
        command.envs(cmd.get_envs().iter().map(|(k, v)| (k, v)));
        if let Some(dir) = cmd.get_current_dir() {
            command.current_dir(dir);
        }

        let stdin = cmd.take_stdin();
        command
            .stdin(piped_if(stdin.is_some()))
            .stdout(piped_if(cmd.stdout.is_some()))
            .stderr(piped_if(cmd.stderr.is_some()));

        tracing::debug!(command = %cmd, "spawning process");
        let mut child = command.spawn().map_err(|source| RunError::Spawn {
            command: cmd.to_string(),
            source,
        })?;

        let feeder = match (stdin, child.stdin.take()) {
            (Some(mut reader), Some(mut pipe)) => Some(thread::spawn(move || {
                io::copy(&mut reader, &mut pipe).map(|_| ())
            })),
            _ => None,
        };

        let output = child.wait_with_output()?;
        if let Some(Ok(Err(err))) = feeder.map(|h| h.join()) {
            // The child may exit without draining its input
            if err.kind() != io::ErrorKind::BrokenPipe {
                return Err(err.into());
            }
        }

        cmd.write_stdout(&output.stdout)?;
        cmd.write_stderr(&output.stderr)?;

        let code = output.status.code().unwrap_or(-1);
        cmd.set_exit_code(code);
        tracing::debug!(command = %cmd, code, "process exited");
        if output.status.success() {
            Ok(())
        } else {
            Err(ExitError::new(code).into())
        }
    }
}

/// Executor that serves registered stubs instead of spawning processes.
#[derive(Debug, Default)]
pub struct StubExecutor {
    registry: StubRegistry<Cmd, Output, RunError>,
}

impl StubExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new stub for the given matcher/responder pair
    pub fn register_stub(&self, matcher: Matcher, responder: Responder) -> StubId {
        self.registry.register(matcher, responder)
    }

    /// Fail the test if there are unmatched stubs
    #[track_caller]
    pub fn verify_stubs<T: Reporter + ?Sized>(&self, reporter: &mut T) {
        self.registry.verify(reporter);
    }

    /// Commands served by a stub, in order
    pub fn commands(&self) -> Vec<CmdRecord> {
        self.registry.dispatched()
    }
}

impl Executor for StubExecutor {
    fn run(&self, cmd: &mut Cmd) -> Result<(), RunError> {
        match self.registry.dispatch(cmd) {
            Ok(output) => {
                cmd.write_stdout(&output.stdout)?;
                cmd.write_stderr(&output.stderr)?;
                cmd.set_exit_code(0);
                Ok(())
            }
            Err(RunError::Exit(err)) => {
                cmd.write_stderr(err.stderr())?;
                cmd.set_exit_code(err.code());
                Err(RunError::Exit(err))
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;

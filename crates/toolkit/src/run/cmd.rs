// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command description shared by real and stubbed executors.

use clikit_stub::Invocation;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};

const STDIN_PREVIEW_CHARS: usize = 20;

enum Stdin {
    Stream(Box<dyn Read + Send>),
    Buffered(Cursor<Vec<u8>>),
}

/// A command to run, plus where its streams go.
///
/// Built with [`Cmd::new`] or [`Client::command`](super::Client::command)
/// and executed through a [`Client`](super::Client).
pub struct Cmd {
    program: String,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    current_dir: Option<PathBuf>,
    stdin: Mutex<Option<Stdin>>,
    pub(crate) stdout: Option<Box<dyn Write + Send>>,
    pub(crate) stderr: Option<Box<dyn Write + Send>>,
    exit_code: Option<i32>,
}

impl Cmd {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            current_dir: None,
            stdin: Mutex::new(None),
            stdout: None,
            stderr: None,
            exit_code: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn stdin(self, reader: impl Read + Send + 'static) -> Self {
        *self.stdin.lock() = Some(Stdin::Stream(Box::new(reader)));
        self
    }

    pub fn stdout(mut self, writer: impl Write + Send + 'static) -> Self {
        self.stdout = Some(Box::new(writer));
        self
    }

    pub fn stderr(mut self, writer: impl Write + Send + 'static) -> Self {
        self.stderr = Some(Box::new(writer));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn get_envs(&self) -> &[(String, String)] {
        &self.envs
    }

    pub fn get_current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// Exit code of the last run; `None` until the command has exited
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    pub(crate) fn set_exit_code(&mut self, code: i32) {
        self.exit_code = Some(code);
    }

    /// Read stdin without consuming it.
    ///
    /// The first peek drains the original reader into a buffer that then
    /// replaces it, so later peeks and the eventual execution see the same
    /// bytes. Returns `None` when no stdin is set.
    pub fn peek_stdin(&self) -> io::Result<Option<Vec<u8>>> {
        let mut slot = self.stdin.lock();
        match slot.take() {
            None => Ok(None),
            Some(Stdin::Buffered(cursor)) => {
                let pos = (cursor.position() as usize).min(cursor.get_ref().len());
                let rest = cursor.get_ref()[pos..].to_vec();
                *slot = Some(Stdin::Buffered(cursor));
                Ok(Some(rest))
            }
            Some(Stdin::Stream(mut reader)) => {
                let mut buf = Vec::new();
                let result = reader.read_to_end(&mut buf);
                *slot = Some(Stdin::Buffered(Cursor::new(buf.clone())));
                result.map(|_| Some(buf))
            }
        }
    }

    /// Take the stdin reader for execution
    pub(crate) fn take_stdin(&mut self) -> Option<Box<dyn Read + Send>> {
        self.stdin.get_mut().take().map(|stdin| match stdin {
            Stdin::Stream(reader) => reader,
            Stdin::Buffered(cursor) => Box::new(cursor) as Box<dyn Read + Send>,
        })
    }

    /// Command line plus a truncated stdin preview
    pub fn debug_string(&self) -> String {
        let stdin = match self.peek_stdin() {
            Ok(Some(bytes)) if !bytes.is_empty() => bytes,
            _ => return self.to_string(),
        };
        let text = String::from_utf8_lossy(&stdin);
        let mut preview: String = text.chars().take(STDIN_PREVIEW_CHARS).collect();
        if text.chars().count() > STDIN_PREVIEW_CHARS {
            preview.push('…');
        }
        format!("{} [Stdin: \"{}\"]", self, preview)
    }

    pub(crate) fn write_stdout(&mut self, bytes: &[u8]) -> io::Result<()> {
        write_to(self.stdout.as_mut(), bytes)
    }

    pub(crate) fn write_stderr(&mut self, bytes: &[u8]) -> io::Result<()> {
        write_to(self.stderr.as_mut(), bytes)
    }
}

fn write_to(writer: Option<&mut Box<dyn Write + Send>>, bytes: &[u8]) -> io::Result<()> {
    match writer {
        Some(w) if !bytes.is_empty() => {
            w.write_all(bytes)?;
            w.flush()
        }
        _ => Ok(()),
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cmd")
            .field("program", &self.program)
            .field("args", &self.args)
            .field("envs", &self.envs)
            .field("current_dir", &self.current_dir)
            .field("exit_code", &self.exit_code)
            .finish_non_exhaustive()
    }
}

impl Invocation for Cmd {
    type Record = CmdRecord;

    fn describe(&self) -> String {
        self.debug_string()
    }

    fn record(&self) -> CmdRecord {
        let stdin = self.peek_stdin().unwrap_or_else(|err| {
            tracing::warn!(command = %self, error = %err, "failed to read stdin for record");
            None
        });
        CmdRecord {
            program: self.program.clone(),
            args: self.args.clone(),
            envs: self.envs.clone(),
            current_dir: self.current_dir.clone(),
            stdin,
        }
    }
}

/// Snapshot of a dispatched command
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CmdRecord {
    pub program: String,
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
    pub current_dir: Option<PathBuf>,
    pub stdin: Option<Vec<u8>>,
}

impl fmt::Display for CmdRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "cmd_tests.rs"]
mod tests;

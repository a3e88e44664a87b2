// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input and output streams used by prompts.

use crate::buffer::SharedBuffer;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, BufRead, BufReader, Cursor, IsTerminal, Write};
use std::sync::Arc;

type Input = Arc<Mutex<Box<dyn BufRead + Send>>>;
type Output = Arc<Mutex<Box<dyn Write + Send>>>;

/// The three CLI streams, shared between clones.
#[derive(Clone)]
pub struct IoStreams {
    input: Input,
    out: Output,
    err: Output,
    interactive: bool,
}

impl IoStreams {
    /// Process stdin, stdout and stderr.
    ///
    /// Interactive when both stdin and stdout are terminals.
    pub fn system() -> Self {
        let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
        let mut streams = Self::new(BufReader::new(io::stdin()), io::stdout(), io::stderr());
        streams.interactive = interactive;
        streams
    }

    /// Non-interactive streams over the given reader and writers
    pub fn new(
        input: impl BufRead + Send + 'static,
        out: impl Write + Send + 'static,
        err: impl Write + Send + 'static,
    ) -> Self {
        Self {
            input: Arc::new(Mutex::new(Box::new(input))),
            out: Arc::new(Mutex::new(Box::new(out))),
            err: Arc::new(Mutex::new(Box::new(err))),
            interactive: false,
        }
    }

    /// Streams reading `input`, plus buffers capturing out and err
    pub fn test(input: &str) -> (Self, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::new();
        let err = SharedBuffer::new();
        let streams = Self::new(
            Cursor::new(input.as_bytes().to_vec()),
            out.clone(),
            err.clone(),
        );
        (streams, out, err)
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn write_out(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut out = self.out.lock();
        out.write_fmt(args)?;
        out.flush()
    }

    pub fn write_err(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut err = self.err.lock();
        err.write_fmt(args)?;
        err.flush()
    }

    /// Next input line without its line ending; `None` at end of input
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl fmt::Debug for IoStreams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IoStreams")
            .field("interactive", &self.interactive)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "streams_tests.rs"]
mod tests;

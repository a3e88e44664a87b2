// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompter implementations.

use super::error::UiError;
use super::matcher::Matcher;
use super::prompt::{Answer, Prompt, PromptKind, PromptOptions};
use super::responder::Responder;
use super::streams::IoStreams;
use clikit_stub::{Reporter, StubId, StubRegistry};

/// Types that prompt for user input.
pub trait Prompter: Send + Sync {
    /// Prompt for a yes/no value.
    fn confirm(&self, message: &str, default: bool, options: &PromptOptions)
        -> Result<bool, UiError>;

    /// Prompt for a single string value.
    fn input(&self, message: &str, default: &str, options: &PromptOptions)
        -> Result<String, UiError>;

    /// Prompt for any number of values from a fixed set of choices.
    fn multi_select(
        &self,
        message: &str,
        choices: &[&str],
        defaults: &[&str],
        options: &PromptOptions,
    ) -> Result<Vec<String>, UiError>;

    /// Prompt for a single value from a fixed set of choices.
    fn select(
        &self,
        message: &str,
        choices: &[&str],
        default: &str,
        options: &PromptOptions,
    ) -> Result<String, UiError>;
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Prompter answering from registered stubs.
///
/// Each answered prompt is echoed to the out stream as `? <message> <answer>`.
#[derive(Debug)]
pub struct StubPrompter {
    streams: IoStreams,
    registry: StubRegistry<Prompt, Answer, UiError>,
}

impl StubPrompter {
    pub fn new(streams: IoStreams) -> Self {
        Self {
            streams,
            registry: StubRegistry::new(),
        }
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

    /// Prompts answered by a stub, in order
    pub fn prompts(&self) -> Vec<Prompt> {
        self.registry.dispatched()
    }

    fn echo(&self, message: &str, answer: &str) -> Result<(), UiError> {
        self.streams
            .write_out(format_args!("? {} {}\n", message, answer))?;
        Ok(())
    }
}

impl Prompter for StubPrompter {
    fn confirm(
        &self,
        message: &str,
        default: bool,
        options: &PromptOptions,
    ) -> Result<bool, UiError> {
        let prompt =
            Prompt::new(PromptKind::Confirm, message, default).with_prompt_options(options);
        let answer = self.registry.dispatch(&prompt)?.to_bool()?;
        self.echo(message, if answer { "Yes" } else { "No" })?;
        Ok(answer)
    }

    fn input(
        &self,
        message: &str,
        default: &str,
        options: &PromptOptions,
    ) -> Result<String, UiError> {
        let prompt = Prompt::new(PromptKind::Input, message, default).with_prompt_options(options);
        let answer = self.registry.dispatch(&prompt)?.into_string()?;
        self.echo(message, &answer)?;
        Ok(answer)
    }

    fn multi_select(
        &self,
        message: &str,
        choices: &[&str],
        defaults: &[&str],
        options: &PromptOptions,
    ) -> Result<Vec<String>, UiError> {
        let prompt = Prompt::new(PromptKind::MultiSelect, message, owned(defaults))
            .with_options(choices)
            .with_prompt_options(options);
        let answer = self.registry.dispatch(&prompt)?.into_strings()?;
        self.echo(message, &answer.join(", "))?;
        Ok(answer)
    }

    fn select(
        &self,
        message: &str,
        choices: &[&str],
        default: &str,
        options: &PromptOptions,
    ) -> Result<String, UiError> {
        let prompt = Prompt::new(PromptKind::Select, message, default)
            .with_options(choices)
            .with_prompt_options(options);
        let answer = self.registry.dispatch(&prompt)?.into_string()?;
        self.echo(message, &answer)?;
        Ok(answer)
    }
}

/// Line-oriented prompter over [`IoStreams`].
///
/// Answers are read one line at a time and trimmed. An empty line accepts
/// the default and `?` shows the help text, if any. When the streams are
/// not interactive every prompt returns its default without asking.
#[derive(Clone, Debug)]
pub struct LinePrompter {
    streams: IoStreams,
}

impl LinePrompter {
    pub fn new(streams: IoStreams) -> Self {
        Self { streams }
    }

    /// Ask until `parse` accepts a line; `None` from `parse` re-asks.
    fn ask<T>(
        &self,
        message: &str,
        hint: &str,
        options: &PromptOptions,
        mut parse: impl FnMut(&str) -> Result<Option<T>, UiError>,
    ) -> Result<T, UiError> {
        loop {
            if hint.is_empty() {
                self.streams.write_out(format_args!("? {} ", message))?;
            } else {
                self.streams.write_out(format_args!("? {} {} ", message, hint))?;
            }
            let Some(line) = self.streams.read_line()? else {
                return Err(UiError::Eof(message.to_string()));
            };
            let line = line.trim();
            if line == "?" {
                if let Some(help) = &options.help {
                    self.streams.write_out(format_args!("{}\n", help))?;
                    continue;
                }
            }
            if let Some(value) = parse(line)? {
                tracing::trace!(prompt = message, "prompt answered");
                return Ok(value);
            }
        }
    }

    fn list_choices(&self, choices: &[&str]) -> Result<(), UiError> {
        for (i, choice) in choices.iter().enumerate() {
            self.streams
                .write_out(format_args!("  {}) {}\n", i + 1, choice))?;
        }
        Ok(())
    }

    fn choice(&self, choices: &[&str], token: &str) -> Result<Option<String>, UiError> {
        let found = match token.parse::<usize>() {
            Ok(n) if (1..=choices.len()).contains(&n) => Some(choices[n - 1]),
            _ => choices.iter().copied().find(|c| *c == token),
        };
        if found.is_none() {
            self.streams
                .write_out(format_args!("Invalid choice: {}\n", token))?;
        }
        Ok(found.map(str::to_string))
    }
}

impl Prompter for LinePrompter {
    fn confirm(
        &self,
        message: &str,
        default: bool,
        options: &PromptOptions,
    ) -> Result<bool, UiError> {
        if !self.streams.is_interactive() {
            return Ok(default);
        }
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        self.ask(message, hint, options, |line| {
            match line.to_ascii_lowercase().as_str() {
                "" => Ok(Some(default)),
                "y" | "yes" => Ok(Some(true)),
                "n" | "no" => Ok(Some(false)),
                _ => {
                    self.streams
                        .write_out(format_args!("Please answer yes or no.\n"))?;
                    Ok(None)
                }
            }
        })
    }

    fn input(
        &self,
        message: &str,
        default: &str,
        options: &PromptOptions,
    ) -> Result<String, UiError> {
        if !self.streams.is_interactive() {
            return Ok(default.to_string());
        }
        let hint = if default.is_empty() {
            String::new()
        } else {
            format!("({})", default)
        };
        self.ask(message, &hint, options, |line| {
            Ok(Some(if line.is_empty() { default } else { line }.to_string()))
        })
    }

    fn multi_select(
        &self,
        message: &str,
        choices: &[&str],
        defaults: &[&str],
        options: &PromptOptions,
    ) -> Result<Vec<String>, UiError> {
        if choices.is_empty() {
            return Err(UiError::NoOptions(message.to_string()));
        }
        if !self.streams.is_interactive() {
            return Ok(owned(defaults));
        }
        self.list_choices(choices)?;
        let hint = if defaults.is_empty() {
            String::new()
        } else {
            format!("({})", defaults.join(", "))
        };
        self.ask(message, &hint, options, |line| {
            if line.is_empty() {
                return Ok(Some(owned(defaults)));
            }
            let mut picked = Vec::new();
            for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                match self.choice(choices, token)? {
                    Some(choice) => picked.push(choice),
                    None => return Ok(None),
                }
            }
            Ok(Some(picked))
        })
    }

    fn select(
        &self,
        message: &str,
        choices: &[&str],
        default: &str,
        options: &PromptOptions,
    ) -> Result<String, UiError> {
        let Some(first) = choices.first() else {
            return Err(UiError::NoOptions(message.to_string()));
        };
        let default = if choices.contains(&default) { default } else { *first };
        if !self.streams.is_interactive() {
            return Ok(default.to_string());
        }
        self.list_choices(choices)?;
        self.ask(message, &format!("({})", default), options, |line| {
            if line.is_empty() {
                return Ok(Some(default.to_string()));
            }
            self.choice(choices, line)
        })
    }
}

#[cfg(test)]
#[path = "prompter_tests.rs"]
mod tests;

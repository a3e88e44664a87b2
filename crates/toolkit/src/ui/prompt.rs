// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt descriptions and answers.

use super::error::UiError;
use clikit_stub::Invocation;
use std::fmt;

/// Kind of interactive prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PromptKind {
    Confirm,
    Input,
    MultiSelect,
    Select,
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PromptKind::Confirm => "Confirm",
            PromptKind::Input => "Input",
            PromptKind::MultiSelect => "MultiSelect",
            PromptKind::Select => "Select",
        };
        f.write_str(name)
    }
}

/// Value a prompt produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    Bool(bool),
    String(String),
    Strings(Vec<String>),
}

impl Answer {
    /// Boolean view; strings like "t", "yes" or "0" are accepted
    pub fn to_bool(&self) -> Result<bool, UiError> {
        match self {
            Answer::Bool(b) => Ok(*b),
            Answer::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "1" | "t" | "true" | "y" | "yes" => Ok(true),
                "0" | "f" | "false" | "n" | "no" | "" => Ok(false),
                _ => Err(self.invalid("bool")),
            },
            Answer::Strings(_) => Err(self.invalid("bool")),
        }
    }

    pub fn into_string(self) -> Result<String, UiError> {
        match self {
            Answer::Bool(b) => Ok(b.to_string()),
            Answer::String(s) => Ok(s),
            Answer::Strings(_) => Err(self.invalid("string")),
        }
    }

    /// List view; a single string splits on whitespace
    pub fn into_strings(self) -> Result<Vec<String>, UiError> {
        match self {
            Answer::Strings(v) => Ok(v),
            Answer::String(s) => Ok(s.split_whitespace().map(str::to_string).collect()),
            Answer::Bool(_) => Err(self.invalid("string list")),
        }
    }

    fn invalid(&self, expected: &'static str) -> UiError {
        UiError::InvalidAnswer {
            expected,
            answer: self.to_string(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Bool(b) => write!(f, "{}", b),
            Answer::String(s) => f.write_str(s),
            Answer::Strings(v) => write!(f, "[{}]", v.join(", ")),
        }
    }
}

impl From<bool> for Answer {
    fn from(b: bool) -> Self {
        Answer::Bool(b)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::String(s.to_string())
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::String(s)
    }
}

impl From<Vec<String>> for Answer {
    fn from(v: Vec<String>) -> Self {
        Answer::Strings(v)
    }
}

/// Optional prompt parameters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromptOptions {
    /// Shown when the user answers "?".
    pub help: Option<String>,
}

impl PromptOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }

    /// Options from a help string; empty means none
    pub(crate) fn from_help(text: &str) -> Self {
        Self {
            help: (!text.is_empty()).then(|| text.to_string()),
        }
    }
}

/// A single question put to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub message: String,
    pub help: Option<String>,
    /// Answer used when the user accepts the default.
    pub default: Answer,
    /// Choices for select prompts; empty otherwise.
    pub options: Vec<String>,
}

impl Prompt {
    pub fn new(kind: PromptKind, message: impl Into<String>, default: impl Into<Answer>) -> Self {
        Self {
            kind,
            message: message.into(),
            help: None,
            default: default.into(),
            options: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_prompt_options(mut self, options: &PromptOptions) -> Self {
        self.help = options.help.clone();
        self
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} msg={}>", self.kind, self.message)
    }
}

impl Invocation for Prompt {
    type Record = Prompt;

    fn describe(&self) -> String {
        self.to_string()
    }

    fn record(&self) -> Prompt {
        self.clone()
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive prompts with pluggable stubbing.

mod error;
mod interface;
mod matcher;
mod prompt;
mod prompter;
mod responder;
mod streams;

pub use error::UiError;
pub use interface::UserInterface;
pub use matcher::{
    match_any, match_confirm, match_input, match_multi_select, match_select, Matcher,
};
pub use prompt::{Answer, Prompt, PromptKind, PromptOptions};
pub use prompter::{LinePrompter, Prompter, StubPrompter};
pub use responder::{
    respond_bool, respond_default, respond_error, respond_string, respond_strings, Responder,
};
pub use streams::IoStreams;

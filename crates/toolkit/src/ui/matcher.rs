// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::prompt::{Prompt, PromptKind};
use std::sync::Arc;

/// Predicate over prompts.
pub type Matcher = clikit_stub::Matcher<Prompt>;

/// Matches any prompt.
pub fn match_any() -> Matcher {
    Arc::new(|_: &Prompt| true)
}

fn match_kind(kind: PromptKind, message: impl Into<String>) -> Matcher {
    let message = message.into();
    Arc::new(move |p: &Prompt| p.kind == kind && p.message == message)
}

/// Matches confirm prompts with exactly `message`.
pub fn match_confirm(message: impl Into<String>) -> Matcher {
    match_kind(PromptKind::Confirm, message)
}

/// Matches input prompts with exactly `message`.
pub fn match_input(message: impl Into<String>) -> Matcher {
    match_kind(PromptKind::Input, message)
}

/// Matches multi-select prompts with exactly `message`.
pub fn match_multi_select(message: impl Into<String>) -> Matcher {
    match_kind(PromptKind::MultiSelect, message)
}

/// Matches select prompts with exactly `message`.
pub fn match_select(message: impl Into<String>) -> Matcher {
    match_kind(PromptKind::Select, message)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;

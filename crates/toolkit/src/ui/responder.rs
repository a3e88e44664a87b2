// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::error::UiError;
use super::prompt::{Answer, Prompt};
use std::sync::Arc;

/// Produces stubbed prompt answers.
pub type Responder = clikit_stub::Responder<Prompt, Answer, UiError>;

pub fn respond_bool(answer: bool) -> Responder {
    Arc::new(move |_: &Prompt| -> Result<Answer, UiError> { Ok(Answer::Bool(answer)) })
}

pub fn respond_string(answer: impl Into<String>) -> Responder {
    let answer = answer.into();
    Arc::new(move |_: &Prompt| -> Result<Answer, UiError> { Ok(Answer::String(answer.clone())) })
}

pub fn respond_strings<I, S>(answers: I) -> Responder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let answers: Vec<String> = answers.into_iter().map(Into::into).collect();
    Arc::new(move |_: &Prompt| -> Result<Answer, UiError> { Ok(Answer::Strings(answers.clone())) })
}

/// Fails the prompt with `message`.
pub fn respond_error(message: impl Into<String>) -> Responder {
    let message = message.into();
    Arc::new(move |_: &Prompt| -> Result<Answer, UiError> {
        Err(UiError::Custom(message.clone()))
    })
}

/// Answers with the prompt's own default.
pub fn respond_default() -> Responder {
    Arc::new(|p: &Prompt| -> Result<Answer, UiError> { Ok(p.default.clone()) })
}

#[cfg(test)]
#[path = "responder_tests.rs"]
mod tests;

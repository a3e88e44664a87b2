// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clikit_stub::StubError;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by HTTP clients, transports and responders.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid BaseURL: '{0}'")]
    InvalidBaseUrl(String),

    #[error("invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-2xx response from a REST call.
    #[error("HTTP {}: {message}", .status.as_u16())]
    Status {
        status: StatusCode,
        message: String,
        body: Vec<u8>,
    },

    /// Error scripted by a responder.
    #[error("{0}")]
    Custom(String),

    #[error(transparent)]
    Stub(#[from] StubError),
}

impl HttpError {
    pub(crate) fn invalid_url(url: &str, source: url::ParseError) -> Self {
        HttpError::InvalidUrl {
            url: url.to_string(),
            source,
        }
    }
}

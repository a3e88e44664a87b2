// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Canned responses for stubbed transports.

use super::error::HttpError;
use super::message::{Request, Response};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::StatusCode;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Produces the response for a matched request
pub type Responder = clikit_stub::Responder<Request, Response, HttpError>;

/// Responds with an error built from `message`
pub fn error_response(message: impl Into<String>) -> Responder {
    let message = message.into();
    Arc::new(move |_: &Request| -> Result<Response, HttpError> {
        Err(HttpError::Custom(message.clone()))
    })
}

/// Responds with the contents of a file, read when the stub is used
pub fn file_response(path: impl Into<PathBuf>) -> Responder {
    let path = path.into();
    Arc::new(move |_: &Request| -> Result<Response, HttpError> {
        let body = std::fs::read(&path)?;
        Ok(Response::ok(body))
    })
}

/// Responds with `data` serialized as JSON
pub fn json_response<T>(data: T) -> Responder
where
    T: Serialize + Send + Sync + 'static,
{
    Arc::new(move |_: &Request| -> Result<Response, HttpError> {
        let body = serde_json::to_vec(&data)?;
        Ok(Response::ok(body))
    })
}

/// Responds with a 200 and the given body
pub fn string_response(body: impl Into<String>) -> Responder {
    let body = body.into();
    Arc::new(move |_: &Request| -> Result<Response, HttpError> {
        Ok(Response::ok(body.clone()))
    })
}

/// Adds a header to whatever `responder` returns
pub fn with_header(name: HeaderName, value: HeaderValue, responder: Responder) -> Responder {
    Arc::new(move |req: &Request| -> Result<Response, HttpError> {
        let mut resp = responder(req)?;
        resp.headers.insert(name.clone(), value.clone());
        Ok(resp)
    })
}

/// Echoes every request header back as a response header
pub fn with_request_headers(responder: Responder) -> Responder {
    Arc::new(move |req: &Request| -> Result<Response, HttpError> {
        let mut resp = responder(req)?;
        resp.headers = req.headers.clone();
        Ok(resp)
    })
}

/// Overrides the status code of whatever `responder` returns
pub fn with_status(status: StatusCode, responder: Responder) -> Responder {
    Arc::new(move |req: &Request| -> Result<Response, HttpError> {
        let mut resp = responder(req)?;
        resp.status = status;
        Ok(resp)
    })
}

#[cfg(test)]
#[path = "responder_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking HTTP client with pluggable stubbing.

mod client;
mod error;
mod headers;
mod matcher;
mod message;
mod responder;
mod rest;
mod transport;

pub use client::{Client, ClientOptions};
pub use error::HttpError;
pub use matcher::{
    match_any, match_delete, match_get, match_patch, match_post, match_put, match_request,
    match_request_query, Matcher,
};
pub use message::{Request, Response};
pub use reqwest::header;
pub use reqwest::{Method, StatusCode};
pub use responder::{
    error_response, file_response, json_response, string_response, with_header,
    with_request_headers, with_status, Responder,
};
pub use rest::RestClient;
pub use transport::{ReqwestTransport, StubTransport, Transport};
pub use url::Url;

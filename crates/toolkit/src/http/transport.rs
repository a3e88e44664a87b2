// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transports that turn a [`Request`] into a [`Response`].

use super::error::HttpError;
use super::matcher::Matcher;
use super::message::{Request, Response};
use super::responder::Responder;
use clikit_stub::{Reporter, StubId, StubRegistry};
use std::time::Duration;

/// Mechanism by which a single request is performed.
pub trait Transport: Send + Sync {
    fn round_trip(&self, request: Request) -> Result<Response, HttpError>;
}

/// Real network transport backed by a blocking reqwest client.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Create a transport; `None` means no timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, HttpError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for ReqwestTransport {
    fn round_trip(&self, request: Request) -> Result<Response, HttpError> {
        let Request {
            method,
            url,
            headers,
            body,
        } = request;

        let resp = self
            .client
            .request(method, url)
            .headers(headers)
            .body(body)
            .send()?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes()?.to_vec();
        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

/// Transport that serves registered stubs instead of touching the network.
#[derive(Debug, Default)]
pub struct StubTransport {
    registry: StubRegistry<Request, Response, HttpError>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
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

    /// Requests served by a stub, in order
    pub fn requests(&self) -> Vec<Request> {
        self.registry.dispatched()
    }
}

impl Transport for StubTransport {
    fn round_trip(&self, request: Request) -> Result<Response, HttpError> {
        self.registry.dispatch(&request)
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP client that supports stubbing.

use super::error::HttpError;
use super::headers::HeaderInjector;
use super::matcher::Matcher;
use super::message::{Request, Response};
use super::responder::Responder;
use super::transport::{ReqwestTransport, StubTransport, Transport};
use crate::env;
use clikit_stub::{Reporter, StubError, StubId};
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;

/// Options for configuring new clients
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// Token sent as `Authorization: Bearer <token>` to the base URL's host.
    pub auth_token: Option<String>,

    /// Base URL for relative API requests.
    pub base_url: Option<String>,

    /// Headers sent with every request unless already set.
    pub headers: Vec<(String, String)>,

    /// Time limit for each request. Default is no timeout.
    pub timeout: Option<Duration>,

    /// Mechanism performing requests. Default is a reqwest transport.
    pub transport: Option<Arc<dyn Transport>>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options seeded from `CLIKIT_HTTP_TIMEOUT_MS` and `CLIKIT_API_TOKEN`
    pub fn from_env() -> Self {
        Self {
            auth_token: env::api_token(),
            timeout: env::http_timeout_ms().map(Duration::from_millis),
            ..Self::default()
        }
    }

    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub(crate) fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOptions")
            .field("base_url", &self.base_url)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("headers", &self.headers)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
enum Mode {
    Live(Arc<dyn Transport>),
    Stub(Arc<StubTransport>),
}

/// Blocking HTTP client; see [`Client::enable_stubbing`] for tests.
///
/// Configured headers are injected before the transport sees a request,
/// in stub mode as well, so stubs observe the final request.
#[derive(Clone)]
pub struct Client {
    mode: Mode,
    injector: HeaderInjector,
}

impl Client {
    /// Create a client with default options
    pub fn new() -> Result<Self, HttpError> {
        Self::with_options(ClientOptions::default())
    }

    /// Create a client configured with `options`
    pub fn with_options(options: ClientOptions) -> Result<Self, HttpError> {
        let injector = HeaderInjector::new(
            options.base_url.as_deref(),
            options.auth_token.as_deref(),
            &options.headers,
        )?;
        let transport = match options.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(options.timeout)?),
        };
        Ok(Self {
            mode: Mode::Live(transport),
            injector,
        })
    }

    /// Perform a request
    pub fn execute(&self, mut request: Request) -> Result<Response, HttpError> {
        self.injector.apply(&mut request);
        tracing::debug!(method = %request.method, url = %request.url, "http request");
        match &self.mode {
            Mode::Live(transport) => transport.round_trip(request),
            Mode::Stub(transport) => transport.round_trip(request),
        }
    }

    /// Perform a GET request against an absolute URL
    pub fn get(&self, url: &str) -> Result<Response, HttpError> {
        self.execute(Request::parse(Method::GET, url)?)
    }

    /// Returns true if the client is configured for stubbing
    pub fn is_stubbing(&self) -> bool {
        matches!(self.mode, Mode::Stub(_))
    }

    /// Switch to a stub transport; a no-op when already stubbing
    pub fn enable_stubbing(&mut self) -> &mut Self {
        if !self.is_stubbing() {
            self.mode = Mode::Stub(Arc::new(StubTransport::new()));
        }
        self
    }

    /// Register a new stub for the given matcher/responder pair.
    ///
    /// # Panics
    ///
    /// Panics if stubbing has not been enabled.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn register_stub(&self, matcher: Matcher, responder: Responder) -> &Self {
        if let Err(err) = self.try_register_stub(matcher, responder) {
            panic!("{}", err);
        }
        self
    }

    /// Register a new stub, or [`StubError::NotStubbing`] outside stub mode
    pub fn try_register_stub(
        &self,
        matcher: Matcher,
        responder: Responder,
    ) -> Result<StubId, StubError> {
        match &self.mode {
            Mode::Stub(transport) => Ok(transport.register_stub(matcher, responder)),
            Mode::Live(_) => Err(StubError::NotStubbing),
        }
    }

    /// Fail the test if there are unmatched stubs.
    ///
    /// # Panics
    ///
    /// Panics if stubbing has not been enabled.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn verify_stubs<T: Reporter + ?Sized>(&self, reporter: &mut T) {
        match &self.mode {
            Mode::Stub(transport) => transport.verify_stubs(reporter),
            Mode::Live(_) => panic!("must enable stubbing before verifying stubs"),
        }
    }

    /// Requests served by stubs, in order; empty outside stub mode
    pub fn requests(&self) -> Vec<Request> {
        match &self.mode {
            Mode::Stub(transport) => transport.requests(),
            Mode::Live(_) => Vec::new(),
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("stubbing", &self.is_stubbing())
            .field("injector", &self.injector)
            .finish()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

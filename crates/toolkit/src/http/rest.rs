// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON REST client built on [`Client`].

use super::client::{Client, ClientOptions};
use super::error::HttpError;
use super::matcher::Matcher;
use super::message::{Request, Response};
use super::responder::Responder;
use clikit_stub::Reporter;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::TypeId;
use url::Url;

const ACCEPT_JSON: &str = "application/json, text/*;q=0.9, */*;q=0.8";
const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Client for HTTP APIs that speak JSON.
///
/// Paths are resolved against the base URL; absolute `http://` or
/// `https://` URLs are used as-is and only receive the auth token when
/// they share the base URL's domain.
#[derive(Clone, Debug)]
pub struct RestClient {
    client: Client,
    base_url: Url,
}

impl RestClient {
    /// Create a client; `options.base_url` must be an absolute URL.
    pub fn new(mut options: ClientOptions) -> Result<Self, HttpError> {
        let raw = options.base_url.clone().unwrap_or_default();
        let base_url = Url::parse(&raw).map_err(|_| HttpError::InvalidBaseUrl(raw.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(HttpError::InvalidBaseUrl(raw));
        }
        options.base_url = Some(base_url.to_string());

        if !options.has_header(ACCEPT.as_str()) {
            options = options.header(ACCEPT.as_str(), ACCEPT_JSON);
        }
        if !options.has_header(CONTENT_TYPE.as_str()) {
            options = options.header(CONTENT_TYPE.as_str(), CONTENT_TYPE_JSON);
        }

        Ok(Self {
            client: Client::with_options(options)?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Underlying HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn enable_stubbing(&mut self) -> &mut Self {
        self.client.enable_stubbing();
        self
    }

    pub fn is_stubbing(&self) -> bool {
        self.client.is_stubbing()
    }

    /// See [`Client::register_stub`]
    #[track_caller]
    pub fn register_stub(&self, matcher: Matcher, responder: Responder) -> &Self {
        self.client.register_stub(matcher, responder);
        self
    }

    /// See [`Client::verify_stubs`]
    #[track_caller]
    pub fn verify_stubs<T: Reporter + ?Sized>(&self, reporter: &mut T) {
        self.client.verify_stubs(reporter);
    }

    /// Perform a request, failing on any non-2xx status.
    ///
    /// `body` is serialized as JSON when present.
    pub fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = Request::new(method, self.abs(path)?);
        if let Some(body) = body {
            request = request.with_json(body)?;
        }

        let resp = self.client.execute(request)?;
        if !resp.is_success() {
            return Err(HttpError::Status {
                status: resp.status,
                message: "received unsuccessful response".to_string(),
                body: resp.body,
            });
        }
        Ok(resp)
    }

    /// Perform a request and decode the JSON response.
    ///
    /// A `()` response ignores the body. A 204 or empty body decodes as
    /// JSON `null`, so `Option<T>` responses accept it.
    pub fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + 'static,
    {
        let resp = self.send(method, path, body)?;
        decode(&resp)
    }

    pub fn delete<T: DeserializeOwned + 'static>(&self, path: &str) -> Result<T, HttpError> {
        self.request::<(), T>(Method::DELETE, path, None)
    }

    pub fn get<T: DeserializeOwned + 'static>(&self, path: &str) -> Result<T, HttpError> {
        self.request::<(), T>(Method::GET, path, None)
    }

    pub fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + 'static,
    {
        self.request(Method::PATCH, path, Some(body))
    }

    pub fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + 'static,
    {
        self.request(Method::POST, path, Some(body))
    }

    pub fn put<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + 'static,
    {
        self.request(Method::PUT, path, Some(body))
    }

    fn abs(&self, path: &str) -> Result<Url, HttpError> {
        let full = if path.starts_with("https://") || path.starts_with("http://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.as_str().trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        };
        Url::parse(&full).map_err(|e| HttpError::invalid_url(&full, e))
    }
}

fn decode<T: DeserializeOwned + 'static>(resp: &Response) -> Result<T, HttpError> {
    let unit = TypeId::of::<T>() == TypeId::of::<()>();
    let empty = resp.body.iter().all(u8::is_ascii_whitespace);
    if unit || resp.status == StatusCode::NO_CONTENT || empty {
        return Ok(serde_json::from_slice(b"null")?);
    }
    resp.json()
}

#[cfg(test)]
#[path = "rest_tests.rs"]
mod tests;

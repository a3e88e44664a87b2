// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default header injection.

use super::error::HttpError;
use super::message::Request;
use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION};
use url::Url;

/// Adds configured headers to outgoing requests.
///
/// `Authorization` is only sent to the configured host and its subdomains.
/// Headers already present on a request are left alone.
#[derive(Clone, Debug, Default)]
pub(crate) struct HeaderInjector {
    headers: Vec<(HeaderName, HeaderValue)>,
    host: Option<String>,
}

impl HeaderInjector {
    pub(crate) fn new(
        base_url: Option<&str>,
        auth_token: Option<&str>,
        headers: &[(String, String)],
    ) -> Result<Self, HttpError> {
        let mut parsed = Vec::with_capacity(headers.len() + 1);
        for (name, value) in headers {
            parsed.push(parse_header(name, value)?);
        }

        let has_auth = parsed.iter().any(|(name, _)| *name == AUTHORIZATION);
        if let Some(token) = auth_token.filter(|t| !t.is_empty()) {
            if !has_auth {
                let (name, mut value) =
                    parse_header(AUTHORIZATION.as_str(), &format!("Bearer {}", token))?;
                value.set_sensitive(true);
                parsed.push((name, value));
            }
        }

        let host = match base_url {
            Some(base) if !parsed.is_empty() => {
                let url = Url::parse(base).map_err(|_| HttpError::InvalidBaseUrl(base.into()))?;
                let host = url
                    .host_str()
                    .ok_or_else(|| HttpError::InvalidBaseUrl(base.into()))?;
                Some(host.to_string())
            }
            _ => None,
        };

        Ok(Self {
            headers: parsed,
            host,
        })
    }

    pub(crate) fn apply(&self, request: &mut Request) {
        for (name, value) in &self.headers {
            if *name == AUTHORIZATION && !self.trusts(&request.url) {
                continue;
            }
            let already_set = request
                .headers
                .get(name)
                .is_some_and(|v| !v.as_bytes().is_empty());
            if already_set {
                continue;
            }
            request.headers.insert(name.clone(), value.clone());
        }
    }

    fn trusts(&self, url: &Url) -> bool {
        match (self.host.as_deref(), url.host_str()) {
            (Some(domain), Some(hostname)) => is_same_or_subdomain(hostname, domain),
            _ => false,
        }
    }
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), HttpError> {
    let invalid = |reason: String| HttpError::InvalidHeader {
        name: name.to_string(),
        reason,
    };
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
    let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
    Ok((header_name, header_value))
}

fn is_same_or_subdomain(hostname: &str, domain: &str) -> bool {
    if hostname.eq_ignore_ascii_case(domain) {
        return true;
    }
    hostname
        .to_ascii_lowercase()
        .ends_with(&format!(".{}", domain.to_ascii_lowercase()))
}

#[cfg(test)]
#[path = "headers_tests.rs"]
mod tests;

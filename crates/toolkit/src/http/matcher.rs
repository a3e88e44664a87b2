// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request matchers for stubbed transports.

use super::message::Request;
use reqwest::Method;
use std::sync::Arc;

/// Predicate over outgoing requests
pub type Matcher = clikit_stub::Matcher<Request>;

/// Matches any request
pub fn match_any() -> Matcher {
    Arc::new(|_: &Request| true)
}

pub fn match_delete(path: &str) -> Matcher {
    match_request(Method::DELETE, path)
}

pub fn match_get(path: &str) -> Matcher {
    match_request(Method::GET, path)
}

pub fn match_patch(path: &str) -> Matcher {
    match_request(Method::PATCH, path)
}

pub fn match_post(path: &str) -> Matcher {
    match_request(Method::POST, path)
}

pub fn match_put(path: &str) -> Matcher {
    match_request(Method::PUT, path)
}

/// Matches on method (case-insensitive) and escaped path.
pub fn match_request(method: Method, path: &str) -> Matcher {
    let path = path.to_string();
    Arc::new(move |req: &Request| is_request(req, &method, &path))
}

/// Matches on method, path, and query parameters.
///
/// Each expected parameter must equal the first value of that parameter on
/// the request; a missing parameter reads as empty. Extra parameters on the
/// request are ignored.
pub fn match_request_query(method: Method, path: &str, query: &[(&str, &str)]) -> Matcher {
    let path = path.to_string();
    let query: Vec<(String, String)> = query
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Arc::new(move |req: &Request| {
        if !is_request(req, &method, &path) {
            return false;
        }
        query.iter().all(|(name, expected)| {
            let actual = req
                .url
                .query_pairs()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default();
            actual == *expected
        })
    })
}

fn is_request(req: &Request, method: &Method, path: &str) -> bool {
    req.method.as_str().eq_ignore_ascii_case(method.as_str()) && req.url.path() == path
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;

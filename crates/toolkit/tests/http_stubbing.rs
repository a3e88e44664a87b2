// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end HTTP stubbing through the public clients.

use clikit::http::{
    self, header, json_response, match_get, match_post, with_request_headers, with_status,
    ClientOptions, HttpError, Method, Request, RestClient, StatusCode,
};
use clikit::stub::{Failures, PanicReporter};
use rstest::{fixture, rstest};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize, Serialize, PartialEq)]
struct Repo {
    name: String,
    private: bool,
}

#[fixture]
fn rest() -> RestClient {
    let mut client = RestClient::new(
        ClientOptions::new()
            .base_url("https://api.example.com/v1")
            .auth_token("s3cret"),
    )
    .unwrap();
    client.enable_stubbing();
    client
}

// =============================================================================
// Plain Client
// =============================================================================

#[test]
fn test_get_foo_returns_stubbed_body() {
    let mut client = http::Client::new().unwrap();
    client.enable_stubbing();
    client.register_stub(match_get("/foo"), json_response(json!({"foo": true})));

    let resp = client.get("https://example.com/foo").unwrap();
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.text(), r#"{"foo":true}"#);

    client.verify_stubs(&mut PanicReporter);
}

#[test]
fn test_auth_header_only_sent_to_base_host() {
    let mut client = http::Client::with_options(
        ClientOptions::new()
            .base_url("https://api.example.com")
            .auth_token("s3cret")
            .header("X-Client", "clikit"),
    )
    .unwrap();
    client.enable_stubbing();
    client.register_stub(match_get("/same"), with_request_headers(http::string_response("")));
    client.register_stub(match_get("/other"), with_request_headers(http::string_response("")));

    let same = client.get("https://uploads.api.example.com/same").unwrap();
    let other = client.get("https://evil.example.org/other").unwrap();

    assert_eq!(same.header("authorization"), Some("Bearer s3cret"));
    assert_eq!(other.header("authorization"), None);
    assert_eq!(other.header("x-client"), Some("clikit"));
}

// =============================================================================
// REST Client
// =============================================================================

#[rstest]
fn test_rest_round_trip(rest: RestClient) {
    rest.register_stub(
        match_get("/v1/repos/clikit"),
        json_response(Repo {
            name: "clikit".into(),
            private: false,
        }),
    );
    rest.register_stub(
        match_post("/v1/repos"),
        with_status(StatusCode::CREATED, json_response(json!({"name": "new", "private": true}))),
    );

    let repo: Repo = rest.get("repos/clikit").unwrap();
    assert_eq!(repo.name, "clikit");

    let created: Repo = rest
        .post(
            "/repos",
            &Repo {
                name: "new".into(),
                private: true,
            },
        )
        .unwrap();
    assert!(created.private);

    let requests = rest.client().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, Method::POST);
    assert_eq!(
        requests[1].header(header::CONTENT_TYPE.as_str()),
        Some("application/json; charset=utf-8")
    );

    rest.verify_stubs(&mut PanicReporter);
}

#[rstest]
fn test_rest_error_status(rest: RestClient) {
    rest.register_stub(
        match_get("/v1/missing"),
        with_status(StatusCode::NOT_FOUND, http::string_response("nope")),
    );

    let err = rest.get::<serde_json::Value>("missing").unwrap_err();
    match err {
        HttpError::Status { status, ref body, .. } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, b"nope");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn test_rest_unmatched_and_exhausted(rest: RestClient) {
    rest.register_stub(match_get("/v1/ping"), json_response(json!(null)));

    let err = rest.get::<serde_json::Value>("pong").unwrap_err();
    assert!(err
        .to_string()
        .contains("no registered stubs matching: GET https://api.example.com/v1/pong"));

    rest.get::<serde_json::Value>("ping").unwrap();
    let err = rest.get::<serde_json::Value>("ping").unwrap_err();
    assert!(err.to_string().contains("wanted 2 of only 1 stubs matching"));
}

#[rstest]
fn test_unused_stub_is_reported(rest: RestClient) {
    rest.register_stub(match_get("/v1/never"), json_response(json!({})));

    let mut failures = Failures::new();
    rest.verify_stubs(&mut failures);
    assert_eq!(failures.messages(), ["found 1 unmatched stub(s)"]);
}

#[test]
fn test_execute_custom_request() {
    let mut client = http::Client::new().unwrap();
    client.enable_stubbing();
    client.register_stub(
        http::match_request(Method::DELETE, "/items/1"),
        with_status(StatusCode::NO_CONTENT, http::string_response("")),
    );

    let req = Request::parse(Method::DELETE, "https://example.com/items/1").unwrap();
    let resp = client.execute(req).unwrap();
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
}

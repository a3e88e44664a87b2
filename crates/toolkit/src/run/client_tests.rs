// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::run::{match_any, match_regexp, regexp_response, string_response};
use clikit_stub::{Failures, PanicReporter};

#[test]
fn test_command_builds_cmd() {
    let client = Client::new();
    let cmd = client.command("/bin/echo", ["foo", "bar"]);
    assert_eq!(cmd.program(), "/bin/echo");
    assert_eq!(cmd.get_args(), ["foo", "bar"]);
}

#[test]
fn test_stubbing_methods() {
    let mut client = Client::new();
    assert!(!client.is_stubbing());

    client.enable_stubbing();
    assert!(client.is_stubbing());

    client.register_stub(match_any(), string_response("x"));
    client.enable_stubbing();
    let mut failures = Failures::new();
    client.verify_stubs(&mut failures);
    assert_eq!(failures.messages(), ["found 1 unmatched stub(s)"]);
}

#[test]
#[should_panic(expected = "must enable stubbing before registering stubs")]
fn test_register_stub_before_enabling_panics() {
    Client::new().register_stub(match_any(), string_response(""));
}

#[test]
#[should_panic(expected = "must enable stubbing before verifying stubs")]
fn test_verify_stubs_before_enabling_panics() {
    Client::new().verify_stubs(&mut PanicReporter);
}

#[test]
fn test_try_register_stub_before_enabling() {
    let err = Client::new()
        .try_register_stub(match_any(), string_response(""))
        .unwrap_err();
    assert_eq!(err, StubError::NotStubbing);
}

#[test]
fn test_stubbed_run() {
    let mut client = Client::new();
    client.enable_stubbing();
    client.register_stub(match_any(), string_response(""));

    let mut cmd = client.command("/bin/echo", Vec::<String>::new());
    client.run(&mut cmd).unwrap();
    client.verify_stubs(&mut PanicReporter);
}

#[test]
fn test_clones_share_stubs() {
    let mut client = Client::new();
    client.enable_stubbing();
    let clone = client.clone();
    client.register_stub(
        match_regexp(r"^git rev-parse").unwrap(),
        regexp_response(r"rev-parse (\w+)$", 1).unwrap(),
    );

    let mut cmd = clone.command("git", ["rev-parse", "HEAD"]);
    assert_eq!(clone.output(&mut cmd).unwrap(), b"HEAD");
    assert_eq!(client.commands()[0].to_string(), "git rev-parse HEAD");
}

#[test]
fn test_commands_empty_when_live() {
    assert!(Client::new().commands().is_empty());
    assert_eq!(format!("{:?}", Client::default()), "Client { stubbing: false }");
}

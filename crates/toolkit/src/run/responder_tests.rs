// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_error_response() {
    let err = error_response("boom")(&Cmd::new("/bin/echo")).unwrap_err();
    assert!(matches!(err, RunError::Custom(_)));
    assert_eq!(err.to_string(), "boom");
}

#[test]
fn test_exit_response() {
    let err = exit_response(2, "usage")(&Cmd::new("tar")).unwrap_err();
    assert_eq!(err.exit_code(), Some(2));
    match err {
        RunError::Exit(exit) => assert_eq!(exit.stderr(), b"usage"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_regexp_response() {
    let cmd = Cmd::new("/bin/echo").arg("something");
    let responder = regexp_response(r"echo\s+(\w+)$", 1).unwrap();
    assert_eq!(responder(&cmd).unwrap(), Output::new("something"));
}

#[test]
fn test_regexp_response_invalid_index() {
    let cmd = Cmd::new("/bin/echo").arg("something");
    let responder = regexp_response(r"echo\s+(\w+)$", 2).unwrap();
    let err = responder(&cmd).unwrap_err();
    assert_eq!(
        err.to_string(),
        r"invalid match: cmd='/bin/echo something', pattern='echo\s+(\w+)$', index='2'"
    );
}

#[test]
fn test_regexp_response_no_match() {
    let cmd = Cmd::new("/bin/true");
    let responder = regexp_response(r"echo\s+(\w+)$", 0).unwrap();
    assert!(matches!(
        responder(&cmd).unwrap_err(),
        RunError::InvalidMatch { index: 0, .. }
    ));
}

#[test]
fn test_regexp_response_optional_group() {
    let cmd = Cmd::new("ls");
    let responder = regexp_response(r"^ls( -l)?$", 1).unwrap();
    assert_eq!(responder(&cmd).unwrap(), Output::new(""));
}

#[test]
fn test_string_response() {
    let out = string_response("foo")(&Cmd::new("/bin/echo")).unwrap();
    assert_eq!(out.stdout, b"foo");
    assert!(out.stderr.is_empty());
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::reporter::Failures;
use proptest::prelude::*;
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

#[derive(Debug)]
struct Call(String);

impl Call {
    fn new(name: &str) -> Self {
        Call(name.to_string())
    }
}

impl Invocation for Call {
    type Record = String;

    fn describe(&self) -> String {
        self.0.clone()
    }

    fn record(&self) -> String {
        self.0.clone()
    }
}

type Registry = StubRegistry<Call, String>;

fn named(name: &'static str) -> Matcher<Call> {
    Arc::new(move |call: &Call| call.0 == name)
}

fn reply(text: &'static str) -> Responder<Call, String, StubError> {
    Arc::new(move |_: &Call| -> Result<String, StubError> { Ok(text.to_string()) })
}

#[test]
fn test_dispatch_in_registration_order() {
    let registry = Registry::new();
    registry.register(named("/bin/date"), reply("Sun Nov 13 22:00:00 CST 2022"));
    registry.register(named("/bin/date"), reply("Sun Nov 13 22:05:00 CST 2022"));

    let err = registry.dispatch(&Call::new("/bin/echo")).unwrap_err();
    assert_eq!(err.to_string(), "no registered stubs matching: /bin/echo");

    assert_eq!(
        registry.dispatch(&Call::new("/bin/date")).unwrap(),
        "Sun Nov 13 22:00:00 CST 2022"
    );
    assert_eq!(
        registry.dispatch(&Call::new("/bin/date")).unwrap(),
        "Sun Nov 13 22:05:00 CST 2022"
    );

    let err = registry.dispatch(&Call::new("/bin/date")).unwrap_err();
    assert_eq!(
        err,
        StubError::ExhaustedStubs {
            wanted: 3,
            available: 2,
            invocation: "/bin/date".to_string(),
        }
    );
    assert!(err
        .to_string()
        .contains("wanted 3 of only 2 stubs matching: /bin/date"));
}

#[test]
fn test_no_match_leaves_log_unchanged() {
    let registry = Registry::new();
    registry.register(named("a"), reply("A"));

    registry.dispatch(&Call::new("a")).unwrap();
    let before = registry.dispatched();

    let err = registry.dispatch(&Call::new("b")).unwrap_err();
    assert!(matches!(err, StubError::NoStubMatched { .. }));
    assert_eq!(registry.dispatched(), before);
}

#[test]
fn test_only_selected_stub_is_consumed() {
    let registry = Registry::new();
    let first = registry.register(Arc::new(|_: &Call| true), reply("any"));
    let second = registry.register(named("x"), reply("x"));

    assert_eq!(registry.dispatch(&Call::new("x")).unwrap(), "any");
    assert!(registry.is_consumed(first));
    assert!(!registry.is_consumed(second));

    assert_eq!(registry.dispatch(&Call::new("x")).unwrap(), "x");
    assert!(registry.is_consumed(second));
}

#[test]
fn test_every_matcher_is_consulted() {
    let registry = Registry::new();
    let calls = Arc::new(AtomicUsize::new(0));
    for _ in 0..3 {
        let calls = Arc::clone(&calls);
        registry.register(
            Arc::new(move |_: &Call| {
                calls.fetch_add(1, Ordering::SeqCst);
                true
            }),
            reply("ok"),
        );
    }

    registry.dispatch(&Call::new("x")).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_responder_error_still_consumes() {
    let registry = Registry::new();
    let id = registry.register(
        named("x"),
        Arc::new(|call: &Call| -> Result<String, StubError> {
            Err(StubError::NoStubMatched {
                invocation: format!("inner {}", call.0),
            })
        }),
    );

    let err = registry.dispatch(&Call::new("x")).unwrap_err();
    assert_eq!(err.to_string(), "no registered stubs matching: inner x");
    assert!(registry.is_consumed(id));
    assert_eq!(registry.dispatched(), vec!["x".to_string()]);
}

#[test]
fn test_responder_may_dispatch_recursively() {
    let registry = Arc::new(Registry::new());
    let inner = Arc::clone(&registry);
    registry.register(
        named("outer"),
        Arc::new(move |_: &Call| -> Result<String, StubError> {
            let nested = inner.dispatch(&Call::new("inner"))?;
            Ok(format!("outer+{}", nested))
        }),
    );
    registry.register(named("inner"), reply("inner"));

    assert_eq!(
        registry.dispatch(&Call::new("outer")).unwrap(),
        "outer+inner"
    );
    assert_eq!(
        registry.dispatched(),
        vec!["outer".to_string(), "inner".to_string()]
    );
}

#[derive(Debug, PartialEq)]
enum DomainError {
    Stub(StubError),
}

impl From<StubError> for DomainError {
    fn from(err: StubError) -> Self {
        DomainError::Stub(err)
    }
}

#[test]
fn test_errors_convert_into_domain_error() {
    let registry: StubRegistry<Call, String, DomainError> = StubRegistry::new();
    let err = registry.dispatch(&Call::new("x")).unwrap_err();
    assert_eq!(
        err,
        DomainError::Stub(StubError::NoStubMatched {
            invocation: "x".to_string()
        })
    );
}

#[test]
fn test_verify_when_no_stubs() {
    let registry = Registry::new();
    let mut failures = Failures::new();

    registry.verify(&mut failures);

    assert!(failures.helper_called());
    assert!(failures.is_empty());
}

#[test]
fn test_verify_when_all_stubs_matched() {
    let registry = Registry::new();
    registry.register(named("/bin/echo"), reply(""));
    registry.dispatch(&Call::new("/bin/echo")).unwrap();

    let mut failures = Failures::new();
    registry.verify(&mut failures);

    assert!(failures.helper_called());
    assert!(failures.is_empty());
}

#[rstest]
#[case(1, 0, "found 1 unmatched stub(s)")]
#[case(3, 1, "found 2 unmatched stub(s)")]
#[case(5, 0, "found 5 unmatched stub(s)")]
fn test_verify_reports_unmatched(
    #[case] registered: usize,
    #[case] used: usize,
    #[case] expected: &str,
) {
    let registry = Registry::new();
    for _ in 0..registered {
        registry.register(named("x"), reply("x"));
    }
    for _ in 0..used {
        registry.dispatch(&Call::new("x")).unwrap();
    }

    let mut failures = Failures::new();
    registry.verify(&mut failures);
    assert_eq!(failures.messages(), [expected]);

    // Verification is read-only
    let mut again = Failures::new();
    registry.verify(&mut again);
    assert_eq!(again.messages(), [expected]);
    assert_eq!(registry.unmatched(), registered - used);
}

#[test]
fn test_concurrent_dispatch_consumes_each_stub_once() {
    let registry = Arc::new(Registry::new());
    for i in 0..64 {
        let text = format!("reply {}", i);
        registry.register(
            Arc::new(|_: &Call| true),
            Arc::new(move |_: &Call| -> Result<String, StubError> { Ok(text.clone()) }),
        );
    }

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                (0..10)
                    .filter_map(|_| registry.dispatch(&Call::new("x")).ok())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut served: Vec<String> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    served.sort();
    served.dedup();

    assert_eq!(served.len(), 64);
    assert_eq!(registry.dispatched().len(), 64);
    assert_eq!(registry.unmatched(), 0);
}

#[test]
fn test_debug_shows_counts() {
    let registry = Registry::new();
    registry.register(named("x"), reply("x"));
    let debug = format!("{:?}", registry);
    assert!(debug.contains("stubs: 1"));
    assert!(debug.contains("consumed: 0"));
}

proptest! {
    #[test]
    fn prop_first_stub_serves_then_exhausts(others in 0usize..5, calls in 1usize..8) {
        let registry = Registry::new();
        let first = registry.register(named("s1"), reply("s1"));
        let rest: Vec<_> = (0..others)
            .map(|_| registry.register(named("other"), reply("other")))
            .collect();

        for call in 0..calls {
            let result = registry.dispatch(&Call::new("s1"));
            if call == 0 {
                prop_assert_eq!(result.unwrap(), "s1");
            } else {
                prop_assert_eq!(
                    result.unwrap_err(),
                    StubError::ExhaustedStubs {
                        wanted: 2,
                        available: 1,
                        invocation: "s1".to_string(),
                    }
                );
            }
        }

        prop_assert!(registry.is_consumed(first));
        prop_assert!(rest.iter().all(|id| !registry.is_consumed(*id)));
        prop_assert_eq!(registry.dispatched().len(), 1);
    }

    #[test]
    fn prop_successes_bounded_by_stub_count(stubs in 0usize..6, calls in 0usize..10) {
        let registry = Registry::new();
        for _ in 0..stubs {
            registry.register(named("x"), reply("x"));
        }

        let served = (0..calls)
            .filter(|_| registry.dispatch(&Call::new("x")).is_ok())
            .count();

        prop_assert_eq!(served, stubs.min(calls));
        prop_assert_eq!(registry.unmatched(), stubs - served);
        prop_assert_eq!(registry.dispatched().len(), served);
    }
}

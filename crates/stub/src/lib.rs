// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stub matching and verification for test doubles.
//!
//! A [`StubRegistry`] holds an ordered list of (matcher, responder) pairs.
//! Each dispatched invocation is served by the first registered stub whose
//! matcher accepts it and which has not already served another invocation.
//! At teardown, [`StubRegistry::verify`] reports any stubs that were never
//! used through a [`Reporter`].
//!
//! The registry knows nothing about what it is stubbing. HTTP transports,
//! process executors and interactive prompters each build on it by
//! implementing [`Invocation`] for their own request type.

mod error;
mod registry;
mod reporter;

pub use error::StubError;
pub use registry::{Invocation, Matcher, Responder, StubId, StubRegistry};
pub use reporter::{Failures, PanicReporter, Reporter};

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stub registry implementation.

use crate::error::StubError;
use crate::reporter::Reporter;
use parking_lot::Mutex;
use std::sync::Arc;

/// Predicate deciding whether a stub applies to an invocation.
pub type Matcher<I> = Arc<dyn Fn(&I) -> bool + Send + Sync>;

/// Produces the scripted outcome for a matched invocation.
pub type Responder<I, R, E> = Arc<dyn Fn(&I) -> Result<R, E> + Send + Sync>;

/// Something a [`StubRegistry`] can dispatch on.
pub trait Invocation {
    /// Owned snapshot kept in the dispatched log.
    type Record: Clone + Send;

    /// Human-readable form used in error messages.
    fn describe(&self) -> String;

    /// Snapshot of this invocation for the dispatched log.
    fn record(&self) -> Self::Record;
}

/// Handle to a registered stub.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StubId(usize);

impl StubId {
    /// Position of the stub in registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

struct Stub<I, R, E> {
    matcher: Matcher<I>,
    responder: Responder<I, R, E>,
    consumed: bool,
}

struct State<I: Invocation, R, E> {
    stubs: Vec<Stub<I, R, E>>,
    dispatched: Vec<I::Record>,
}

/// Ordered, consume-once stub registry shared between threads.
pub struct StubRegistry<I: Invocation, R, E = StubError> {
    state: Mutex<State<I, R, E>>,
}

impl<I, R, E> StubRegistry<I, R, E>
where
    I: Invocation,
    E: From<StubError>,
{
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                stubs: Vec::new(),
                dispatched: Vec::new(),
            }),
        }
    }

    /// Append a stub after every previously registered one.
    pub fn register(&self, matcher: Matcher<I>, responder: Responder<I, R, E>) -> StubId {
        let mut state = self.state.lock();
        let id = StubId(state.stubs.len());
        state.stubs.push(Stub {
            matcher,
            responder,
            consumed: false,
        });
        tracing::trace!(stub = id.0, "registered stub");
        id
    }

    /// Route an invocation to the first unconsumed stub that matches it.
    ///
    /// Every matcher is consulted while the registry is locked. The chosen
    /// responder runs after the lock is released, so it may dispatch again.
    pub fn dispatch(&self, invocation: &I) -> Result<R, E> {
        let responder = {
            let mut guard = self.state.lock();
            let state = &mut *guard;

            let mut matches = 0usize;
            let mut selected = None;
            for (idx, stub) in state.stubs.iter().enumerate() {
                if !(stub.matcher)(invocation) {
                    continue;
                }
                matches += 1;
                if !stub.consumed && selected.is_none() {
                    selected = Some(idx);
                }
            }

            let Some(idx) = selected else {
                drop(guard);
                let err = StubError::unserved(matches, invocation.describe());
                tracing::debug!(matches, error = %err, "stub dispatch failed");
                return Err(err.into());
            };

            let stub = &mut state.stubs[idx];
            stub.consumed = true;
            let responder = Arc::clone(&stub.responder);
            state.dispatched.push(invocation.record());
            tracing::debug!(stub = idx, matches, "dispatched to stub");
            responder
        };

        responder(invocation)
    }

    /// Report a failure if any registered stub was never consumed.
    ///
    /// Read-only; calling it repeatedly reports the same result.
    #[track_caller]
    pub fn verify<T: Reporter + ?Sized>(&self, reporter: &mut T) {
        reporter.helper();
        let n = self.unmatched();
        if n > 0 {
            reporter.errorf(format_args!("found {} unmatched stub(s)", n));
        }
    }

    /// Number of stubs not yet consumed
    pub fn unmatched(&self) -> usize {
        self.state
            .lock()
            .stubs
            .iter()
            .filter(|s| !s.consumed)
            .count()
    }

    /// Whether the given stub has served an invocation
    pub fn is_consumed(&self, id: StubId) -> bool {
        self.state
            .lock()
            .stubs
            .get(id.0)
            .is_some_and(|s| s.consumed)
    }

    /// Snapshots of every successfully dispatched invocation, in order.
    pub fn dispatched(&self) -> Vec<I::Record> {
        self.state.lock().dispatched.clone()
    }

    /// Get the total number of registered stubs
    pub fn len(&self) -> usize {
        self.state.lock().stubs.len()
    }

    /// Check if no stubs are registered
    pub fn is_empty(&self) -> bool {
        self.state.lock().stubs.is_empty()
    }
}

impl<I, R, E> Default for StubRegistry<I, R, E>
where
    I: Invocation,
    E: From<StubError>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Invocation, R, E> std::fmt::Debug for StubRegistry<I, R, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("StubRegistry")
            .field("stubs", &state.stubs.len())
            .field(
                "consumed",
                &state.stubs.iter().filter(|s| s.consumed).count(),
            )
            .field("dispatched", &state.dispatched.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

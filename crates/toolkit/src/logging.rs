// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Logging setup for tools built on clikit.

use crate::env;
use tracing_subscriber::EnvFilter;

/// Build the filter from `CLIKIT_LOG`, falling back to `default_directive`.
pub fn filter(default_directive: &str) -> EnvFilter {
    env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive))
}

/// Install a stderr `fmt` subscriber.
///
/// Returns false when a global subscriber was already installed.
pub fn init(default_directive: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default_directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;

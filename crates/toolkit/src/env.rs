// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by clikit are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

/// `CLIKIT_LOG`: Log filter directive (e.g. `clikit=debug`).
pub fn log_filter() -> Option<String> {
    var_non_empty(names::CLIKIT_LOG)
}

/// `CLIKIT_HTTP_TIMEOUT_MS`: Default per-request HTTP timeout.
pub fn http_timeout_ms() -> Option<u64> {
    var_non_empty(names::CLIKIT_HTTP_TIMEOUT_MS).and_then(|v| v.parse().ok())
}

/// `CLIKIT_API_TOKEN`: Fallback bearer token for the configured API host.
pub fn api_token() -> Option<String> {
    var_non_empty(names::CLIKIT_API_TOKEN)
}

fn var_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

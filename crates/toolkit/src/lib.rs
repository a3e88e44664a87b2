// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line toolkit with stubbable collaborators.
//!
//! Each client wraps a real facility and can be switched into stub mode
//! for deterministic tests:
//!
//! - [`http::Client`] / [`http::RestClient`]: blocking HTTP over reqwest
//! - [`run::Client`]: external process execution
//! - [`ui::UserInterface`]: interactive prompts
//!
//! In stub mode every call is routed through a [`stub::StubRegistry`]:
//! the first unconsumed stub whose matcher accepts the call serves it,
//! and `verify_stubs` fails the test if any stub went unused.
//!
//! ```no_run
//! use clikit::run::{self, Client};
//! use clikit::stub::PanicReporter;
//!
//! let mut client = Client::new();
//! client.enable_stubbing();
//! client.register_stub(
//!     run::match_string("git rev-parse HEAD"),
//!     run::string_response("abc123\n"),
//! );
//!
//! let mut cmd = client.command("git", ["rev-parse", "HEAD"]);
//! let out = client.output(&mut cmd)?;
//! assert_eq!(out, b"abc123\n");
//!
//! client.verify_stubs(&mut PanicReporter);
//! # Ok::<(), clikit::run::RunError>(())
//! ```

mod buffer;
pub mod env;
pub mod http;
pub mod logging;
pub mod run;
pub mod ui;

pub use buffer::SharedBuffer;

/// Re-exported stub engine from the clikit-stub crate.
pub mod stub {
    pub use clikit_stub::{
        Failures, Invocation, Matcher, PanicReporter, Reporter, Responder, StubError, StubId,
        StubRegistry,
    };
}

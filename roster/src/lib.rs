//! Student roster parser and reporter.
//!
//! Reads a space-delimited student list, keeps the lines that parse into
//! records, and writes a summary report. The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (line parsing, report rendering).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config loading, reading the input,
//!   atomic report writes).
//!
//! [`run`] coordinates the two for the CLI.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

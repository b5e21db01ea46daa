//! Deterministic, pure logic for roster parsing and reporting.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod parser;
pub mod report;
pub mod types;

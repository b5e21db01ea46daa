//! Stable exit codes for the roster CLI.

/// Report written (individual lines may have been skipped).
pub const OK: i32 = 0;
/// Configuration could not be loaded or validated; nothing was read or written.
pub const INVALID: i32 = 1;
/// Reading the input or writing the report failed.
pub const IO_FAILURE: i32 = 2;

//! Stable exit codes for the optimizer binary.

/// Every target was processed (changed or not).
pub const OK: i32 = 0;
/// A target could not be read or written; the run was aborted.
pub const FAILED: i32 = 1;

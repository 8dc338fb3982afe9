//! One-shot optimizer for GitHub Actions workflow files.
//!
//! Swaps the step that loads infrastructure metadata from
//! `.deployment-info/infrastructure.json` for one that reads the same values
//! from GitHub Variables. The crate keeps a strict split:
//!
//! - **[`core`]**: Pure, deterministic text substitution. No I/O.
//! - **[`io`]**: Side-effecting operations (whole-file workflow rewrites).
//!
//! [`optimize`] drives a run over the fixed target list and prints the
//! progress lines and summary.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod optimize;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

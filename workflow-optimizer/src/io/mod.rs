//! Filesystem side effects: whole-file workflow rewrites.

pub mod rewrite;

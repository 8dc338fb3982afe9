//! Pure, deterministic workflow transformations. No I/O.

pub mod infra_block;

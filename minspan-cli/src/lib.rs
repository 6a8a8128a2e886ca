//! Support library for the minspan CLI binary.
//!
//! Exposes the command pipeline, point file parsing and logging setup so
//! doctests and integration tests can drive them without a subprocess.

pub mod cli;
pub mod logging;
pub mod points;

//! Benchmark support crate for minspan.
//!
//! Provides seeded synthetic point sets and parameter types used by the
//! Criterion benchmarks comparing the spanning tree merge strategies.

pub mod error;
pub mod params;
pub mod source;

//! Property-based tests for the MST builder.
//!
//! Verifies the builder against a Prim's oracle on the complete graph,
//! validates structural invariants (edge count, acyclicity, spanning, scan
//! orientation) and checks that repeated builds and both merge strategies
//! produce identical edge lists on point clouds rich in tied distances.

mod determinism;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;

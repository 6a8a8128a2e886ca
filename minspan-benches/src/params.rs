//! Benchmark parameter types.

use std::fmt;

use minspan_core::MergeStrategy;

/// Parameters for a spanning tree benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
    /// Component bookkeeping used by the builder.
    pub strategy: MergeStrategy,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = match self.strategy {
            MergeStrategy::Relabel => "relabel",
            MergeStrategy::DisjointSet => "disjoint-set",
        };
        write!(f, "n={},{strategy}", self.point_count)
    }
}

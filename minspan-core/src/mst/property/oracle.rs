//! Prim's oracle for MST property verification.
//!
//! A deliberately different algorithm from the builder: dense Prim's over the
//! complete graph, growing one tree from point 0. Minimum spanning trees of a
//! graph all share the same total weight, so only the weight and edge count
//! are compared.

use crate::{Point, SquaredDistance};

/// Result of the Prim's oracle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleResult {
    /// Total squared weight of the MST.
    pub total_weight: SquaredDistance,
    /// Number of edges in the MST.
    pub edge_count: usize,
}

/// Computes the MST weight of the complete graph over `points`.
pub(super) fn prim_total_weight(points: &[Point]) -> OracleResult {
    let Some((&root, _)) = points.split_first() else {
        return OracleResult {
            total_weight: SquaredDistance::ZERO,
            edge_count: 0,
        };
    };

    let mut in_tree = vec![false; points.len()];
    let mut best: Vec<SquaredDistance> = points.iter().map(|&p| root.squared_distance(p)).collect();
    in_tree[0] = true;

    let mut total_weight = SquaredDistance::ZERO;
    let mut edge_count = 0;

    for _ in 1..points.len() {
        let Some(next) = (0..points.len())
            .filter(|&node| !in_tree[node])
            .min_by_key(|&node| best[node])
        else {
            break;
        };

        in_tree[next] = true;
        total_weight = total_weight.saturating_add(best[next]);
        edge_count += 1;

        for node in 0..points.len() {
            if !in_tree[node] {
                let candidate = points[next].squared_distance(points[node]);
                if candidate < best[node] {
                    best[node] = candidate;
                }
            }
        }
    }

    OracleResult {
        total_weight,
        edge_count,
    }
}

//! Property 2: Structural invariant verification.
//!
//! For any tree produced by the builder, verifies:
//!
//! - **Edge count**: exactly `n - 1` edges.
//! - **Orientation**: `source < target < n` for every edge.
//! - **Weights**: each edge carries the squared distance of its endpoints.
//! - **Acyclicity**: no edge joins two already-connected points.
//! - **Spanning**: every point ends up in one component.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{MergeStrategy, MstEdge, Point};

use super::helpers::{build_fixture, ensure, find_root};
use super::types::PointFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &PointFixture) -> TestCaseResult {
    let tree = build_fixture(fixture, MergeStrategy::DisjointSet)?;
    let point_count = fixture.points.len();

    ensure(tree.point_count() == point_count, || {
        format!(
            "tree reports {} points ({})",
            tree.point_count(),
            fixture.describe()
        )
    })?;
    ensure(tree.len() == point_count - 1, || {
        format!(
            "expected {} edges, got {} ({})",
            point_count - 1,
            tree.len(),
            fixture.describe(),
        )
    })?;

    validate_edges(tree.edges(), |i, edge| {
        validate_orientation(i, edge, point_count)
            .or_else(|| validate_weight(i, edge, &fixture.points))
    })?;
    validate_spanning_forest(point_count, tree.edges())
}

fn validate_edges<F>(edges: &[MstEdge], mut predicate: F) -> TestCaseResult
where
    F: FnMut(usize, &MstEdge) -> Option<String>,
{
    for (i, edge) in edges.iter().enumerate() {
        if let Some(msg) = predicate(i, edge) {
            return Err(TestCaseError::fail(msg));
        }
    }
    Ok(())
}

fn validate_orientation(i: usize, edge: &MstEdge, point_count: usize) -> Option<String> {
    (edge.source() >= edge.target() || edge.target() >= point_count).then(|| {
        format!(
            "edge {i}: ({}, {}) is not an ordered pair below {point_count}",
            edge.source(),
            edge.target(),
        )
    })
}

fn validate_weight(i: usize, edge: &MstEdge, points: &[Point]) -> Option<String> {
    let expected = points[edge.source()].squared_distance(points[edge.target()]);
    (edge.weight() != expected).then(|| {
        format!(
            "edge {i}: weight {} does not match squared distance {expected}",
            edge.weight(),
        )
    })
}

/// Unions every edge in order; a union of two connected points is a cycle.
fn validate_spanning_forest(point_count: usize, edges: &[MstEdge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..point_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let source_root = find_root(&mut parent, edge.source());
        let target_root = find_root(&mut parent, edge.target());
        if source_root == target_root {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) closes a cycle",
                edge.source(),
                edge.target(),
            )));
        }
        parent[target_root] = source_root;
    }

    let root = find_root(&mut parent, 0);
    for node in 1..point_count {
        if find_root(&mut parent, node) != root {
            return Err(TestCaseError::fail(format!(
                "point {node} is not connected to point 0"
            )));
        }
    }
    Ok(())
}

//! Preorder tours over a spanning tree.
//!
//! Walking the tree depth-first from point 0 and listing points in first-visit
//! order gives a Hamiltonian ordering; closing it back to point 0 yields the
//! classic tree-doubling travelling-salesman tour, at most twice the optimal
//! tour length under Euclidean distance.

use crate::mst::SpanningTree;

/// Returns every point of `tree` in depth-first preorder from point 0.
///
/// Neighbours are visited in ascending index order, so the tour is
/// deterministic.
///
/// # Examples
/// ```
/// use minspan_core::{Point, min_span, preorder_tour};
///
/// let points = [Point::new(0, 0), Point::new(10, 0), Point::new(1, 0), Point::new(11, 0)];
/// let tree = min_span(&points)?.expect("four points form a tree");
/// assert_eq!(preorder_tour(&tree), vec![0, 2, 1, 3]);
/// # Ok::<(), minspan_core::MinSpanError>(())
/// ```
#[must_use]
pub fn preorder_tour(tree: &SpanningTree) -> Vec<usize> {
    let point_count = tree.point_count();
    if point_count == 0 {
        return Vec::new();
    }

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); point_count];
    for (source, target) in tree.pairs() {
        adjacency[source].push(target);
        adjacency[target].push(source);
    }
    for neighbours in &mut adjacency {
        neighbours.sort_unstable();
    }

    let mut visited = vec![false; point_count];
    let mut order = Vec::with_capacity(point_count);
    let mut stack = vec![0];
    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        order.push(node);
        stack.extend(
            adjacency[node]
                .iter()
                .rev()
                .copied()
                .filter(|&next| !visited[next]),
        );
    }
    order
}

impl SpanningTree {
    /// Returns the preorder tour of this tree; see [`preorder_tour`].
    #[must_use]
    pub fn preorder_tour(&self) -> Vec<usize> {
        preorder_tour(self)
    }
}

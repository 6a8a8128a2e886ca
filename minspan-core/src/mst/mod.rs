//! Euclidean minimum spanning tree construction.
//!
//! Each round enumerates every unordered pair `(i, j)` with `i <= j`, outer
//! index ascending and inner index ascending, and keeps the first pair with
//! the strictly smallest squared distance whose endpoints lie in different
//! components. The selected pair is emitted as `(i, j)` and the component of
//! `j` is merged into the component of `i`. After `n - 1` rounds every point
//! shares one component.
//!
//! The full pair scan makes a build `O(n³)`. The enumeration order is part of
//! the output contract: with tied distances a different order would select
//! different, equally minimal, edges.

mod union_find;

use tracing::{debug, instrument};

use crate::{
    distance::SquaredDistance,
    error::{MinSpanError, Result},
    point::Point,
};

use self::union_find::{ComponentTracker, DisjointSet, RelabelTracker};

/// Selects how the builder tracks which points are already connected.
///
/// Both strategies produce identical trees; they differ only in merge cost.
///
/// # Examples
/// ```
/// use minspan_core::MergeStrategy;
///
/// assert_eq!(MergeStrategy::default(), MergeStrategy::DisjointSet);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MergeStrategy {
    /// Keep one label per point and rewrite the absorbed component's labels
    /// on every merge (`O(n)` per merge).
    Relabel,
    /// Union by rank with path compression, snapshotting labels once per
    /// round.
    #[default]
    DisjointSet,
}

/// A single tree edge.
///
/// `source` is the outer index of the pair scan and `target` the inner one,
/// so `source < target` always holds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MstEdge {
    source: usize,
    target: usize,
    weight: SquaredDistance,
}

impl MstEdge {
    /// Returns the smaller endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the squared length of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> SquaredDistance { self.weight }
}

/// A spanning tree over `point_count` points, edges in selection order.
///
/// The tree owns its edges; dropping it releases them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    edges: Vec<MstEdge>,
    point_count: usize,
}

impl SpanningTree {
    /// Returns the edges in the order they were selected.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MstEdge] { &self.edges }

    /// Returns the number of points spanned by the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn point_count(&self) -> usize { self.point_count }

    /// Returns the number of edges, always `point_count - 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the tree has no edges.
    ///
    /// Built trees always span at least two points, so this only holds for
    /// trees that were never produced by a builder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the sum of the squared edge lengths.
    #[must_use]
    pub fn total_weight(&self) -> SquaredDistance {
        self.edges
            .iter()
            .fold(SquaredDistance::ZERO, |total, edge| {
                total.saturating_add(edge.weight)
            })
    }

    /// Iterates over `(source, target)` index pairs in selection order.
    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (usize, usize)> + '_ {
        self.edges.iter().map(|edge| (edge.source, edge.target))
    }

    /// Flattens the edges into `(u0, v0, u1, v1, ...)`.
    #[must_use]
    pub fn to_interleaved(&self) -> Vec<usize> {
        self.pairs()
            .flat_map(|(source, target)| [source, target])
            .collect()
    }

    /// Consumes the tree, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<MstEdge> {
        self.edges
    }
}

/// Configures and runs minimum spanning tree builds.
///
/// # Examples
/// ```
/// use minspan_core::{MergeStrategy, MstBuilder, Point};
///
/// let builder = MstBuilder::new().with_merge_strategy(MergeStrategy::Relabel);
/// let points = [Point::new(0, 0), Point::new(3, 4)];
/// let tree = builder.build(&points)?.expect("two points form a tree");
/// assert_eq!(tree.pairs().collect::<Vec<_>>(), vec![(0, 1)]);
/// # Ok::<(), minspan_core::MinSpanError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MstBuilder {
    merge_strategy: MergeStrategy,
}

impl MstBuilder {
    /// Creates a builder using the default [`MergeStrategy`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the merge strategy.
    #[must_use]
    pub const fn with_merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.merge_strategy = strategy;
        self
    }

    /// Returns the configured merge strategy.
    #[must_use]
    pub const fn merge_strategy(&self) -> MergeStrategy {
        self.merge_strategy
    }

    /// Builds the minimum spanning tree of `points`.
    ///
    /// Returns `Ok(None)` when fewer than two points are supplied, since no
    /// tree exists. `points` is never modified.
    ///
    /// # Errors
    /// Returns [`MinSpanError::AllocationFailed`] when the label or edge
    /// buffers cannot be reserved.
    ///
    /// # Examples
    /// ```
    /// use minspan_core::{MstBuilder, Point};
    ///
    /// let builder = MstBuilder::new();
    /// assert!(builder.build(&[Point::new(1, 1)])?.is_none());
    /// # Ok::<(), minspan_core::MinSpanError>(())
    /// ```
    #[instrument(
        name = "mst.build",
        level = "debug",
        err,
        skip(self, points),
        fields(points = points.len(), strategy = ?self.merge_strategy),
    )]
    pub fn build(&self, points: &[Point]) -> Result<Option<SpanningTree>> {
        if points.len() < 2 {
            return Ok(None);
        }

        let tree = match self.merge_strategy {
            MergeStrategy::Relabel => {
                select_edges(points, &mut RelabelTracker::new(points.len())?)?
            }
            MergeStrategy::DisjointSet => {
                select_edges(points, &mut DisjointSet::new(points.len())?)?
            }
        };

        debug!(
            edges = tree.len(),
            total_weight = %tree.total_weight(),
            "spanning tree complete"
        );
        Ok(Some(tree))
    }
}

/// Builds the minimum spanning tree of `points` with the default builder.
///
/// # Errors
/// Returns [`MinSpanError::AllocationFailed`] when the label or edge buffers
/// cannot be reserved.
///
/// # Examples
/// ```
/// use minspan_core::{Point, min_span};
///
/// let points: Vec<Point> = [(0, 0), (1, 0), (2, 0), (3, 0)]
///     .into_iter()
///     .map(Point::from)
///     .collect();
/// let tree = min_span(&points)?.expect("four points form a tree");
/// assert_eq!(tree.to_interleaved(), vec![0, 1, 1, 2, 2, 3]);
/// # Ok::<(), minspan_core::MinSpanError>(())
/// ```
pub fn min_span(points: &[Point]) -> Result<Option<SpanningTree>> {
    MstBuilder::new().build(points)
}

fn select_edges<T: ComponentTracker>(points: &[Point], tracker: &mut T) -> Result<SpanningTree> {
    let edge_count = points.len().saturating_sub(1);
    let mut edges = Vec::new();
    edges
        .try_reserve_exact(edge_count)
        .map_err(MinSpanError::allocation("edge", edge_count))?;

    for round in 0..edge_count {
        let edge = closest_cross_component_pair(points, tracker.labels()).ok_or(
            MinSpanError::InvariantViolation {
                invariant: "points must span at least two components before the final round",
                round,
            },
        )?;
        tracker.merge(edge.source, edge.target);
        edges.push(edge);
    }

    Ok(SpanningTree {
        edges,
        point_count: points.len(),
    })
}

/// Scans `(i, j)` pairs with `i <= j` and returns the first pair of minimum
/// squared distance whose labels differ.
fn closest_cross_component_pair(points: &[Point], labels: &[usize]) -> Option<MstEdge> {
    let mut best: Option<MstEdge> = None;
    for (source, (&left, left_label)) in points.iter().zip(labels).enumerate() {
        let candidates = points.iter().zip(labels).enumerate().skip(source);
        for (target, (&right, right_label)) in candidates {
            if left_label == right_label {
                continue;
            }
            let weight = left.squared_distance(right);
            if best.is_none_or(|current| weight < current.weight) {
                best = Some(MstEdge {
                    source,
                    target,
                    weight,
                });
            }
        }
    }
    best
}

#[cfg(test)]
mod property;

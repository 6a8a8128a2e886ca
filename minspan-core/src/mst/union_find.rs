//! Component bookkeeping for the MST builder.
//!
//! Two trackers implement the same contract. [`RelabelTracker`] keeps one
//! label per point and rewrites every label of the absorbed component on each
//! merge. [`DisjointSet`] uses union by rank with path compression and
//! materialises a label snapshot once per selection round. Both agree on
//! which pairs share a component at every round, so the builder selects the
//! same edges whichever tracker it runs.

use crate::error::{MinSpanError, Result};

/// Tracks which points are already connected by selected edges.
pub(super) trait ComponentTracker {
    /// Returns one label per point for the current round. Two points are
    /// connected iff their labels are equal.
    fn labels(&mut self) -> &[usize];

    /// Joins the component of `absorbed` into the component of `kept`.
    fn merge(&mut self, kept: usize, absorbed: usize);
}

fn identity_labels(point_count: usize) -> Result<Vec<usize>> {
    let mut labels = Vec::new();
    labels
        .try_reserve_exact(point_count)
        .map_err(MinSpanError::allocation("component label", point_count))?;
    labels.extend(0..point_count);
    Ok(labels)
}

/// Full relabelling: every merge scans the whole label array.
pub(super) struct RelabelTracker {
    labels: Vec<usize>,
}

impl RelabelTracker {
    pub(super) fn new(point_count: usize) -> Result<Self> {
        Ok(Self {
            labels: identity_labels(point_count)?,
        })
    }
}

impl ComponentTracker for RelabelTracker {
    fn labels(&mut self) -> &[usize] {
        &self.labels
    }

    fn merge(&mut self, kept: usize, absorbed: usize) {
        let kept_label = self.labels[kept];
        let absorbed_label = self.labels[absorbed];
        for label in &mut self.labels {
            if *label == absorbed_label {
                *label = kept_label;
            }
        }
    }
}

/// Union by rank with path compression.
pub(super) struct DisjointSet {
    parents: Vec<usize>,
    ranks: Vec<u8>,
    snapshot: Vec<usize>,
}

impl DisjointSet {
    pub(super) fn new(point_count: usize) -> Result<Self> {
        let mut ranks = Vec::new();
        ranks
            .try_reserve_exact(point_count)
            .map_err(MinSpanError::allocation("rank", point_count))?;
        ranks.resize(point_count, 0);
        Ok(Self {
            parents: identity_labels(point_count)?,
            ranks,
            snapshot: identity_labels(point_count)?,
        })
    }

    pub(super) fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut current = node;
        while self.parents[current] != root {
            let next = self.parents[current];
            self.parents[current] = root;
            current = next;
        }
        root
    }

    /// Returns `false` when both nodes already share a root.
    pub(super) fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let (parent, child) = choose_parent_child(
            left_root,
            right_root,
            self.ranks[left_root],
            self.ranks[right_root],
        );
        self.parents[child] = parent;
        if self.ranks[parent] == self.ranks[child] {
            self.ranks[parent] = self.ranks[parent].saturating_add(1);
        }
        true
    }
}

impl ComponentTracker for DisjointSet {
    fn labels(&mut self) -> &[usize] {
        for node in 0..self.parents.len() {
            let root = self.find(node);
            self.snapshot[node] = root;
        }
        &self.snapshot
    }

    fn merge(&mut self, kept: usize, absorbed: usize) {
        self.union(kept, absorbed);
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u8,
    right_rank: u8,
) -> (usize, usize) {
    if right_rank > left_rank {
        (right_root, left_root)
    } else {
        (left_root, right_root)
    }
}

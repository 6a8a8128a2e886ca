//! Minspan core library.
//!
//! Computes Euclidean minimum spanning trees over integer points in the
//! plane. Every round scans all point pairs in index order and keeps the
//! first pair with the smallest squared distance whose endpoints sit in
//! different components, so the output is fully determined by the input
//! order, including on inputs with tied distances.
//!
//! # Examples
//! ```
//! use minspan_core::{Point, min_span};
//!
//! let points = [Point::new(0, 0), Point::new(0, 1), Point::new(0, 10)];
//! let tree = min_span(&points)?.expect("three points form a tree");
//! let pairs: Vec<_> = tree.pairs().collect();
//! assert_eq!(pairs, vec![(0, 1), (1, 2)]);
//! assert_eq!(tree.total_weight().get(), 82);
//! # Ok::<(), minspan_core::MinSpanError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod distance;
mod error;
mod interleaved;
mod mst;
mod point;
mod tour;

#[cfg(test)]
mod test_utils;

pub use crate::{
    distance::{SquaredDistance, squared_euclidean},
    error::{MinSpanError, MinSpanErrorCode, Result},
    interleaved::min_span_interleaved,
    mst::{MergeStrategy, MstBuilder, MstEdge, SpanningTree, min_span},
    point::Point,
    tour::preorder_tour,
};

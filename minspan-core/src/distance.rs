//! Squared Euclidean distance between integer points.
//!
//! The spanning tree only ever compares distances, so the square root is
//! never taken. Coordinates are `i32`; each axis delta fits in 33 bits and
//! each squared delta in 64, so the sum is held in a `u128` and cannot
//! overflow for any pair of points.

use std::fmt;

use crate::point::Point;

/// Squared Euclidean distance between two points.
///
/// # Examples
/// ```
/// use minspan_core::{Point, SquaredDistance, squared_euclidean};
///
/// let distance = squared_euclidean(Point::new(1, 1), Point::new(4, 5));
/// assert_eq!(distance, SquaredDistance::new(25));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SquaredDistance(u128);

impl SquaredDistance {
    /// Distance between coincident points.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw squared distance.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw squared distance.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> u128 { self.0 }

    /// Adds two distances, clamping at `u128::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for SquaredDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Computes `(x1-x2)² + (y1-y2)²` without overflow.
#[must_use]
pub fn squared_euclidean(left: Point, right: Point) -> SquaredDistance {
    let dx = axis_delta(left.x(), right.x());
    let dy = axis_delta(left.y(), right.y());
    SquaredDistance(dx * dx + dy * dy)
}

fn axis_delta(left: i32, right: i32) -> u128 {
    u128::from((i64::from(left) - i64::from(right)).unsigned_abs())
}

//! Integer points in the plane.

use crate::distance::{SquaredDistance, squared_euclidean};

/// A point with signed integer coordinates.
///
/// A point's identity inside a spanning tree is its index in the slice passed
/// to the builder; the coordinates themselves carry no identity.
///
/// # Examples
/// ```
/// use minspan_core::Point;
///
/// let origin = Point::new(0, 0);
/// let far = Point::from((3, 4));
/// assert_eq!(origin.squared_distance(far).get(), 25);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the horizontal coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn x(&self) -> i32 { self.x }

    /// Returns the vertical coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn y(&self) -> i32 { self.y }

    /// Returns the squared Euclidean distance to `other`.
    #[must_use]
    pub fn squared_distance(self, other: Self) -> SquaredDistance {
        squared_euclidean(self, other)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

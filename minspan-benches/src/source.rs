//! Synthetic point sets for benchmarking.
//!
//! Points are drawn uniformly from an integer window with a seeded RNG, so
//! every benchmark run measures the same input.

use minspan_core::Point;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic point generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested point count was zero.
    #[error("point count must be greater than zero")]
    ZeroPoints,
    /// The sampling window has no area.
    #[error("window must be at least 1x1, got {width}x{height}")]
    EmptyWindow {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
}

/// Configuration for synthetic point generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Points satisfy `0 <= x < width`.
    pub width: i32,
    /// Points satisfy `0 <= y < height`.
    pub height: i32,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A seeded set of integer points.
///
/// # Examples
///
/// ```
/// use minspan_benches::source::{SyntheticConfig, SyntheticPoints};
///
/// let config = SyntheticConfig { point_count: 10, width: 100, height: 50, seed: 42 };
/// let points = SyntheticPoints::generate(&config).expect("valid config");
/// assert_eq!(points.len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticPoints {
    points: Vec<Point>,
    coords: Vec<i32>,
}

impl SyntheticPoints {
    /// Generates points eagerly from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroPoints`] if `point_count` is zero, or
    /// [`SyntheticError::EmptyWindow`] if either window side is below one.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.point_count == 0 {
            return Err(SyntheticError::ZeroPoints);
        }
        if config.width < 1 || config.height < 1 {
            return Err(SyntheticError::EmptyWindow {
                width: config.width,
                height: config.height,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let points: Vec<Point> = (0..config.point_count)
            .map(|_| {
                Point::new(
                    rng.gen_range(0..config.width),
                    rng.gen_range(0..config.height),
                )
            })
            .collect();
        let coords = points
            .iter()
            .flat_map(|point| [point.x(), point.y()])
            .collect();

        Ok(Self { points, coords })
    }

    /// Returns the generated points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the points flattened as `[x0, y0, x1, y1, …]`.
    #[must_use]
    pub fn coords(&self) -> &[i32] {
        &self.coords
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when no points were generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

//! Type definitions for MST property-based tests.
//!
//! Provides the fixture, configuration and point layout types used by the
//! generation strategies and property functions.

use test_strategy::Arbitrary;

use crate::Point;

/// Point layout used to generate a fixture.
///
/// Layouts other than `Scattered` deliberately produce many equal pairwise
/// distances so the first-match tie-break is exercised on every round.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum PointLayout {
    /// Points drawn uniformly from a wide square.
    Scattered,
    /// A few tight clusters far apart from each other.
    Clustered,
    /// A subset of an integer lattice with unit spacing.
    Grid,
    /// Points on a single horizontal line, in shuffled order.
    Collinear,
    /// Several copies of a handful of coordinates.
    Coincident,
    /// Coordinates at the extremes of the `i32` range.
    Extreme,
}

/// Fixture for MST property tests.
///
/// Captures the generated points and the layout that produced them so
/// failures carry full context.
#[derive(Clone, Debug)]
pub(super) struct PointFixture {
    /// Generated points.
    pub points: Vec<Point>,
    /// Layout used during generation.
    pub layout: PointLayout,
}

impl PointFixture {
    /// Summarises the fixture for failure messages.
    pub(super) fn describe(&self) -> String {
        format!("layout={:?}, points={}", self.layout, self.points.len())
    }
}

/// Configuration for the determinism property.
///
/// Controls how many times a build is repeated on the same input.
pub(super) struct RepeatConfig {
    /// Number of builds per input.
    pub repetitions: usize,
}

impl RepeatConfig {
    /// Loads the configuration from the environment.
    ///
    /// `MINSPAN_MST_PBT_REPEATS` overrides the repetition count (default: 3).
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("MINSPAN_MST_PBT_REPEATS")
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .filter(|&count: &usize| count > 0)
            .unwrap_or(3);
        Self { repetitions }
    }
}

//! Strategy builders for MST property-based tests.
//!
//! Each layout draws a seeded [`SmallRng`] and produces a point cloud sized
//! for an `O(n³)` builder. Every layout except `Scattered` is built to
//! produce tied distances.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Point;

use super::types::{PointFixture, PointLayout};

/// Minimum point count for generated clouds.
const MIN_POINTS: usize = 2;
/// Maximum point count for generated clouds.
const MAX_POINTS: usize = 40;
/// Half-width of the square used by the scattered layout.
const SCATTER_RADIUS: i32 = 1_000;

/// Generates fixtures covering every layout.
pub(super) fn point_fixture_strategy() -> impl Strategy<Value = PointFixture> {
    (any::<PointLayout>(), any::<u64>()).prop_map(|(layout, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(layout, &mut rng)
    })
}

/// Generates a fixture for a specific layout.
pub(super) fn generate_fixture(layout: PointLayout, rng: &mut SmallRng) -> PointFixture {
    let count = rng.gen_range(MIN_POINTS..=MAX_POINTS);
    let points = match layout {
        PointLayout::Scattered => scattered(count, rng),
        PointLayout::Clustered => clustered(count, rng),
        PointLayout::Grid => grid(count, rng),
        PointLayout::Collinear => collinear(count, rng),
        PointLayout::Coincident => coincident(count, rng),
        PointLayout::Extreme => extreme(count, rng),
    };
    PointFixture { points, layout }
}

fn scattered(count: usize, rng: &mut SmallRng) -> Vec<Point> {
    (0..count)
        .map(|_| {
            Point::new(
                rng.gen_range(-SCATTER_RADIUS..=SCATTER_RADIUS),
                rng.gen_range(-SCATTER_RADIUS..=SCATTER_RADIUS),
            )
        })
        .collect()
}

fn clustered(count: usize, rng: &mut SmallRng) -> Vec<Point> {
    let centres: Vec<Point> = (0..rng.gen_range(2..=4))
        .map(|_| {
            Point::new(
                rng.gen_range(-50_000..=50_000),
                rng.gen_range(-50_000..=50_000),
            )
        })
        .collect();
    (0..count)
        .map(|_| {
            let centre = centres[rng.gen_range(0..centres.len())];
            Point::new(
                centre.x() + rng.gen_range(-3..=3),
                centre.y() + rng.gen_range(-3..=3),
            )
        })
        .collect()
}

fn grid(count: usize, rng: &mut SmallRng) -> Vec<Point> {
    let side = rng.gen_range(2..=8);
    let mut cells: Vec<Point> = (0..side)
        .flat_map(|x| (0..side).map(move |y| Point::new(x, y)))
        .collect();
    shuffle(&mut cells, rng);
    cells.truncate(count);
    cells
}

fn collinear(count: usize, rng: &mut SmallRng) -> Vec<Point> {
    let step = rng.gen_range(1..=3);
    let mut xs: Vec<i32> = (0..).step_by(step).take(count).collect();
    shuffle(&mut xs, rng);
    xs.into_iter().map(|x| Point::new(x, 7)).collect()
}

fn coincident(count: usize, rng: &mut SmallRng) -> Vec<Point> {
    let sites: Vec<Point> = (0..rng.gen_range(1..=3))
        .map(|_| Point::new(rng.gen_range(-5..=5), rng.gen_range(-5..=5)))
        .collect();
    (0..count)
        .map(|_| sites[rng.gen_range(0..sites.len())])
        .collect()
}

fn extreme(count: usize, rng: &mut SmallRng) -> Vec<Point> {
    const VALUES: [i32; 5] = [i32::MIN, i32::MIN + 1, 0, i32::MAX - 1, i32::MAX];
    (0..count)
        .map(|_| {
            Point::new(
                VALUES[rng.gen_range(0..VALUES.len())],
                VALUES[rng.gen_range(0..VALUES.len())],
            )
        })
        .collect()
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

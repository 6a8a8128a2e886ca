//! Property 3: Determinism.
//!
//! Repeats the build on the same input and across both merge strategies,
//! asserting exact edge-list equality. Tie-heavy layouts make any deviation
//! from the first-match scan order visible here.

use proptest::test_runner::TestCaseResult;

use crate::MergeStrategy;

use super::helpers::{build_fixture, ensure};
use super::types::{PointFixture, RepeatConfig};

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &PointFixture) -> TestCaseResult {
    let config = RepeatConfig::load();
    let baseline = build_fixture(fixture, MergeStrategy::DisjointSet)?;

    for run in 1..config.repetitions {
        let repeat = build_fixture(fixture, MergeStrategy::DisjointSet)?;
        ensure(repeat == baseline, || {
            format!(
                "run {run}: edge list differs from baseline ({})",
                fixture.describe()
            )
        })?;
    }

    let relabel = build_fixture(fixture, MergeStrategy::Relabel)?;
    ensure(relabel == baseline, || {
        format!(
            "relabel strategy diverged: relabel={:?}, disjoint_set={:?} ({})",
            relabel.pairs().collect::<Vec<_>>(),
            baseline.pairs().collect::<Vec<_>>(),
            fixture.describe(),
        )
    })
}

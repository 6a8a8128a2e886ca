//! Shared helper functions for MST property-based tests.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{MergeStrategy, MstBuilder, SpanningTree};

use super::types::PointFixture;

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Builds the fixture's tree with `strategy`, converting failures and
/// missing trees into test-case errors.
pub(super) fn build_fixture(
    fixture: &PointFixture,
    strategy: MergeStrategy,
) -> Result<SpanningTree, TestCaseError> {
    MstBuilder::new()
        .with_merge_strategy(strategy)
        .build(&fixture.points)
        .map_err(|e| TestCaseError::fail(format!("build failed: {e} ({})", fixture.describe())))?
        .ok_or_else(|| {
            TestCaseError::fail(format!("build returned no tree ({})", fixture.describe()))
        })
}

/// Fails with `message` unless `condition` holds.
pub(super) fn ensure(condition: bool, message: impl FnOnce() -> String) -> TestCaseResult {
    if condition {
        Ok(())
    } else {
        Err(TestCaseError::fail(message()))
    }
}

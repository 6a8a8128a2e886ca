//! Flat call contract over interleaved coordinates.
//!
//! Point `i` is read from `coords[2i]` and `coords[2i + 1]`; the resulting
//! edges are written back as `(u0, v0, u1, v1, ...)`.

use tracing::instrument;

use crate::{
    error::{MinSpanError, Result},
    mst::min_span,
    point::Point,
};

/// Builds the minimum spanning tree of `point_count` interleaved points.
///
/// Returns `Ok(None)` when `point_count < 2` without inspecting `coords`.
/// Otherwise returns `2 * (point_count - 1)` interleaved endpoint indices.
/// Values past the first `2 * point_count` coordinates are ignored.
///
/// # Errors
/// Returns [`MinSpanError::CoordinatesTooShort`] when `coords` holds fewer
/// than `2 * point_count` values and [`MinSpanError::AllocationFailed`] when
/// working buffers cannot be reserved.
///
/// # Examples
/// ```
/// use minspan_core::min_span_interleaved;
///
/// let edges = min_span_interleaved(3, &[0, 0, 0, 1, 0, 10])?;
/// assert_eq!(edges, Some(vec![0, 1, 1, 2]));
/// assert_eq!(min_span_interleaved(1, &[5, 5])?, None);
/// # Ok::<(), minspan_core::MinSpanError>(())
/// ```
#[instrument(
    name = "mst.interleaved",
    level = "debug",
    err,
    skip(coords),
    fields(coords = coords.len()),
)]
pub fn min_span_interleaved(point_count: usize, coords: &[i32]) -> Result<Option<Vec<usize>>> {
    if point_count < 2 {
        return Ok(None);
    }

    let points = decode_points(point_count, coords)?;
    Ok(min_span(&points)?.map(|tree| tree.to_interleaved()))
}

fn decode_points(point_count: usize, coords: &[i32]) -> Result<Vec<Point>> {
    let expected = point_count.saturating_mul(2);
    let used = coords
        .get(..expected)
        .ok_or(MinSpanError::CoordinatesTooShort {
            point_count,
            expected,
            got: coords.len(),
        })?;

    let mut points = Vec::new();
    points
        .try_reserve_exact(point_count)
        .map_err(MinSpanError::allocation("point", point_count))?;
    points.extend(
        used.chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1])),
    );
    Ok(points)
}

//! Line-oriented point files.
//!
//! One point per line, written `x y` or `x,y` with optional surrounding
//! whitespace. Blank lines and lines starting with `#` are skipped.

use std::io::{self, BufRead};

use minspan_core::Point;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a point file.
#[derive(Debug, Error)]
pub enum PointsFileError {
    /// Reading from the underlying source failed.
    #[error("failed to read points: {source}")]
    Read {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A line could not be parsed as a point.
    #[error("line {line}: cannot parse `{content}` as a point: {reason}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// Offending line, trimmed.
        content: String,
        /// Why the line was rejected.
        reason: String,
    },
}

/// Reads every point from `reader`.
///
/// # Errors
/// Returns [`PointsFileError::Read`] when the reader fails and
/// [`PointsFileError::Parse`] for the first malformed line.
///
/// # Examples
/// ```
/// use minspan_cli::points::read_points;
/// use minspan_core::Point;
///
/// let input = "# corners\n0 0\n3,4\n\n";
/// let points = read_points(input.as_bytes())?;
/// assert_eq!(points, vec![Point::new(0, 0), Point::new(3, 4)]);
/// # Ok::<(), minspan_cli::points::PointsFileError>(())
/// ```
pub fn read_points(reader: impl BufRead) -> Result<Vec<Point>, PointsFileError> {
    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| PointsFileError::Read { source })?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let point = parse_point(content).map_err(|reason| PointsFileError::Parse {
            line: index + 1,
            content: content.to_owned(),
            reason,
        })?;
        points.push(point);
    }
    debug!(points = points.len(), "point file parsed");
    Ok(points)
}

fn parse_point(content: &str) -> Result<Point, String> {
    let mut fields = content
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty());
    let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err("expected exactly two coordinates".to_owned());
    };
    Ok(Point::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

fn parse_coordinate(raw: &str) -> Result<i32, String> {
    raw.parse::<i32>()
        .map_err(|error| format!("invalid coordinate `{raw}`: {error}"))
}

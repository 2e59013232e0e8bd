use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{LineSegment, Side};
use crate::math::distance_2d::{signed_point_to_line_dist, station_along_line};
use crate::math::{Point2, TOLERANCE};

/// Result of a point-to-line distance query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLineDistanceResult {
    /// Unsigned perpendicular distance.
    pub distance: f64,
    /// Perpendicular distance, positive on the left of the line direction.
    pub signed_distance: f64,
    /// Side the point lies on, `None` when it lies on the line.
    pub side: Option<Side>,
    /// Distance along the line from its start to the foot of the perpendicular.
    pub station: f64,
    /// Foot of the perpendicular on the line.
    pub foot: Point2,
}

/// Measures the perpendicular distance from a point to a line.
///
/// The segment is used as its infinite extension.
pub struct PointLineDistance {
    line: LineSegment,
    point: Point2,
}

impl PointLineDistance {
    /// Creates a new `PointLineDistance` query.
    #[must_use]
    pub fn new(line: LineSegment, point: Point2) -> Self {
        Self { line, point }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidBaseline` if the line has zero length.
    pub fn execute(&self) -> Result<PointLineDistanceResult> {
        let (a, b) = (self.line.start(), self.line.end());
        let signed_distance = signed_point_to_line_dist(&self.point, a, b)?;
        let station = station_along_line(&self.point, a, b)?;
        let foot = self.line.point_at(station)?;

        Ok(PointLineDistanceResult {
            distance: signed_distance.abs(),
            signed_distance,
            side: Side::of_signed_distance(signed_distance, TOLERANCE),
            station,
            foot,
        })
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::math::angle::{azimuth, direction_angle};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A directed segment from `start` to `end`.
///
/// The segment also stands for its infinite extension in distance and angle
/// queries. A segment whose endpoints coincide has no direction; it can be
/// constructed, but every query that needs a direction fails with
/// `GeometryError::InvalidBaseline`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    start: Point2,
    end: Point2,
}

impl LineSegment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a segment from raw coordinates `(x1, y1) → (x2, y2)`.
    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Returns `true` if start and end coincide within [`TOLERANCE`].
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < TOLERANCE
    }

    /// Returns the midpoint.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns `Ok(self)` if the segment has a direction.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidBaseline` if the segment is degenerate.
    pub fn validated(&self) -> Result<&Self> {
        if self.is_degenerate() {
            return Err(GeometryError::InvalidBaseline {
                x: self.start.x,
                y: self.start.y,
            }
            .into());
        }
        Ok(self)
    }

    /// Returns the unit direction vector.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidBaseline` if the segment is degenerate.
    pub fn direction(&self) -> Result<Vector2> {
        self.validated()?;
        Ok(self.vector() / self.length())
    }

    /// Returns the direction angle in degrees (east-zero, counter-clockwise).
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidBaseline` if the segment is degenerate.
    pub fn direction_angle(&self) -> Result<f64> {
        Ok(direction_angle(&self.direction()?))
    }

    /// Returns the azimuth in degrees (north-zero, clockwise).
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidBaseline` if the segment is degenerate.
    pub fn azimuth(&self) -> Result<f64> {
        Ok(azimuth(&self.direction()?))
    }

    /// Returns the point at `station` meters from `start` along the direction.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidBaseline` if the segment is degenerate.
    pub fn point_at(&self, station: f64) -> Result<Point2> {
        Ok(self.start + self.direction()? * station)
    }

    /// Returns this segment moved by `displacement`.
    #[must_use]
    pub fn translated(&self, displacement: &Vector2) -> Self {
        Self::new(self.start + *displacement, self.end + *displacement)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn length_3_4_5() {
        let s = LineSegment::from_coords(0.0, 0.0, 3.0, 4.0);
        assert_abs_diff_eq!(s.length(), 5.0, epsilon = 1e-12);
        let d = s.direction().unwrap();
        assert_abs_diff_eq!(d.x, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(d.y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_segment_has_no_direction() {
        let s = LineSegment::from_coords(2.0, 2.0, 2.0, 2.0);
        assert!(s.is_degenerate());
        assert!(s.direction().unwrap_err().is_invalid_baseline());
        assert!(s.direction_angle().unwrap_err().is_invalid_baseline());
        assert!(s.azimuth().unwrap_err().is_invalid_baseline());
        assert!(s.point_at(1.0).is_err());
    }

    #[test]
    fn midpoint_and_point_at() {
        let s = LineSegment::from_coords(0.0, 0.0, 0.0, 10.0);
        let m = s.midpoint();
        assert_abs_diff_eq!(m.y, 5.0, epsilon = 1e-12);
        let p = s.point_at(-2.0).unwrap();
        assert_abs_diff_eq!(p.y, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn direction_angle_and_azimuth() {
        // Baseline heading north-east at 45°.
        let s = LineSegment::from_coords(1.0, 1.0, 2.0, 2.0);
        assert_abs_diff_eq!(s.direction_angle().unwrap(), 45.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.azimuth().unwrap(), 45.0, epsilon = 1e-12);
        // Heading south: direction angle -90°, azimuth 180°.
        let s = LineSegment::from_coords(0.0, 0.0, 0.0, -3.0);
        assert_abs_diff_eq!(s.direction_angle().unwrap(), -90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.azimuth().unwrap(), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn translated_keeps_direction() {
        let s = LineSegment::from_coords(0.0, 0.0, 10.0, 0.0);
        let t = s.translated(&Vector2::new(0.0, -4.0));
        assert_eq!(*t.start(), Point2::new(0.0, -4.0));
        assert_eq!(*t.end(), Point2::new(10.0, -4.0));
        assert_eq!(t.vector(), s.vector());
    }

    #[test]
    fn serializes_as_coordinate_pairs() {
        let s = LineSegment::from_coords(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"start":[1.0,2.0],"end":[3.0,4.0]}"#);
    }
}

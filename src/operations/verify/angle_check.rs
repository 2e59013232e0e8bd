use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result, StakeoutError};
use crate::geometry::LineSegment;
use crate::math::vector_2d::try_angle_between;
use crate::math::{Point2, Vector2};

use super::Tolerance;

/// What the reference line is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckTarget {
    /// The vector from the reference start to this point.
    Point(Point2),
    /// The direction of this segment.
    Segment(LineSegment),
}

/// Which angle is expected between the reference and the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Expect 90°.
    Perpendicular,
    /// Expect 0°. Anti-parallel directions count as aligned.
    Alignment,
}

/// Outcome of an angle check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Aligned,
    Perpendicular,
    /// Outside tolerance; carries the deviation from the expected angle in degrees.
    Deviated(f64),
}

/// Full result of an angle check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleVerdict {
    /// Angle between reference direction and target, in `[0, 180]` degrees.
    pub angle_deg: f64,
    /// Absolute deviation from the expected angle, in degrees.
    pub deviation_deg: f64,
    pub verdict: Verdict,
    /// The target vector had zero length; `angle_deg` is 0 by convention.
    pub degenerate: bool,
}

impl AngleVerdict {
    /// Returns `true` unless the verdict is `Deviated`.
    #[must_use]
    pub fn passed(&self) -> bool {
        !matches!(self.verdict, Verdict::Deviated(_))
    }
}

/// Checks the angle between a reference line and a point or segment.
#[derive(Debug)]
pub struct AngleCheck {
    reference: LineSegment,
    target: CheckTarget,
    kind: CheckKind,
    tolerance: Tolerance,
}

impl AngleCheck {
    /// Creates a new angle check.
    #[must_use]
    pub fn new(
        reference: LineSegment,
        target: CheckTarget,
        kind: CheckKind,
        tolerance: Tolerance,
    ) -> Self {
        Self {
            reference,
            target,
            kind,
            tolerance,
        }
    }

    /// Executes the check.
    ///
    /// A zero-length target vector (a point on the reference start, or a
    /// degenerate target segment) has no direction; the angle is taken as 0
    /// and the result is flagged `degenerate`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidBaseline` if the reference has zero length.
    pub fn execute(&self) -> Result<AngleVerdict> {
        let direction = self.reference.direction()?;
        let compared = self.compared_vector();

        let (angle_deg, degenerate) = match try_angle_between(&direction, &compared) {
            Ok(angle) => (angle, false),
            Err(StakeoutError::Geometry(GeometryError::DegenerateComparisonVector)) => {
                tracing::warn!(
                    target_kind = ?self.target,
                    "comparison vector has zero length, angle taken as 0"
                );
                (0.0, true)
            }
            Err(e) => return Err(e),
        };

        let deviation_deg = match self.kind {
            CheckKind::Perpendicular => (angle_deg - 90.0).abs(),
            CheckKind::Alignment => angle_deg.min(180.0 - angle_deg),
        };

        let verdict = match (self.kind, self.tolerance.accepts(deviation_deg)) {
            (CheckKind::Perpendicular, true) => Verdict::Perpendicular,
            (CheckKind::Alignment, true) => Verdict::Aligned,
            (_, false) => Verdict::Deviated(deviation_deg),
        };

        tracing::debug!(angle_deg, deviation_deg, ?verdict, "angle check");

        Ok(AngleVerdict {
            angle_deg,
            deviation_deg,
            verdict,
            degenerate,
        })
    }

    fn compared_vector(&self) -> Vector2 {
        match &self.target {
            CheckTarget::Point(p) => p - self.reference.start(),
            CheckTarget::Segment(s) => s.vector(),
        }
    }
}

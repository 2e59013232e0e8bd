use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::angle::{to_dms, AngleDms, DEFAULT_SECONDS_DECIMALS};
use crate::math::Point2;
use crate::operations::offset::OffsetResult;
use crate::operations::query::PointLineDistance;

use super::{AngleCheck, AngleVerdict, CheckKind, CheckTarget, Tolerance};

/// Linear tolerance (meters) for classifying a point as lying on a line.
const POSITION_TOLERANCE: f64 = 1e-9;

/// Where a verification point lies relative to the baseline and offset line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetPosition {
    /// On the far side of the baseline from the offset.
    Opposite,
    /// On the baseline or between the baseline and the offset line.
    Between,
    /// On the offset line.
    OnOffset,
    /// Past the offset line.
    Beyond,
}

impl OffsetPosition {
    /// Classifies a point from its distance towards the offset side of the
    /// baseline (`toward_offset`, negative on the opposite side) and the
    /// offset distance.
    #[must_use]
    pub fn classify(toward_offset: f64, offset_distance: f64) -> Self {
        if (toward_offset - offset_distance).abs() <= POSITION_TOLERANCE {
            Self::OnOffset
        } else if toward_offset < -POSITION_TOLERANCE {
            Self::Opposite
        } else if toward_offset > offset_distance {
            Self::Beyond
        } else {
            Self::Between
        }
    }
}

/// Evaluation of one verification point against the baseline and its offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub point: Point2,
    /// Perpendicular distance to the baseline.
    pub distance_to_baseline: f64,
    /// Signed distance to the baseline, positive on its left.
    pub signed_distance_to_baseline: f64,
    /// Perpendicular distance to the offset line.
    pub distance_to_offset: f64,
    /// Signed distance to the offset line, positive on its left.
    pub signed_distance_to_offset: f64,
    /// Chainage of the point's foot along the baseline.
    pub station: f64,
    /// Angle at the baseline start between the baseline and the point.
    pub angle_deg: f64,
    pub angle_dms: AngleDms,
    /// Perpendicularity check of the point against the baseline.
    pub check: AngleVerdict,
    /// `true` when the check passed.
    pub perpendicular: bool,
    /// The point coincides with the baseline start, so no angle exists.
    pub degenerate: bool,
    pub position: OffsetPosition,
}

/// Evaluates a verification point against a baseline and its offset line.
///
/// The baseline is taken from the [`OffsetResult`], so the two always belong
/// together.
#[derive(Debug)]
pub struct VerifyPoint<'a> {
    offset: &'a OffsetResult,
    point: Point2,
    tolerance: Tolerance,
    seconds_decimals: u8,
}

impl<'a> VerifyPoint<'a> {
    /// Creates a new verification.
    #[must_use]
    pub fn new(offset: &'a OffsetResult, point: Point2, tolerance: Tolerance) -> Self {
        Self {
            offset,
            point,
            tolerance,
            seconds_decimals: DEFAULT_SECONDS_DECIMALS,
        }
    }

    /// Sets the number of decimals kept on the seconds of `angle_dms`.
    #[must_use]
    pub fn with_seconds_decimals(mut self, decimals: u8) -> Self {
        self.seconds_decimals = decimals;
        self
    }

    /// Executes the verification.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidBaseline` if the baseline has zero length.
    pub fn execute(&self) -> Result<VerificationRecord> {
        let baseline = self.offset.baseline;
        let to_baseline = PointLineDistance::new(baseline, self.point).execute()?;
        let to_offset = PointLineDistance::new(self.offset.offset, self.point).execute()?;

        let check = AngleCheck::new(
            baseline,
            CheckTarget::Point(self.point),
            CheckKind::Perpendicular,
            self.tolerance,
        )
        .execute()?;

        let toward_offset = to_baseline.signed_distance * self.offset.side.sign();
        let position = OffsetPosition::classify(toward_offset, self.offset.distance);

        Ok(VerificationRecord {
            point: self.point,
            distance_to_baseline: to_baseline.distance,
            signed_distance_to_baseline: to_baseline.signed_distance,
            distance_to_offset: to_offset.distance,
            signed_distance_to_offset: to_offset.signed_distance,
            station: to_baseline.station,
            angle_deg: check.angle_deg,
            angle_dms: to_dms(check.angle_deg, self.seconds_decimals),
            check,
            perpendicular: check.passed(),
            degenerate: check.degenerate,
            position,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{LineSegment, Side};
    use crate::operations::LineOffset2D;
    use approx::assert_abs_diff_eq;

    fn setup(side: Side) -> OffsetResult {
        let baseline = LineSegment::from_coords(0.0, 0.0, 100.0, 0.0);
        LineOffset2D::new(baseline, 10.0, side).execute().unwrap()
    }

    fn tol() -> Tolerance {
        Tolerance::from_arcseconds(1.0).unwrap()
    }

    #[test]
    fn point_square_off_start_on_offset() {
        let offset = setup(Side::Right);
        let r = VerifyPoint::new(&offset, Point2::new(0.0, -10.0), tol())
            .execute()
            .unwrap();
        assert_abs_diff_eq!(r.distance_to_baseline, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.distance_to_offset, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.angle_deg, 90.0, epsilon = 1e-9);
        assert!(r.perpendicular);
        assert!(!r.degenerate);
        assert_eq!(r.position, OffsetPosition::OnOffset);
        assert_eq!(r.angle_dms.to_string(), "90° 00' 00.000\"");
    }

    #[test]
    fn point_between_baseline_and_offset() {
        let offset = setup(Side::Right);
        let r = VerifyPoint::new(&offset, Point2::new(50.0, -4.0), tol())
            .execute()
            .unwrap();
        assert_eq!(r.position, OffsetPosition::Between);
        assert_abs_diff_eq!(r.distance_to_offset, 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.station, 50.0, epsilon = 1e-9);
        assert!(!r.perpendicular);
    }

    #[test]
    fn point_beyond_offset_and_opposite_side() {
        let offset = setup(Side::Left);
        let beyond = VerifyPoint::new(&offset, Point2::new(20.0, 12.5), tol())
            .execute()
            .unwrap();
        assert_eq!(beyond.position, OffsetPosition::Beyond);
        assert_abs_diff_eq!(beyond.signed_distance_to_offset, 2.5, epsilon = 1e-9);

        let opposite = VerifyPoint::new(&offset, Point2::new(20.0, -3.0), tol())
            .execute()
            .unwrap();
        assert_eq!(opposite.position, OffsetPosition::Opposite);
        assert_abs_diff_eq!(opposite.distance_to_offset, 13.0, epsilon = 1e-9);
    }

    #[test]
    fn point_on_baseline_start_is_degenerate() {
        let offset = setup(Side::Left);
        let r = VerifyPoint::new(&offset, Point2::new(0.0, 0.0), tol())
            .execute()
            .unwrap();
        assert!(r.degenerate);
        assert!(r.angle_deg.abs() < 1e-12);
        assert!(!r.perpendicular);
        assert_eq!(r.position, OffsetPosition::Between);
    }

    #[test]
    fn seconds_decimals_are_applied() {
        let offset = setup(Side::Left);
        let r = VerifyPoint::new(&offset, Point2::new(10.0, 10.0), tol())
            .with_seconds_decimals(2)
            .execute()
            .unwrap();
        assert_eq!(r.angle_dms.to_string(), "45° 00' 00.00\"");
    }

    #[test]
    fn distances_follow_the_offsets_own_baseline() {
        // Two offsets of different baselines: each record must be measured
        // against the baseline its offset was generated from.
        let near = setup(Side::Right);
        let far = LineOffset2D::new(
            LineSegment::from_coords(0.0, 50.0, 100.0, 50.0),
            10.0,
            Side::Right,
        )
        .execute()
        .unwrap();
        let p = Point2::new(30.0, 40.0);

        let r_near = VerifyPoint::new(&near, p, tol()).execute().unwrap();
        assert_abs_diff_eq!(r_near.distance_to_baseline, 40.0, epsilon = 1e-9);
        assert_eq!(r_near.position, OffsetPosition::Opposite);

        let r_far = VerifyPoint::new(&far, p, tol()).execute().unwrap();
        assert_abs_diff_eq!(r_far.distance_to_baseline, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r_far.distance_to_offset, 0.0, epsilon = 1e-9);
        assert_eq!(r_far.position, OffsetPosition::OnOffset);
    }

    #[test]
    fn classify_boundaries() {
        assert_eq!(OffsetPosition::classify(0.0, 10.0), OffsetPosition::Between);
        assert_eq!(OffsetPosition::classify(10.0, 10.0), OffsetPosition::OnOffset);
        assert_eq!(OffsetPosition::classify(0.0, 0.0), OffsetPosition::OnOffset);
        assert_eq!(OffsetPosition::classify(-0.5, 0.0), OffsetPosition::Opposite);
        assert_eq!(OffsetPosition::classify(0.5, 0.0), OffsetPosition::Beyond);
    }
}

//! The full request pipeline: offset, verification, formatting, deviation.

mod report;
mod request;

pub use report::SurveyReport;
pub use request::SurveyRequest;

use crate::config::SurveyConfig;
use crate::error::Result;
use crate::geometry::LineSegment;
use crate::math::angle::to_dms;
use crate::math::distance_2d::point_to_line_dist;
use crate::operations::{
    AngleCheck, CheckKind, CheckTarget, DeviationPair, LineOffset2D, Tolerance, VerifyPoint,
};

/// Runs every computation for one [`SurveyRequest`].
#[derive(Debug)]
pub struct Survey<'a> {
    request: &'a SurveyRequest,
    config: &'a SurveyConfig,
}

impl<'a> Survey<'a> {
    /// Creates a new survey computation.
    #[must_use]
    pub fn new(request: &'a SurveyRequest, config: &'a SurveyConfig) -> Self {
        Self { request, config }
    }

    /// Executes the pipeline.
    ///
    /// Any failure aborts the whole request; no partial report is produced.
    ///
    /// # Errors
    ///
    /// - `GeometryError::InvalidBaseline` if the baseline has zero length
    /// - `OperationError::InvalidInput` if the request fails validation
    pub fn execute(&self) -> Result<SurveyReport> {
        let request = self.request;
        request.validate(self.config)?;

        let tolerance = match request.tolerance_arcsec {
            Some(arcsec) => Tolerance::from_arcseconds(arcsec)?,
            None => self.config.tolerance()?,
        };
        let decimals = self.config.seconds_decimals;

        let baseline = request.baseline();
        let offset = LineOffset2D::new(baseline, request.distance, request.side).execute()?;

        let direction_angle_deg = baseline.direction_angle()?;
        let azimuth_deg = baseline.azimuth()?;

        // A zero offset has no connector, so no angle to check.
        let connector = LineSegment::new(*baseline.start(), *offset.offset.start());
        let offset_angle = if connector.is_degenerate() {
            None
        } else {
            Some(
                AngleCheck::new(
                    baseline,
                    CheckTarget::Segment(connector),
                    CheckKind::Perpendicular,
                    tolerance,
                )
                .execute()?,
            )
        };
        let offset_alignment = AngleCheck::new(
            baseline,
            CheckTarget::Segment(offset.offset),
            CheckKind::Alignment,
            tolerance,
        )
        .execute()?;

        let measured_distance =
            point_to_line_dist(offset.offset.start(), baseline.start(), baseline.end())?;

        let verification = request
            .verification_points
            .iter()
            .map(|p| {
                VerifyPoint::new(&offset, *p, tolerance)
                    .with_seconds_decimals(decimals)
                    .execute()
            })
            .collect::<Result<Vec<_>>>()?;

        let deviation = request
            .angular_error_arcsec
            .map(|theta| DeviationPair::from_angular(offset.baseline_length, theta));

        tracing::info!(
            side = %request.side,
            distance = request.distance,
            baseline_length = offset.baseline_length,
            verification_points = verification.len(),
            "survey computed"
        );

        Ok(SurveyReport {
            baseline,
            offset,
            direction_angle_deg,
            direction_angle_dms: to_dms(direction_angle_deg, decimals),
            azimuth_deg,
            azimuth_dms: to_dms(azimuth_deg, decimals),
            offset_angle,
            offset_angle_dms: offset_angle.map(|check| to_dms(check.angle_deg, decimals)),
            offset_alignment,
            measured_distance,
            verification,
            deviation,
            linear_decimals: self.config.linear_decimals,
        })
    }
}

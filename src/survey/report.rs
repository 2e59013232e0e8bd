use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::LineSegment;
use crate::math::angle::{degrees_to_arcsec, AngleDms};
use crate::math::Point2;
use crate::operations::{AngleVerdict, DeviationPair, OffsetResult, VerificationRecord, Verdict};

/// Everything computed for one survey request.
///
/// Plain values only; the plotting layer draws from these fields directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub baseline: LineSegment,
    pub offset: OffsetResult,
    /// Baseline direction, east-zero counter-clockwise.
    pub direction_angle_deg: f64,
    pub direction_angle_dms: AngleDms,
    /// Baseline direction, north-zero clockwise.
    pub azimuth_deg: f64,
    pub azimuth_dms: AngleDms,
    /// Angle between the baseline and the start-to-offset-start connector.
    /// `None` for a zero offset, where the connector has no length.
    pub offset_angle: Option<AngleVerdict>,
    pub offset_angle_dms: Option<AngleDms>,
    /// Angle between the baseline and the offset line.
    pub offset_alignment: AngleVerdict,
    /// Perpendicular distance from the offset line to the baseline, measured
    /// back from the generated endpoints.
    pub measured_distance: f64,
    pub verification: Vec<VerificationRecord>,
    pub deviation: Option<DeviationPair>,
    /// Decimals for coordinates and distances in [`fmt::Display`].
    pub linear_decimals: u8,
}

impl SurveyReport {
    fn write_point(&self, f: &mut fmt::Formatter<'_>, label: &str, p: &Point2) -> fmt::Result {
        let prec = usize::from(self.linear_decimals);
        writeln!(f, "  {label:<6} X = {:.prec$}, Y = {:.prec$}", p.x, p.y)
    }
}

fn verdict_label(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Aligned => "aligned".to_owned(),
        Verdict::Perpendicular => "perpendicular".to_owned(),
        Verdict::Deviated(d) => format!("deviated by {:.2}\"", degrees_to_arcsec(*d)),
    }
}

impl fmt::Display for SurveyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = usize::from(self.linear_decimals);

        writeln!(f, "Baseline")?;
        self.write_point(f, "start", self.baseline.start())?;
        self.write_point(f, "end", self.baseline.end())?;
        writeln!(f, "  length {:.prec$} m", self.offset.baseline_length)?;
        writeln!(
            f,
            "  direction {:.prec$}° ({}), azimuth {:.prec$}° ({})",
            self.direction_angle_deg,
            self.direction_angle_dms,
            self.azimuth_deg,
            self.azimuth_dms
        )?;

        writeln!(f, "Offset ({}, {:.prec$} m)", self.offset.side, self.offset.distance)?;
        self.write_point(f, "start", self.offset.offset.start())?;
        self.write_point(f, "end", self.offset.offset.end())?;
        writeln!(f, "  measured distance {:.prec$} m", self.measured_distance)?;
        match (&self.offset_angle, &self.offset_angle_dms) {
            (Some(check), Some(dms)) => writeln!(
                f,
                "  angle {:.prec$}° ({dms}), {}",
                check.angle_deg,
                verdict_label(&check.verdict)
            )?,
            _ => writeln!(f, "  angle undetermined (zero offset)")?,
        }
        writeln!(
            f,
            "  parallelism {}",
            verdict_label(&self.offset_alignment.verdict)
        )?;

        for (i, r) in self.verification.iter().enumerate() {
            writeln!(f, "Verification point {}", i + 1)?;
            self.write_point(f, "at", &r.point)?;
            writeln!(
                f,
                "  to baseline {:.prec$} m, to offset {:.prec$} m, station {:.prec$} m",
                r.distance_to_baseline, r.distance_to_offset, r.station
            )?;
            if r.degenerate {
                writeln!(f, "  angle undetermined (point on baseline start)")?;
            } else {
                writeln!(
                    f,
                    "  angle {:.prec$}° ({}), {}",
                    r.angle_deg,
                    r.angle_dms,
                    verdict_label(&r.check.verdict)
                )?;
            }
        }

        if let Some(dev) = &self.deviation {
            writeln!(
                f,
                "Deviation {:.2}\" over {:.prec$} m = {:.prec$} mm",
                dev.angular_arcsec, dev.length_m, dev.linear_mm
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deviation_label_in_arcseconds() {
        assert_eq!(verdict_label(&Verdict::Deviated(1.0 / 3600.0)), "deviated by 1.00\"");
        assert_eq!(verdict_label(&Verdict::Deviated(0.5)), "deviated by 1800.00\"");
        assert_eq!(verdict_label(&Verdict::Perpendicular), "perpendicular");
    }
}

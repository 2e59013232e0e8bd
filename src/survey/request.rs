use serde::{Deserialize, Serialize};

use crate::config::SurveyConfig;
use crate::error::{OperationError, RequestError, Result};
use crate::geometry::{LineSegment, Side};
use crate::math::Point2;

/// Inputs of one survey computation.
///
/// Plain data with a stable JSON form, so a surrounding layer can key a cache
/// on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurveyRequest {
    /// Baseline start `[x, y]`, meters.
    pub start: Point2,
    /// Baseline end `[x, y]`, meters.
    pub end: Point2,
    /// Offset distance, meters, `>= 0`.
    pub distance: f64,
    pub side: Side,
    #[serde(default)]
    pub verification_points: Vec<Point2>,
    /// Overrides the configured verifier tolerance.
    #[serde(default)]
    pub tolerance_arcsec: Option<f64>,
    /// Angular error to convert into a linear deviation at the baseline length.
    #[serde(default)]
    pub angular_error_arcsec: Option<f64>,
}

impl SurveyRequest {
    /// Creates a request without verification points or angular error.
    #[must_use]
    pub fn new(start: Point2, end: Point2, distance: f64, side: Side) -> Self {
        Self {
            start,
            end,
            distance,
            side,
            verification_points: Vec::new(),
            tolerance_arcsec: None,
            angular_error_arcsec: None,
        }
    }

    /// Parses a request from JSON.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Parse` for malformed JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let request: Self = serde_json::from_str(json).map_err(RequestError::from)?;
        Ok(request)
    }

    /// Adds a verification point.
    #[must_use]
    pub fn with_verification_point(mut self, point: Point2) -> Self {
        self.verification_points.push(point);
        self
    }

    /// Sets the verifier tolerance in arc-seconds.
    #[must_use]
    pub fn with_tolerance_arcsec(mut self, arcsec: f64) -> Self {
        self.tolerance_arcsec = Some(arcsec);
        self
    }

    /// Sets the angular error in arc-seconds.
    #[must_use]
    pub fn with_angular_error_arcsec(mut self, arcsec: f64) -> Self {
        self.angular_error_arcsec = Some(arcsec);
        self
    }

    /// Returns the baseline segment.
    #[must_use]
    pub fn baseline(&self) -> LineSegment {
        LineSegment::new(self.start, self.end)
    }

    /// Checks the request against `config`.
    ///
    /// The baseline is checked first, so a zero-length baseline is always
    /// reported as such.
    ///
    /// # Errors
    ///
    /// - `GeometryError::InvalidBaseline` if start and end coincide
    /// - `OperationError::InvalidInput` for a negative or non-finite distance,
    ///   non-finite coordinates, a non-positive tolerance, too many
    ///   verification points, or an angular error outside the configured range
    pub fn validate(&self, config: &SurveyConfig) -> Result<()> {
        self.baseline().validated()?;

        let coords_finite = [self.start, self.end]
            .iter()
            .chain(self.verification_points.iter())
            .all(|p| p.x.is_finite() && p.y.is_finite());
        if !coords_finite {
            return Err(invalid_input("coordinates must be finite".to_owned()));
        }

        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(invalid_input(format!(
                "offset distance must be a finite value >= 0, got {}",
                self.distance
            )));
        }

        if let Some(arcsec) = self.tolerance_arcsec {
            if !arcsec.is_finite() || arcsec <= 0.0 {
                return Err(invalid_input(format!(
                    "tolerance_arcsec must be a finite value > 0, got {arcsec}"
                )));
            }
        }

        if self.verification_points.len() > config.max_verification_points {
            return Err(invalid_input(format!(
                "at most {} verification points are supported, got {}",
                config.max_verification_points,
                self.verification_points.len()
            )));
        }

        if let Some(theta) = self.angular_error_arcsec {
            let in_range = match config.angular_error_range {
                Some((lo, hi)) => (lo..=hi).contains(&theta),
                None => theta.is_finite(),
            };
            if !in_range {
                return Err(invalid_input(format!(
                    "angular error {theta}\" is outside the accepted range {:?}",
                    config.angular_error_range
                )));
            }
        }

        Ok(())
    }
}

fn invalid_input(msg: String) -> crate::StakeoutError {
    OperationError::InvalidInput(msg).into()
}

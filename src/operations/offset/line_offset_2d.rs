use serde::{Deserialize, Serialize};

use crate::error::{OperationError, Result};
use crate::geometry::{LineSegment, Side};
use crate::math::vector_2d::rotate_perpendicular;
use crate::math::Vector2;

/// Result of offsetting a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffsetResult {
    /// The baseline the offset was generated from.
    pub baseline: LineSegment,
    /// The generated parallel segment.
    pub offset: LineSegment,
    /// Length of the baseline (and of the offset).
    pub baseline_length: f64,
    /// The requested perpendicular distance.
    pub distance: f64,
    /// The side the offset lies on.
    pub side: Side,
    /// Unit normal from the baseline towards the offset.
    pub normal: Vector2,
}

impl OffsetResult {
    /// Displacement applied to each baseline endpoint (`normal * distance`).
    #[must_use]
    pub fn displacement(&self) -> Vector2 {
        self.normal * self.distance
    }
}

/// Offsets a straight baseline by a perpendicular distance.
///
/// # Sign Convention
///
/// Walking from `start` to `end`:
/// - `Side::Left`: direction rotated +90° (counter-clockwise)
/// - `Side::Right`: direction rotated −90° (clockwise)
///
/// The distance itself is never signed; the side alone selects the half-plane.
#[derive(Debug)]
pub struct LineOffset2D {
    baseline: LineSegment,
    distance: f64,
    side: Side,
}

impl LineOffset2D {
    /// Creates a new line offset operation.
    #[must_use]
    pub fn new(baseline: LineSegment, distance: f64, side: Side) -> Self {
        Self {
            baseline,
            distance,
            side,
        }
    }

    /// Executes the offset.
    ///
    /// Both baseline endpoints are moved by the same displacement, so the
    /// result is parallel to the baseline and has the same length. A zero
    /// distance returns a segment identical to the baseline.
    ///
    /// # Errors
    ///
    /// - `GeometryError::InvalidBaseline` if the baseline has zero length
    /// - `OperationError::InvalidInput` if the distance is negative or not finite
    pub fn execute(&self) -> Result<OffsetResult> {
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "offset distance must be a finite value >= 0, got {}",
                self.distance
            ))
            .into());
        }

        let direction = self.baseline.direction()?;
        let normal = rotate_perpendicular(&direction, self.side)?;
        let offset = self.baseline.translated(&(normal * self.distance));

        tracing::debug!(
            side = %self.side,
            distance = self.distance,
            start_x = offset.start().x,
            start_y = offset.start().y,
            end_x = offset.end().x,
            end_y = offset.end().y,
            "offset line generated"
        );

        Ok(OffsetResult {
            baseline: self.baseline,
            offset,
            baseline_length: self.baseline.length(),
            distance: self.distance,
            side: self.side,
            normal,
        })
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{OperationError, Result};
use crate::math::angle::{arcsec_to_degrees, degrees_to_arcsec};

/// Angular tolerance for perpendicularity and alignment checks.
///
/// Stored in degrees; construct from whichever unit the caller measures in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    degrees: f64,
}

impl Tolerance {
    /// Creates a tolerance from decimal degrees.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `degrees` is not positive or not finite.
    pub fn from_degrees(degrees: f64) -> Result<Self> {
        if !degrees.is_finite() || degrees <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "angular tolerance must be a finite value > 0, got {degrees}°"
            ))
            .into());
        }
        Ok(Self { degrees })
    }

    /// Creates a tolerance from arc-seconds.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `arcsec` is not positive or not finite.
    pub fn from_arcseconds(arcsec: f64) -> Result<Self> {
        Self::from_degrees(arcsec_to_degrees(arcsec))
    }

    /// Returns the tolerance in degrees.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Returns the tolerance in arc-seconds.
    #[must_use]
    pub fn arcseconds(&self) -> f64 {
        degrees_to_arcsec(self.degrees)
    }

    /// Returns `true` if `deviation_deg` is within the tolerance.
    #[must_use]
    pub fn accepts(&self, deviation_deg: f64) -> bool {
        deviation_deg.abs() <= self.degrees
    }
}

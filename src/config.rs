//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::math::angle::{DEFAULT_SECONDS_DECIMALS, MAX_SECONDS_DECIMALS};
use crate::operations::Tolerance;

/// Settings shared by every survey request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurveyConfig {
    /// Verifier tolerance used when a request does not carry its own.
    pub tolerance_arcsec: f64,
    /// Decimals kept on the seconds of DMS angles.
    pub seconds_decimals: u8,
    /// Decimals for coordinates and distances in textual reports.
    pub linear_decimals: u8,
    /// Maximum number of verification points per request.
    pub max_verification_points: usize,
    /// Accepted range for an angular error input, in arc-seconds.
    /// `None` accepts any finite value.
    pub angular_error_range: Option<(f64, f64)>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            tolerance_arcsec: 1.0,
            seconds_decimals: DEFAULT_SECONDS_DECIMALS,
            linear_decimals: 3,
            max_verification_points: 5,
            angular_error_range: Some((1.0, 5.0)),
        }
    }
}

impl SurveyConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::Invalid` if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance_arcsec.is_finite() || self.tolerance_arcsec <= 0.0 {
            return Err(invalid(format!(
                "tolerance_arcsec must be a finite value > 0, got {}",
                self.tolerance_arcsec
            )));
        }
        if self.seconds_decimals > MAX_SECONDS_DECIMALS {
            return Err(invalid(format!(
                "seconds_decimals must be at most {MAX_SECONDS_DECIMALS}, got {}",
                self.seconds_decimals
            )));
        }
        if self.linear_decimals > 9 {
            return Err(invalid(format!(
                "linear_decimals must be at most 9, got {}",
                self.linear_decimals
            )));
        }
        if let Some((lo, hi)) = self.angular_error_range {
            if !lo.is_finite() || !hi.is_finite() || lo > hi {
                return Err(invalid(format!(
                    "angular_error_range must be a finite [min, max] pair, got [{lo}, {hi}]"
                )));
            }
        }
        Ok(())
    }

    /// Returns the default verifier tolerance.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `tolerance_arcsec` is invalid.
    pub fn tolerance(&self) -> Result<Tolerance> {
        Tolerance::from_arcseconds(self.tolerance_arcsec)
    }
}

fn invalid(msg: String) -> crate::StakeoutError {
    ConfigError::Invalid(msg).into()
}

//! Sexagesimal (degrees–minutes–seconds) angles and direction conventions.
//!
//! Two direction conventions are used for reporting:
//! - **direction angle**: east-zero, counter-clockwise, in `(-180, 180]`
//! - **azimuth**: north-zero, clockwise, in `[0, 360)`
//!
//! Both are computed from the same vector and are never mixed internally.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

use super::{Vector2, ARCSEC_PER_DEGREE};

/// Default number of decimals kept on the seconds component.
pub const DEFAULT_SECONDS_DECIMALS: u8 = 3;

/// Largest supported number of decimals on the seconds component.
pub const MAX_SECONDS_DECIMALS: u8 = 6;

/// A signed angle in degrees, minutes and seconds.
///
/// The sign is carried once, on the whole value; every component is
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleDms {
    pub negative: bool,
    pub degrees: u32,
    /// Whole minutes, `0..=59`.
    pub minutes: u32,
    /// Seconds in `[0, 60)`, rounded to `decimals` places.
    pub seconds: f64,
    /// Decimals used when the seconds were rounded and when displaying.
    pub decimals: u8,
}

impl AngleDms {
    /// Creates a DMS angle from its components.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `minutes > 59`, if
    /// `seconds` is outside `[0, 60)`, or if `decimals` exceeds
    /// [`MAX_SECONDS_DECIMALS`].
    pub fn new(negative: bool, degrees: u32, minutes: u32, seconds: f64, decimals: u8) -> Result<Self> {
        if minutes > 59 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "minutes",
                value: f64::from(minutes),
                min: 0.0,
                max: 59.0,
            }
            .into());
        }
        if !(0.0..60.0).contains(&seconds) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "seconds",
                value: seconds,
                min: 0.0,
                max: 60.0,
            }
            .into());
        }
        if decimals > MAX_SECONDS_DECIMALS {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "decimals",
                value: f64::from(decimals),
                min: 0.0,
                max: f64::from(MAX_SECONDS_DECIMALS),
            }
            .into());
        }
        Ok(Self {
            negative,
            degrees,
            minutes,
            seconds,
            decimals,
        })
    }

    /// Converts back to decimal degrees.
    #[must_use]
    pub fn to_decimal(&self) -> f64 {
        from_dms(self)
    }
}

impl fmt::Display for AngleDms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        let prec = usize::from(self.decimals);
        let width = if prec == 0 { 2 } else { prec + 3 };
        write!(
            f,
            "{sign}{}° {:02}' {:0width$.prec$}\"",
            self.degrees, self.minutes, self.seconds
        )
    }
}

/// Converts decimal degrees to DMS, rounding seconds to `decimals` places.
///
/// Rounding that reaches 60 seconds (or 60 minutes) carries into the next
/// component, so `minutes < 60` and `seconds < 60` always hold. A value that
/// rounds to zero is reported as positive. `decimals` is capped at
/// [`MAX_SECONDS_DECIMALS`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_dms(decimal_degrees: f64, decimals: u8) -> AngleDms {
    let decimals = decimals.min(MAX_SECONDS_DECIMALS);
    let factor = 10f64.powi(i32::from(decimals));

    let abs = decimal_degrees.abs();
    let mut degrees = abs.trunc();
    let minutes_f = (abs - degrees) * 60.0;
    let mut minutes = minutes_f.trunc();
    let mut seconds = ((minutes_f - minutes) * 60.0 * factor).round() / factor;

    if seconds >= 60.0 {
        seconds -= 60.0;
        minutes += 1.0;
    }
    if minutes >= 60.0 {
        minutes -= 60.0;
        degrees += 1.0;
    }

    let is_zero = degrees == 0.0 && minutes == 0.0 && seconds == 0.0;
    AngleDms {
        negative: decimal_degrees < 0.0 && !is_zero,
        degrees: degrees as u32,
        minutes: minutes as u32,
        seconds,
        decimals,
    }
}

/// Converts a DMS angle back to decimal degrees.
#[must_use]
pub fn from_dms(dms: &AngleDms) -> f64 {
    let magnitude =
        f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / ARCSEC_PER_DEGREE;
    if dms.negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Converts arc-seconds to decimal degrees.
#[must_use]
pub fn arcsec_to_degrees(arcsec: f64) -> f64 {
    arcsec / ARCSEC_PER_DEGREE
}

/// Converts decimal degrees to arc-seconds.
#[must_use]
pub fn degrees_to_arcsec(degrees: f64) -> f64 {
    degrees * ARCSEC_PER_DEGREE
}

/// Direction angle of `v`: east-zero, counter-clockwise, in `(-180, 180]`.
#[must_use]
pub fn direction_angle(v: &Vector2) -> f64 {
    v.y.atan2(v.x).to_degrees()
}

/// Azimuth of `v`: north-zero, clockwise, in `[0, 360)`.
#[must_use]
pub fn azimuth(v: &Vector2) -> f64 {
    normalize_azimuth(v.x.atan2(v.y).to_degrees())
}

/// Wraps an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_azimuth(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

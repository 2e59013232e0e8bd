//! Conversion between angular error and linear displacement.
//!
//! An angular error `θ` observed at the start of a baseline of length `L`
//! displaces the far end by `L · tan(θ)`. Survey error budgets quote `θ` in
//! arc-seconds and the displacement in millimeters.

use serde::{Deserialize, Serialize};

use crate::math::angle::arcsec_to_degrees;
use crate::math::ARCSEC_PER_DEGREE;

/// Angular deviations above this (in arc-seconds) point at a blunder rather
/// than normal measurement error.
const BLUNDER_THRESHOLD_ARCSEC: f64 = ARCSEC_PER_DEGREE;

/// An angular deviation and the linear displacement it causes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviationPair {
    /// Baseline length the deviation was evaluated over, in meters.
    pub length_m: f64,
    pub angular_arcsec: f64,
    pub linear_mm: f64,
}

impl DeviationPair {
    /// Builds the pair from an angular deviation.
    #[must_use]
    pub fn from_angular(length_m: f64, angular_arcsec: f64) -> Self {
        Self {
            length_m,
            angular_arcsec,
            linear_mm: linear_deviation_mm(length_m, angular_arcsec),
        }
    }

    /// Builds the pair from a linear displacement.
    #[must_use]
    pub fn from_linear(length_m: f64, linear_mm: f64) -> Self {
        Self {
            length_m,
            angular_arcsec: angular_deviation_arcsec(length_m, linear_mm),
            linear_mm,
        }
    }
}

/// Returns the linear displacement in millimeters caused by an angular
/// deviation of `theta_arcsec` over `length_m` meters.
///
/// The result is a magnitude: the sign of `theta_arcsec` is ignored, so the
/// value is `0` at `θ = 0` and grows with `|θ|` and with `length_m`.
#[must_use]
pub fn linear_deviation_mm(length_m: f64, theta_arcsec: f64) -> f64 {
    let theta = theta_arcsec.abs();
    if theta > BLUNDER_THRESHOLD_ARCSEC {
        tracing::warn!(
            theta_arcsec,
            "angular deviation exceeds 1 degree, likely a measurement blunder"
        );
    }
    length_m * arcsec_to_degrees(theta).to_radians().tan() * 1000.0
}

/// Returns the angular deviation in arc-seconds that displaces the far end
/// of a `length_m` baseline by `linear_mm` millimeters.
///
/// Like [`linear_deviation_mm`], the result is a magnitude. A zero-length
/// baseline yields `0` for a zero displacement and 90° otherwise.
#[must_use]
pub fn angular_deviation_arcsec(length_m: f64, linear_mm: f64) -> f64 {
    let linear_m = linear_mm.abs() / 1000.0;
    linear_m.atan2(length_m.abs()).to_degrees() * ARCSEC_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn zero_angle_zero_displacement() {
        assert!(linear_deviation_mm(250.0, 0.0).abs() < 1e-15);
    }

    #[test]
    fn one_arcsecond_over_100_m() {
        // tan(1") ≈ 4.8481e-6, so 100 m → 0.48481 mm.
        assert_abs_diff_eq!(linear_deviation_mm(100.0, 1.0), 0.484_813_681, epsilon = 1e-8);
    }

    #[test]
    fn sign_of_angle_is_ignored() {
        assert_abs_diff_eq!(
            linear_deviation_mm(50.0, -3.0),
            linear_deviation_mm(50.0, 3.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn inverse_recovers_angle() {
        let mm = linear_deviation_mm(19.946, 5.0);
        assert_relative_eq!(angular_deviation_arcsec(19.946, mm), 5.0, max_relative = 1e-9);
    }

    #[test]
    fn pair_constructors_agree() {
        let a = DeviationPair::from_angular(120.0, 2.5);
        let b = DeviationPair::from_linear(120.0, a.linear_mm);
        assert_relative_eq!(a.angular_arcsec, b.angular_arcsec, max_relative = 1e-9);
    }

    #[test]
    fn zero_length_inverse() {
        assert!(angular_deviation_arcsec(0.0, 0.0).abs() < 1e-15);
        assert_abs_diff_eq!(angular_deviation_arcsec(0.0, 1.0), 324_000.0, epsilon = 1e-6);
    }

    proptest! {
        #[test]
        fn prop_increasing_in_angle(l in 0.1..1e4f64, t1 in 0.0..600.0f64, dt in 0.01..60.0f64) {
            let t2 = t1 + dt;
            prop_assert!(linear_deviation_mm(l, t2) > linear_deviation_mm(l, t1));
            prop_assert!(linear_deviation_mm(l, -t2) > linear_deviation_mm(l, -t1));
        }

        #[test]
        fn prop_increasing_in_length(l1 in 0.1..1e4f64, dl in 0.01..100.0f64, t in 0.1..600.0f64) {
            prop_assert!(linear_deviation_mm(l1 + dl, t) > linear_deviation_mm(l1, t));
        }
    }
}

use crate::error::{GeometryError, Result};

use super::vector_2d::cross_2d;
use super::{Point2, TOLERANCE};

/// Returns the perpendicular distance from `p` to the infinite line through
/// `a` and `b`.
///
/// Computed as the parallelogram area `|(b - a) × (p - a)|` over `|b - a|`.
///
/// # Errors
///
/// Returns `GeometryError::InvalidBaseline` if `a` and `b` coincide.
pub fn point_to_line_dist(p: &Point2, a: &Point2, b: &Point2) -> Result<f64> {
    Ok(signed_point_to_line_dist(p, a, b)?.abs())
}

/// Returns the signed perpendicular distance from `p` to the infinite line
/// through `a` and `b`.
///
/// Positive when `p` is left of the direction `a → b`, negative when right.
///
/// # Errors
///
/// Returns `GeometryError::InvalidBaseline` if `a` and `b` coincide.
pub fn signed_point_to_line_dist(p: &Point2, a: &Point2, b: &Point2) -> Result<f64> {
    let dir = b - a;
    let len = dir.norm();
    if len < TOLERANCE {
        return Err(GeometryError::InvalidBaseline { x: a.x, y: a.y }.into());
    }
    Ok(cross_2d(&dir, &(p - a)) / len)
}

/// Returns the station of `p` along the line `a → b`: the signed distance
/// from `a` to the foot of the perpendicular dropped from `p`.
///
/// # Errors
///
/// Returns `GeometryError::InvalidBaseline` if `a` and `b` coincide.
pub fn station_along_line(p: &Point2, a: &Point2, b: &Point2) -> Result<f64> {
    let dir = b - a;
    let len = dir.norm();
    if len < TOLERANCE {
        return Err(GeometryError::InvalidBaseline { x: a.x, y: a.y }.into());
    }
    Ok((p - a).dot(&dir) / len)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector2;

    const TOL: f64 = 1e-9;

    #[test]
    fn line_dist_perpendicular_projection() {
        // Point (1, 1) to line (0,0)→(2,0). Foot at (1,0), dist = 1.
        let d = point_to_line_dist(
            &Point2::new(1.0, 1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        )
        .unwrap();
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_uses_infinite_extension() {
        // Point (-5, 3) lies before the segment start; the line extends past it.
        let d = point_to_line_dist(
            &Point2::new(-5.0, 3.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        )
        .unwrap();
        assert!((d - 3.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_midpoint_is_zero() {
        let a = Point2::new(984.765, 964.723);
        let b = Point2::new(997.622, 980.027);
        let mid = nalgebra::center(&a, &b);
        let d = point_to_line_dist(&mid, &a, &b).unwrap();
        assert!(d.abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_constructed_point() {
        let a = Point2::new(984.765, 964.723);
        let b = Point2::new(997.622, 980.027);
        let dir = (b - a).normalize();
        let normal = Vector2::new(-dir.y, dir.x);
        let p = a + dir * 4.2 + normal * 7.5;
        let d = point_to_line_dist(&p, &a, &b).unwrap();
        assert!((d - 7.5).abs() < TOL, "d={d}");
    }

    #[test]
    fn signed_dist_left_positive_right_negative() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        let left = signed_point_to_line_dist(&Point2::new(3.0, 2.0), &a, &b).unwrap();
        let right = signed_point_to_line_dist(&Point2::new(3.0, -2.0), &a, &b).unwrap();
        assert!((left - 2.0).abs() < TOL, "left={left}");
        assert!((right + 2.0).abs() < TOL, "right={right}");
    }

    #[test]
    fn degenerate_line_is_an_error() {
        let a = Point2::new(5.0, 5.0);
        let err = point_to_line_dist(&Point2::new(0.0, 0.0), &a, &a).unwrap_err();
        assert!(err.is_invalid_baseline());
        assert!(signed_point_to_line_dist(&Point2::new(0.0, 0.0), &a, &a).is_err());
        assert!(station_along_line(&Point2::new(0.0, 0.0), &a, &a).is_err());
    }

    #[test]
    fn station_before_and_after_start() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(0.0, 10.0);
        let s = station_along_line(&Point2::new(4.0, 7.0), &a, &b).unwrap();
        assert!((s - 7.0).abs() < TOL, "s={s}");
        let s = station_along_line(&Point2::new(-1.0, -2.0), &a, &b).unwrap();
        assert!((s + 2.0).abs() < TOL, "s={s}");
    }
}

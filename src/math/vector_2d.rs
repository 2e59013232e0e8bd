//! Elementary 2D vector utilities.
//!
//! Angles returned here are in degrees. Rotation follows the crate-wide
//! [`Side`] convention: walking along a direction, `Left` is a +90°
//! (counter-clockwise) turn and `Right` is a −90° (clockwise) turn.

use crate::error::{GeometryError, Result};
use crate::geometry::Side;

use super::{Vector2, TOLERANCE};

/// Returns the z component of the cross product `a × b`.
///
/// Positive when `b` lies counter-clockwise from `a`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns the angle between two vectors in degrees, in `[0, 180]`.
///
/// A zero-length input carries no direction, so the angle is `0.0` by
/// convention. Use [`try_angle_between`] when that case must be detected.
#[must_use]
pub fn angle_between(v1: &Vector2, v2: &Vector2) -> f64 {
    try_angle_between(v1, v2).unwrap_or(0.0)
}

/// Returns the angle between two vectors in degrees, in `[0, 180]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos`, so rounding noise on
/// (anti)parallel vectors never produces `NaN`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateComparisonVector` if either vector has
/// zero length.
pub fn try_angle_between(v1: &Vector2, v2: &Vector2) -> Result<f64> {
    let n1 = v1.norm();
    let n2 = v2.norm();
    if n1 < TOLERANCE || n2 < TOLERANCE {
        return Err(GeometryError::DegenerateComparisonVector.into());
    }
    let cos = (v1.dot(v2) / (n1 * n2)).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees())
}

/// Rotates `direction` by 90° towards `side` and returns the unit result.
///
/// - `Left`: `(x, y) → (-y, x)`
/// - `Right`: `(x, y) → (y, -x)`
///
/// # Errors
///
/// Returns `GeometryError::DegenerateComparisonVector` if `direction` has
/// zero length.
pub fn rotate_perpendicular(direction: &Vector2, side: Side) -> Result<Vector2> {
    let len = direction.norm();
    if len < TOLERANCE {
        return Err(GeometryError::DegenerateComparisonVector.into());
    }
    let unit = direction / len;
    Ok(match side {
        Side::Left => Vector2::new(-unit.y, unit.x),
        Side::Right => Vector2::new(unit.y, -unit.x),
    })
}

//! Small vector helpers for orienting and scaling display vectors.

use std::f64::consts::PI;

use nalgebra::Vector2;

use crate::error::{Error, Result};

/// The side of a directed tangent a curve bends towards
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// Counter clockwise of the tangent i.e. a left turn
    Left,

    /// Clockwise of the tangent i.e. a right turn
    Right,
}

/// Determines which side of `tangent` the `acceleration` points to.
///
/// The angle from `tangent` to `acceleration` is normalized into `[0, 2π)`.
/// Angles up to and including `π` count as [`Side::Left`], larger ones as [`Side::Right`].
/// Collinear vectors therefore resolve to the left.
pub fn turn_side(tangent: &Vector2<f64>, acceleration: &Vector2<f64>) -> Side {
    let mut theta = acceleration.y.atan2(acceleration.x) - tangent.y.atan2(tangent.x);
    if theta < 0.0 {
        theta += 2.0 * PI;
    }

    if theta <= PI {
        Side::Left
    } else {
        Side::Right
    }
}

/// Rotates `v` by 90° counter clockwise.
pub fn left_normal(v: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Rotates `v` by 90° clockwise.
pub fn right_normal(v: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(v.y, -v.x)
}

/// Picks the normal of `tangent` pointing to the side the curve is turning to.
///
/// *The resulting vector is not normalized!* It has the same length as `tangent`.
pub fn curvature_direction(tangent: &Vector2<f64>, acceleration: &Vector2<f64>) -> Vector2<f64> {
    match turn_side(tangent, acceleration) {
        Side::Left => left_normal(tangent),
        Side::Right => right_normal(tangent),
    }
}

/// Scales `v` to have the length `length` while keeping its direction.
///
/// # Errors
/// [`Error::Degenerate`] if `v` is the zero vector or its norm isn't finite.
pub fn rescale(v: &Vector2<f64>, length: f64) -> Result<Vector2<f64>> {
    let norm = v.norm();
    if norm == 0.0 || !norm.is_finite() {
        return Err(Error::Degenerate);
    }
    Ok(v * (length / norm))
}

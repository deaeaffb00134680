//! Numeric helpers shared by the renderer and the integral image.

/// Rounds to the nearest integer with halves going up: `floor(v + 0.5)`.
///
/// Unlike `f32::round`, negative halves round towards positive infinity, so
/// `f_round(-0.5) == 0`.
#[inline]
pub fn f_round(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

/// Rotates `(x, y)` by an angle given as precomputed `(sin, cos)`.
#[inline]
pub(crate) fn rotate(x: f32, y: f32, sin: f32, cos: f32) -> (f32, f32) {
    (cos * x - sin * y, sin * x + cos * y)
}

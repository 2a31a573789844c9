mod vector;
mod matrix;
mod rotation;

pub use vector::{Vector3, Vector4};
pub use matrix::Matrix4;
pub use rotation::Quaternion;

/// Anything smaller than this is treated as zero, e.g. a body at rest
pub const EPSILON: f32 = 1.0e-6;

/// Returns true if the two floating point values are approximately equal
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}

/// Clamps a value between a minimum and maximum value
///
/// Unlike `f32::clamp` this never panics when `min > max`; the lower bound is
/// checked first, so a degenerate range collapses onto `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Floating point remainder of `value / divisor`
///
/// Only the fractional part of the quotient is kept, so the result carries the
/// sign of `value`.
#[inline]
pub fn modulo(value: f32, divisor: f32) -> f32 {
    (value / divisor).fract() * divisor
}

/// Linearly interpolates between two values
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Converts degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Converts radians to degrees
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}

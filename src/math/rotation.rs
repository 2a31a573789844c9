use crate::math::{Vector3, Vector4};
use std::fmt;
use std::ops::{Mul, MulAssign};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A rotation quaternion
///
/// `(x, y, z)` is the vector part and `w` the scalar part, the same layout as
/// [`Vector4`]. Rotation operators are expected to be unit length; nothing
/// here normalizes on the caller's behalf.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// The rotation that leaves every vector alone
    #[inline]
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Creates a quaternion rotating `angle` radians about `axis`
    ///
    /// The axis is used as given; pass a unit vector to get a unit quaternion.
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Self {
        let (sin, cos) = (angle / 2.0).sin_cos();
        Self {
            x: axis.x * sin,
            y: axis.y * sin,
            z: axis.z * sin,
            w: cos,
        }
    }

    /// Creates the rotation equivalent to [`Vector3::rotate`] with the same angles
    ///
    /// Z is applied first, then Y, then X.
    pub fn from_euler(x: f32, y: f32, z: f32) -> Self {
        Self::from_axis_angle(Vector3::unit_x(), x)
            * Self::from_axis_angle(Vector3::unit_y(), y)
            * Self::from_axis_angle(Vector3::unit_z(), z)
    }

    /// Returns the vector part
    #[inline]
    pub fn vector_part(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Negates the vector part
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Returns the multiplicative inverse, `conjugate / |q|²`
    ///
    /// For a unit quaternion this equals the conjugate.
    #[inline]
    pub fn inverse(&self) -> Self {
        (Vector4::from(self.conjugate()) / self.length_squared()).into()
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        Vector4::from(*self).length_squared()
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the unit quaternion, or this quaternion unchanged if its length is zero
    #[inline]
    pub fn normalize(&self) -> Self {
        Vector4::from(*self).normalize().into()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        Vector4::from(*self).dot(&Vector4::from(*other))
    }

    /// Rotates `source` by this quaternion
    ///
    /// Evaluates `2·(q·s)·q + (w² − q·q)·s + 2w·(q × s)` in exactly that order;
    /// recorded trajectories depend on the summation order.
    pub fn rotate_vector(&self, source: Vector3) -> Vector3 {
        let q_vec = self.vector_part();
        let scalar = self.w;

        let dot_q_s = q_vec.dot(&source);
        let dot_q_q = q_vec.dot(&q_vec);
        let cross_q_s = q_vec.cross(&source);

        let mut rotated = q_vec;
        rotated.scale(2.0 * dot_q_s);
        rotated.add_scaled(source, scalar * scalar - dot_q_q);
        rotated.add_scaled(cross_q_s, 2.0 * scalar);
        rotated
    }

    /// Rotates `source` with the full sandwich product `q · (s, 0) · q⁻¹`
    ///
    /// Slower than [`Quaternion::rotate_vector`]; kept as the textbook reference.
    pub fn rotate_vector_pure(&self, source: Vector3) -> Vector3 {
        let expanded = Quaternion::new(source.x, source.y, source.z, 0.0);
        (*self * expanded * self.inverse()).vector_part()
    }

    /// Convert to nalgebra Quaternion
    #[inline]
    pub fn to_nalgebra(&self) -> nalgebra::Quaternion<f32> {
        nalgebra::Quaternion::new(self.w, self.x, self.y, self.z)
    }

    /// Convert from nalgebra Quaternion
    #[inline]
    pub fn from_nalgebra(q: &nalgebra::Quaternion<f32>) -> Self {
        Self {
            x: q.vector()[0],
            y: q.vector()[1],
            z: q.vector()[2],
            w: q.scalar(),
        }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Vector4> for Quaternion {
    #[inline]
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Quaternion> for Vector4 {
    #[inline]
    fn from(q: Quaternion) -> Self {
        Vector4::new(q.x, q.y, q.z, q.w)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}; {})", self.x, self.y, self.z, self.w)
    }
}

// Hamilton product
impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl MulAssign for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

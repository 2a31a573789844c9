use crate::math::{Quaternion, Vector3, Vector4};
use nalgebra as na;
use std::fmt;
use std::ops::Mul;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A 4x4 matrix acting on column vectors, stored as `data[row][column]`
///
/// Used only for render-side read-out: body and collider transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix4 {
    pub data: [[f32; 4]; 4],
}

impl Matrix4 {
    #[inline]
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Self { data }
    }

    /// Builds a matrix whose `(row, column)` entry is `entry(row, column)`
    #[inline]
    pub fn from_fn(mut entry: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = [[0.0; 4]; 4];
        for (r, row) in data.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = entry(r, c);
            }
        }
        Self { data }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal(Vector4::new(1.0, 1.0, 1.0, 1.0))
    }

    #[inline]
    pub fn zero() -> Self {
        Self { data: [[0.0; 4]; 4] }
    }

    #[inline]
    pub fn from_diagonal(diagonal: Vector4) -> Self {
        let diagonal: [f32; 4] = diagonal.into();
        Self::from_fn(|r, c| if r == c { diagonal[r] } else { 0.0 })
    }

    /// Translation by `offset`, stored in the last column
    #[inline]
    pub fn from_translation(offset: Vector3) -> Self {
        let mut translation = Self::identity();
        for (row, value) in <[f32; 3]>::from(offset).into_iter().enumerate() {
            translation.data[row][3] = value;
        }
        translation
    }

    /// Non-uniform scale along the three axes
    #[inline]
    pub fn from_scale(scale: Vector3) -> Self {
        Self::from_diagonal(Vector4::from_vector3(scale, 1.0))
    }

    /// Rotation of `angle` radians about the x axis
    pub fn from_rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Self::identity();
        result.data[1][1] = cos;
        result.data[1][2] = -sin;
        result.data[2][1] = sin;
        result.data[2][2] = cos;
        result
    }

    /// Rotation of `angle` radians about the y axis
    pub fn from_rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Self::identity();
        result.data[0][0] = cos;
        result.data[0][2] = sin;
        result.data[2][0] = -sin;
        result.data[2][2] = cos;
        result
    }

    /// Rotation of `angle` radians about the z axis
    pub fn from_rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Self::identity();
        result.data[0][0] = cos;
        result.data[0][1] = -sin;
        result.data[1][0] = sin;
        result.data[1][1] = cos;
        result
    }

    /// Euler rotation matching [`Vector3::rotate`]: Z is applied first, then Y, then X
    pub fn from_euler(x: f32, y: f32, z: f32) -> Self {
        Self::from_rotation_x(x)
            .multiply_matrix(&Self::from_rotation_y(y))
            .multiply_matrix(&Self::from_rotation_z(z))
    }

    /// Rotation matrix of a unit quaternion
    pub fn from_quaternion(q: &Quaternion) -> Self {
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);
        Self {
            data: [
                [1.0 - 2.0 * (y * y + z * z), 2.0 * (x * y - z * w), 2.0 * (x * z + y * w), 0.0],
                [2.0 * (x * y + z * w), 1.0 - 2.0 * (x * x + z * z), 2.0 * (y * z - x * w), 0.0],
                [2.0 * (x * z - y * w), 2.0 * (y * z + x * w), 1.0 - 2.0 * (x * x + y * y), 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_fn(|r, c| self.data[c][r])
    }

    #[inline]
    pub fn multiply_vector(&self, v: Vector4) -> Vector4 {
        let row = |r: &[f32; 4]| r[0] * v.x + r[1] * v.y + r[2] * v.z + r[3] * v.w;
        Vector4::new(
            row(&self.data[0]),
            row(&self.data[1]),
            row(&self.data[2]),
            row(&self.data[3]),
        )
    }

    /// Transforms a point (`w = 1`), dividing through by the resulting `w` unless it vanishes
    #[inline]
    pub fn multiply_point(&self, point: Vector3) -> Vector3 {
        let projected = self.multiply_vector(Vector4::from_vector3(point, 1.0));
        if crate::math::approx_zero(projected.w) {
            projected.xyz()
        } else {
            projected.xyz() / projected.w
        }
    }

    /// Transforms a direction (`w = 0`), so translation is ignored
    #[inline]
    pub fn multiply_direction(&self, v: Vector3) -> Vector3 {
        self.multiply_vector(Vector4::from_vector3(v, 0.0)).xyz()
    }

    /// `self * other`; applying the product applies `other` first
    pub fn multiply_matrix(&self, other: &Self) -> Self {
        Self::from_fn(|r, c| (0..4).map(|k| self.data[r][k] * other.data[k][c]).sum())
    }

    #[inline]
    pub fn get_translation(&self) -> Vector3 {
        Vector3::new(self.data[0][3], self.data[1][3], self.data[2][3])
    }

    #[inline]
    pub fn to_nalgebra(&self) -> na::Matrix4<f32> {
        na::Matrix4::from_fn(|r, c| self.data[r][c])
    }

    #[inline]
    pub fn from_nalgebra(m: &na::Matrix4<f32>) -> Self {
        Self::from_fn(|r, c| m[(r, c)])
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply_matrix(&rhs)
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "| {:>9.4} {:>9.4} {:>9.4} {:>9.4} |", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

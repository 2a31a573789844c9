use nalgebra as na;
use std::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign, DivAssign};
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Component-wise arithmetic shared by the vector types
macro_rules! component_ops {
    ($name:ident { $($field:ident),+ }) => {
        impl Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl Div<f32> for $name {
            type Output = Self;
            #[inline]
            fn div(self, rhs: f32) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                self.add_scaled(rhs, 1.0);
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                self.add_scaled(rhs, -1.0);
            }
        }

        impl MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                self.scale(rhs);
            }
        }

        impl DivAssign<f32> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                $(self.$field /= rhs;)+
            }
        }

        impl approx::AbsDiffEq for $name {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                true $(&& approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))+
            }
        }

        impl approx::RelativeEq for $name {
            fn default_max_relative() -> f32 {
                f32::EPSILON
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                true $(&& approx::RelativeEq::relative_eq(&self.$field, &other.$field, epsilon, max_relative))+
            }
        }
    };
}

/// Position, velocity, force or torque in world space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Four-component vector; quaternions share its layout
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// A vector with every component set to one
    pub const ONE: Self = Self { x: 1.0, y: 1.0, z: 1.0 };

    /// +y
    pub const UP: Self = Self { x: 0.0, y: 1.0, z: 0.0 };

    /// -y
    pub const DOWN: Self = Self { x: 0.0, y: -1.0, z: 0.0 };

    /// -x
    pub const LEFT: Self = Self { x: -1.0, y: 0.0, z: 0.0 };

    /// +x
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0, z: 0.0 };

    /// +z
    pub const FRONT: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// -z
    pub const BACK: Self = Self { x: 0.0, y: 0.0, z: -1.0 };

    /// Builds a vector from its components
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub fn one() -> Self {
        Self::ONE
    }

    /// +x
    #[inline]
    pub fn unit_x() -> Self {
        Self { x: 1.0, y: 0.0, z: 0.0 }
    }

    /// +y
    #[inline]
    pub fn unit_y() -> Self {
        Self { x: 0.0, y: 1.0, z: 0.0 }
    }

    /// +z
    #[inline]
    pub fn unit_z() -> Self {
        Self { x: 0.0, y: 0.0, z: 1.0 }
    }

    /// Adds `source * factor` into this vector
    #[inline]
    pub fn add_scaled(&mut self, source: Self, factor: f32) {
        self.x += source.x * factor;
        self.y += source.y * factor;
        self.z += source.z * factor;
    }

    /// Multiplies every component by `factor` in place
    #[inline]
    pub fn scale(&mut self, factor: f32) {
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
    }

    /// Resets the vector to (0, 0, 0)
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::ZERO;
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product, `self × other`
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean magnitude
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a unit vector with the same direction
    ///
    /// A vector whose length is exactly zero is returned unchanged instead of
    /// being filled with NaNs. Contact code relies on this for coincident points.
    #[inline]
    pub fn normalize(&self) -> Self {
        let mut unit = *self;
        unit.normalize_mut();
        unit
    }

    /// Normalizes the vector in-place, leaving a zero vector untouched
    #[inline]
    pub fn normalize_mut(&mut self) {
        let length = self.length();
        if length != 0.0 {
            self.scale(1.0 / length);
        }
    }

    /// True if the squared length is below [`EPSILON`](crate::math::EPSILON)
    #[inline]
    pub fn is_zero(&self) -> bool {
        crate::math::approx_zero(self.length_squared())
    }

    /// Returns true if every component is finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn to_nalgebra(&self) -> na::Vector3<f32> {
        na::Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn from_nalgebra(v: &na::Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance, `|other - self|²`
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        (*other - *self).length_squared()
    }

    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        *self + (*other - *self) * t
    }

    /// Rotates the vector about the x axis by `angle` radians (right-handed)
    pub fn rotate_x(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let copy = *self;
        self.y = copy.y * cos - copy.z * sin;
        self.z = copy.y * sin + copy.z * cos;
    }

    /// Rotates the vector about the y axis by `angle` radians (right-handed)
    pub fn rotate_y(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let copy = *self;
        self.x = copy.x * cos + copy.z * sin;
        self.z = -copy.x * sin + copy.z * cos;
    }

    /// Rotates the vector about the z axis by `angle` radians (right-handed)
    pub fn rotate_z(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let copy = *self;
        self.x = copy.x * cos - copy.y * sin;
        self.y = copy.x * sin + copy.y * cos;
    }

    /// Rotates the vector by Euler angles, applying Z first, then Y, then X
    ///
    /// Renderers build their model matrices from the same order, so it must
    /// not change.
    pub fn rotate(&mut self, x_angle: f32, y_angle: f32, z_angle: f32) {
        self.rotate_z(z_angle);
        self.rotate_y(y_angle);
        self.rotate_x(x_angle);
    }

    /// Returns the part of this vector that points along `direction`
    ///
    /// For (1, 2, 4) and direction (0, 1, 0) the result is (0, 2, 0). The
    /// magnitude of `direction` does not matter.
    pub fn portion_in_direction(&self, direction: &Self) -> Self {
        let original_unit = self.normalize();
        let direction_unit = direction.normalize();
        let original_length = self.length();
        let dot_units = original_unit.dot(&direction_unit);

        let mut portion = direction_unit;
        portion.scale(original_length * dot_units);
        portion
    }

    /// Returns the part of this vector perpendicular to `direction`
    #[inline]
    pub fn portion_perpendicular(&self, direction: &Self) -> Self {
        *self - self.portion_in_direction(direction)
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from(array: [f32; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

component_ops!(Vector3 { x, y, z });

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Vector4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub fn one() -> Self {
        Self { x: 1.0, y: 1.0, z: 1.0, w: 1.0 }
    }

    /// Adds `source * factor` into this vector
    #[inline]
    pub fn add_scaled(&mut self, source: Self, factor: f32) {
        self.x += source.x * factor;
        self.y += source.y * factor;
        self.z += source.z * factor;
        self.w += source.w * factor;
    }

    /// Multiplies every component by `factor` in place
    #[inline]
    pub fn scale(&mut self, factor: f32) {
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
        self.w *= factor;
    }

    /// Resets the vector to (0, 0, 0, 0)
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::ZERO;
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Euclidean magnitude
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance, `|other - self|²`
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        (*other - *self).length_squared()
    }

    /// Returns a unit vector with the same direction, or the zero vector unchanged
    #[inline]
    pub fn normalize(&self) -> Self {
        let mut unit = *self;
        unit.normalize_mut();
        unit
    }

    /// Normalizes the vector in-place, leaving a zero vector untouched
    #[inline]
    pub fn normalize_mut(&mut self) {
        let length = self.length();
        if length != 0.0 {
            self.scale(1.0 / length);
        }
    }

    /// True if the squared length is below [`EPSILON`](crate::math::EPSILON)
    #[inline]
    pub fn is_zero(&self) -> bool {
        crate::math::approx_zero(self.length_squared())
    }

    #[inline]
    pub fn to_nalgebra(&self) -> na::Vector4<f32> {
        na::Vector4::new(self.x, self.y, self.z, self.w)
    }

    #[inline]
    pub fn from_nalgebra(v: &na::Vector4<f32>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    /// Drops `w`
    #[inline]
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn from_vector3(v: Vector3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from(array: [f32; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

component_ops!(Vector4 { x, y, z, w });

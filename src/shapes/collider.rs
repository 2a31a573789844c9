use crate::math::{Matrix4, Quaternion, Vector3};
use crate::shapes::{Aabb, Cube, Shape, Sphere};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// The collider a body can carry
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Collider {
    Aabb(Aabb),
    Sphere(Sphere),
    Cube(Cube),
}

impl Collider {
    /// Returns the collider as a shape trait object
    pub fn as_shape(&self) -> &dyn Shape {
        match self {
            Collider::Aabb(aabb) => aabb,
            Collider::Sphere(sphere) => sphere,
            Collider::Cube(cube) => cube,
        }
    }

    /// Returns the collider as a mutable shape trait object
    pub fn as_shape_mut(&mut self) -> &mut dyn Shape {
        match self {
            Collider::Aabb(aabb) => aabb,
            Collider::Sphere(sphere) => sphere,
            Collider::Cube(cube) => cube,
        }
    }

    pub fn shape_type(&self) -> &'static str {
        self.as_shape().shape_type()
    }

    pub fn center(&self) -> Vector3 {
        self.as_shape().get_center()
    }

    pub fn volume(&self) -> f32 {
        self.as_shape().get_volume()
    }

    pub fn contains_point(&self, point: Vector3) -> bool {
        self.as_shape().contains_point(point)
    }

    pub fn clamp_point(&self, point: Vector3) -> Vector3 {
        self.as_shape().clamp_point(point)
    }

    pub fn surface_normal(&self, point: Vector3) -> Vector3 {
        self.as_shape().surface_normal(point)
    }

    pub fn transform_matrix(&self) -> Matrix4 {
        self.as_shape().transform_matrix()
    }

    /// Pairwise overlap test; the result does not depend on argument order
    pub fn overlaps(&self, other: &Collider) -> bool {
        match (self, other) {
            (Collider::Aabb(a), Collider::Aabb(b)) => a.overlaps_aabb(b),
            (Collider::Sphere(a), Collider::Sphere(b)) => a.overlaps_sphere(b),
            (Collider::Cube(a), Collider::Cube(b)) => a.overlaps_cube(b),
            (Collider::Sphere(s), Collider::Aabb(b)) | (Collider::Aabb(b), Collider::Sphere(s)) => {
                s.overlaps_aabb(b)
            }
            (Collider::Cube(c), Collider::Aabb(b)) | (Collider::Aabb(b), Collider::Cube(c)) => {
                c.overlaps_aabb(b)
            }
            (Collider::Cube(c), Collider::Sphere(s)) | (Collider::Sphere(s), Collider::Cube(c)) => {
                c.overlaps_sphere(s)
            }
        }
    }

    /// Follows a body: moves the collider to `position` and, for cubes, takes the
    /// orientation from the body's Euler rotation
    pub fn recenter(&mut self, position: Vector3, euler_rotation: Vector3) {
        if let Collider::Cube(cube) = self {
            cube.rotation = Quaternion::from_euler(euler_rotation.x, euler_rotation.y, euler_rotation.z);
        }
        self.as_shape_mut().recenter(position);
    }
}

impl From<Aabb> for Collider {
    fn from(aabb: Aabb) -> Self {
        Collider::Aabb(aabb)
    }
}

impl From<Sphere> for Collider {
    fn from(sphere: Sphere) -> Self {
        Collider::Sphere(sphere)
    }
}

impl From<Cube> for Collider {
    fn from(cube: Cube) -> Self {
        Collider::Cube(cube)
    }
}

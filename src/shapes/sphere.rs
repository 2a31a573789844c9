use crate::math::{Matrix4, Vector3};
use crate::shapes::{Aabb, Shape};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A spherical collider
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Sphere {
    /// The centre of the sphere
    pub center: Vector3,

    /// Never negative
    radius: f32,
}

impl Sphere {
    /// Creates a new sphere; negative radii are clamped to zero
    pub fn new(center: Vector3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Negative radii are clamped to zero
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    /// Returns true if the two spheres touch or overlap
    pub fn overlaps_sphere(&self, other: &Sphere) -> bool {
        let radii = self.radius + other.radius;
        self.center.distance_squared(&other.center) <= radii * radii
    }

    /// Returns true if the point of `aabb` closest to the centre is inside the sphere
    pub fn overlaps_aabb(&self, aabb: &Aabb) -> bool {
        self.contains_point(aabb.clamp_point(self.center))
    }
}

impl Shape for Sphere {
    fn shape_type(&self) -> &'static str {
        "Sphere"
    }

    fn get_volume(&self) -> f32 {
        (4.0 / 3.0) * std::f32::consts::PI * self.radius.powi(3)
    }

    fn get_center(&self) -> Vector3 {
        self.center
    }

    fn recenter(&mut self, position: Vector3) {
        self.center = position;
    }

    fn contains_point(&self, point: Vector3) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }

    fn clamp_point(&self, point: Vector3) -> Vector3 {
        if self.contains_point(point) {
            return point;
        }
        self.center + (point - self.center).normalize() * self.radius
    }

    fn surface_normal(&self, point: Vector3) -> Vector3 {
        (point - self.center).normalize()
    }

    fn transform_matrix(&self) -> Matrix4 {
        Matrix4::from_translation(self.center)
    }
}

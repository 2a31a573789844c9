use crate::math::{Matrix4, Quaternion, Vector3};
use crate::shapes::{Aabb, Shape, Sphere};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// An oriented box collider
///
/// Every query moves the other geometry into the cube's model space, where the
/// cube is an origin-centred [`Aabb`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Cube {
    /// Centre of the cube
    pub position: Vector3,

    /// Orientation, expected to be a unit quaternion
    pub rotation: Quaternion,

    /// Size along the local z axis
    pub length: f32,

    /// Size along the local x axis
    pub width: f32,

    /// Size along the local y axis
    pub height: f32,
}

impl Cube {
    /// Creates a new oriented box
    pub fn new(position: Vector3, rotation: Quaternion, length: f32, width: f32, height: f32) -> Self {
        Self {
            position,
            rotation,
            length,
            width,
            height,
        }
    }

    /// Returns the cube as an axis-aligned box centred on the origin of its model space
    pub fn local_box(&self) -> Aabb {
        Aabb::new(Vector3::zero(), self.length, self.width, self.height)
    }

    /// Moves a world-space point into the cube's model space
    pub fn to_local(&self, point: Vector3) -> Vector3 {
        self.rotation.inverse().rotate_vector(point - self.position)
    }

    /// Moves a point in the cube's model space back into world space
    pub fn to_world(&self, point: Vector3) -> Vector3 {
        self.rotation.rotate_vector(point) + self.position
    }

    /// Returns true if the closest point of `aabb` to the cube's centre is in the
    /// cube, or the closest point of the cube to the box's centre is in the box
    pub fn overlaps_aabb(&self, aabb: &Aabb) -> bool {
        self.contains_point(aabb.clamp_point(self.position))
            || aabb.contains_point(self.clamp_point(aabb.get_center()))
    }

    /// Returns true if the point of the cube closest to the sphere's centre is inside the sphere
    pub fn overlaps_sphere(&self, sphere: &Sphere) -> bool {
        sphere.contains_point(self.clamp_point(sphere.center))
    }

    /// Box/box test with `other` expressed in this cube's model space
    ///
    /// Only the two closest-point probes are run, so two boxes that cross
    /// edge-to-edge without either probe landing inside are reported apart.
    pub fn overlaps_cube(&self, other: &Cube) -> bool {
        let this = self.local_box();
        let other = Cube {
            position: self.to_local(other.position),
            rotation: self.rotation.inverse() * other.rotation,
            ..*other
        };

        other.contains_point(this.clamp_point(other.position))
            || this.contains_point(other.clamp_point(Vector3::zero()))
    }
}

impl Shape for Cube {
    fn shape_type(&self) -> &'static str {
        "Cube"
    }

    fn get_volume(&self) -> f32 {
        (self.length * self.width * self.height).abs()
    }

    fn get_center(&self) -> Vector3 {
        self.position
    }

    fn recenter(&mut self, position: Vector3) {
        self.position = position;
    }

    fn contains_point(&self, point: Vector3) -> bool {
        self.local_box().contains_point(self.to_local(point))
    }

    fn clamp_point(&self, point: Vector3) -> Vector3 {
        let local = self.local_box().clamp_point(self.to_local(point));
        self.to_world(local)
    }

    fn surface_normal(&self, point: Vector3) -> Vector3 {
        let local = self.to_local(self.clamp_point(point));
        let local_normal = self.local_box().surface_normal(local);
        self.rotation.rotate_vector(local_normal).normalize()
    }

    fn transform_matrix(&self) -> Matrix4 {
        Matrix4::from_translation(self.position) * Matrix4::from_quaternion(&self.rotation)
    }
}

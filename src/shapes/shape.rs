use crate::math::{Matrix4, Vector3};
use std::fmt::Debug;

/// Base trait for collider geometry
///
/// Colliders are plain values that are re-derived from body state every tick,
/// so every query here is total: degenerate (zero-sized) shapes are valid and
/// simply answer the geometric question they are asked.
pub trait Shape: Send + Sync + Debug + 'static {
    /// Returns the type name of the shape
    fn shape_type(&self) -> &'static str;

    /// Returns the volume of the shape
    fn get_volume(&self) -> f32;

    /// Returns the geometric centre of the shape in world space
    fn get_center(&self) -> Vector3;

    /// Moves the shape so that its reference position is `position`
    fn recenter(&mut self, position: Vector3);

    /// Returns true if the point lies inside or on the boundary of the shape
    fn contains_point(&self, point: Vector3) -> bool;

    /// Returns the point of the shape closest to `point`
    fn clamp_point(&self, point: Vector3) -> Vector3;

    /// Returns the outward unit normal of the surface closest to `point`
    fn surface_normal(&self, point: Vector3) -> Vector3;

    /// Returns the model matrix a renderer would draw this shape with
    fn transform_matrix(&self) -> Matrix4;
}

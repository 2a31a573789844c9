use crate::math::{self, Matrix4, Vector3};
use crate::shapes::Shape;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// An axis-aligned bounding box
///
/// The faces are stored relative to `position`, which is the box's reference
/// point and not necessarily its centre. `front`/`back` bound z, `right`/`left`
/// bound x and `top`/`bottom` bound y.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Reference point every face is relative to
    pub position: Vector3,

    /// Largest z offset
    pub front: f32,

    /// Smallest z offset
    pub back: f32,

    /// Smallest x offset
    pub left: f32,

    /// Largest x offset
    pub right: f32,

    /// Largest y offset
    pub top: f32,

    /// Smallest y offset
    pub bottom: f32,
}

impl Aabb {
    /// Creates a box centred at `center`
    ///
    /// `length` is the size along z, `width` along x and `height` along y.
    pub fn new(center: Vector3, length: f32, width: f32, height: f32) -> Self {
        let half_length = (length / 2.0).abs();
        let half_width = (width / 2.0).abs();
        let half_height = (height / 2.0).abs();

        Self {
            position: center,
            front: half_length,
            back: -half_length,
            left: -half_width,
            right: half_width,
            top: half_height,
            bottom: -half_height,
        }
    }

    /// Returns the reference position of the box
    pub fn get_position(&self) -> Vector3 {
        self.position
    }

    /// Returns the size along z
    pub fn get_length(&self) -> f32 {
        self.front - self.back
    }

    /// Returns the size along x
    pub fn get_width(&self) -> f32 {
        self.right - self.left
    }

    /// Returns the size along y
    pub fn get_height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Returns half of the box's size along each axis
    pub fn get_half_extents(&self) -> Vector3 {
        Vector3::new(self.get_width(), self.get_height(), self.get_length()) * 0.5
    }

    /// Returns the smallest corner in world space
    pub fn get_min(&self) -> Vector3 {
        self.position + Vector3::new(self.left, self.bottom, self.back)
    }

    /// Returns the largest corner in world space
    pub fn get_max(&self) -> Vector3 {
        self.position + Vector3::new(self.right, self.top, self.front)
    }

    /// Returns true if the two boxes touch or overlap on every axis
    pub fn overlaps_aabb(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.get_min(), self.get_max());
        let (b_min, b_max) = (other.get_min(), other.get_max());

        a_min.x <= b_max.x && a_max.x >= b_min.x
            && a_min.y <= b_max.y && a_max.y >= b_min.y
            && a_min.z <= b_max.z && a_max.z >= b_min.z
    }
}

/// Fraction of the way from the centre to the face, a flat axis is always on its face
fn face_fraction(offset: f32, half_extent: f32) -> f32 {
    if half_extent == 0.0 {
        1.0
    } else {
        offset.abs() / half_extent
    }
}

/// Signed contribution of one axis to a surface normal
fn axis_sign(offset: f32) -> f32 {
    if offset > 0.0 {
        1.0
    } else if offset < 0.0 {
        -1.0
    } else {
        // Both faces apply and cancel out
        0.0
    }
}

impl Shape for Aabb {
    fn shape_type(&self) -> &'static str {
        "Aabb"
    }

    fn get_volume(&self) -> f32 {
        (self.get_length() * self.get_width() * self.get_height()).abs()
    }

    fn get_center(&self) -> Vector3 {
        self.position
            + Vector3::new(
                (self.left + self.right) / 2.0,
                (self.bottom + self.top) / 2.0,
                (self.back + self.front) / 2.0,
            )
    }

    fn recenter(&mut self, position: Vector3) {
        self.position = position;
    }

    fn contains_point(&self, point: Vector3) -> bool {
        let relative = point - self.position;

        relative.x >= self.left && relative.x <= self.right
            && relative.y >= self.bottom && relative.y <= self.top
            && relative.z >= self.back && relative.z <= self.front
    }

    fn clamp_point(&self, point: Vector3) -> Vector3 {
        let (min, max) = (self.get_min(), self.get_max());
        Vector3::new(
            math::clamp(point.x, min.x, max.x),
            math::clamp(point.y, min.y, max.y),
            math::clamp(point.z, min.z, max.z),
        )
    }

    /// Picks the face (or edge/corner) `point` is closest to, measured as a
    /// fraction of each half extent; tied axes are summed before normalising.
    fn surface_normal(&self, point: Vector3) -> Vector3 {
        let relative = self.clamp_point(point) - self.get_center();
        let half = self.get_half_extents();

        let offsets = [relative.x, relative.y, relative.z];
        let fractions = [
            face_fraction(relative.x, half.x),
            face_fraction(relative.y, half.y),
            face_fraction(relative.z, half.z),
        ];
        let axes = [Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z()];
        let nearest = fractions.iter().copied().fold(f32::MIN, f32::max);

        let mut normal = Vector3::zero();
        for ((offset, fraction), axis) in offsets.iter().zip(fractions.iter()).zip(axes.iter()) {
            if nearest - fraction <= math::EPSILON {
                normal.add_scaled(*axis, axis_sign(*offset));
            }
        }

        normal.normalize()
    }

    fn transform_matrix(&self) -> Matrix4 {
        Matrix4::from_translation(self.position)
    }
}

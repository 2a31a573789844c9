use crate::math::Vector3;
use crate::shapes::Collider;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A single contact between two colliders
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Contact {
    /// The contact point in world space
    pub point: Vector3,

    /// Unit normal pointing from the first collider toward the second
    pub normal: Vector3,
}

/// Tests two colliders and, if they overlap, builds the contact between them
///
/// The contact point is the point of `a` closest to the centre of `b`. The
/// normal is `a`'s surface normal there, except for spheres where it is the
/// direction from `a`'s centre to that point (or to `b`'s centre when both are
/// spheres).
pub fn detect_contact(a: &Collider, b: &Collider) -> Option<Contact> {
    if !a.overlaps(b) {
        return None;
    }

    let point = a.clamp_point(b.center());
    let normal = match (a, b) {
        (Collider::Sphere(first), Collider::Sphere(second)) => (second.center - first.center).normalize(),
        (Collider::Sphere(first), _) => (point - first.center).normalize(),
        _ => a.surface_normal(point),
    };

    Some(Contact { point, normal })
}

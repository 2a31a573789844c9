use crate::bodies::Body;
use crate::math::{Vector3, EPSILON};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Which way the normal passed to [`normal_force`] points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum NormalConvention {
    /// From the body toward the surface it touches; motion along the normal
    /// closes the gap
    #[default]
    TowardContact,

    /// Along the force the body receives, away from the surface; motion
    /// against the normal closes the gap
    AlongForce,
}

impl NormalConvention {
    /// True if a component with this dot product against the normal drives the bodies together
    fn closes_gap(self, dot: f32) -> bool {
        match self {
            NormalConvention::TowardContact => dot >= 0.0,
            NormalConvention::AlongForce => dot <= 0.0,
        }
    }
}

/// Computes the normal force that cancels, in one tick, the velocity and force
/// carrying `body` into the contact
///
/// Both are projected onto `contact_normal`; a projection that is not closing
/// the gap is dropped. The result is `-mass·opposed_velocity - opposed_force`.
pub fn normal_force(body: &Body, contact_normal: Vector3, convention: NormalConvention) -> Vector3 {
    let mut opposed_velocity = body.get_velocity().portion_in_direction(&contact_normal);
    let mut opposed_force = body.get_net_force().portion_in_direction(&contact_normal);

    if !convention.closes_gap(opposed_velocity.dot(&contact_normal)) {
        opposed_velocity.clear();
    }
    if !convention.closes_gap(opposed_force.dot(&contact_normal)) {
        opposed_force.clear();
    }

    let mut normal = opposed_velocity;
    normal.scale(-body.get_mass().get());
    normal.add_scaled(opposed_force, -1.0);
    normal
}

/// Friction on `body` sliding against `other` under the normal force `normal`
///
/// A body at rest gets static friction: the tangential part of its net force
/// is cancelled entirely if it does not exceed `μs·μs'·|N|` (up to a relative
/// [`EPSILON`]), otherwise nothing
/// happens. A moving body gets kinetic friction `-v̂·μk·μk'·|N|`.
pub fn friction_force(body: &Body, other: &Body, normal: Vector3) -> Vector3 {
    let normal_magnitude = normal.length();

    if body.get_velocity().length() < EPSILON {
        let net_force = body.get_net_force();
        let tangential = net_force - net_force.portion_in_direction(&normal);
        let limit = body.get_static_friction() * other.get_static_friction() * normal_magnitude;

        // Rounding in the projection can leave a push at the limit a few ulps over it
        if tangential.length() <= limit + limit.abs() * EPSILON {
            -tangential
        } else {
            Vector3::zero()
        }
    } else {
        let mut friction = body.get_velocity().normalize();
        friction.scale(-(body.get_kinetic_friction() * other.get_kinetic_friction() * normal_magnitude));
        friction
    }
}

/// Adds the normal force and friction to `body`, both acting at `contact_point`
fn add_contact_forces(body: &mut Body, other: &Body, normal: Vector3, contact_point: Vector3) {
    let lever = contact_point - body.get_position();

    body.add_force_and_torque(normal, lever);
    let friction = friction_force(body, other, normal);
    body.add_force_and_torque(friction, lever);
}

/// Applies a collision to both bodies
///
/// `normal_force_on_a` is the force `b` exerts on `a`; `b` receives its
/// negation. Each body then gets its own friction, computed from its net force
/// after the normal was added. `contact_point` is in world space.
pub fn collision_forces(a: &mut Body, b: &mut Body, normal_force_on_a: Vector3, contact_point: Vector3) {
    add_contact_forces(a, b, normal_force_on_a, contact_point);
    add_contact_forces(b, a, -normal_force_on_a, contact_point);
}

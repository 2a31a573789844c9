use crate::bodies::{body_flags::BodyFlags, Body};
use crate::core::{BodyHandle, BodyStorage, Storage};
use crate::forces::ForceGenerator;
use crate::math::Vector3;
use std::any::Any;

/// Adds the mutual gravitational attraction of two bodies to both
///
/// The force on `a` has magnitude `G·m_a·m_b / d²` and points from `a` toward
/// `b`; `b` receives its exact negation. Coincident positions divide by zero.
pub fn gravity_pair(a: &mut Body, b: &mut Body, constant: f32) {
    let magnitude = constant * a.get_mass().get() * b.get_mass().get()
        / a.get_position().distance_squared(&b.get_position());

    let mut force = (b.get_position() - a.get_position()).normalize();
    force.scale(magnitude);

    a.add_force(force);
    b.add_force(-force);
}

/// Adds the weight `m·g` of a body in a uniform field
pub fn uniform_gravity(body: &mut Body, acceleration: Vector3) {
    let mut weight = acceleration;
    weight.scale(body.get_mass().get());
    body.add_force(weight);
}

/// Weight `m·g` for a chosen set of bodies
///
/// The world's own [`GravityType::Uniform`](crate::core::GravityType) covers
/// every body; this generator is for fields that only some bodies feel.
#[derive(Debug, Clone)]
pub struct UniformGravity {
    acceleration: Vector3,
    targets: Vec<BodyHandle>,
    enabled: bool,
}

impl UniformGravity {
    pub fn new(acceleration: Vector3) -> Self {
        Self {
            acceleration,
            targets: Vec::new(),
            enabled: true,
        }
    }

    /// Builder form of [`UniformGravity::add_body`]
    pub fn with_body(mut self, body: BodyHandle) -> Self {
        self.add_body(body);
        self
    }

    pub fn add_body(&mut self, body: BodyHandle) {
        if !self.targets.contains(&body) {
            self.targets.push(body);
        }
    }

    pub fn remove_body(&mut self, body: BodyHandle) {
        self.targets.retain(|&target| target != body);
    }

    pub fn get_acceleration(&self) -> Vector3 {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, acceleration: Vector3) {
        self.acceleration = acceleration;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl ForceGenerator for UniformGravity {
    fn generator_type(&self) -> &'static str {
        "UniformGravity"
    }

    fn apply_forces(&self, bodies: &mut BodyStorage<Body>) {
        if !self.enabled {
            return;
        }

        for &handle in &self.targets {
            match bodies.get_body_mut(handle) {
                Ok(body) if body.has_flag(BodyFlags::AFFECTED_BY_GRAVITY) => {
                    uniform_gravity(body, self.acceleration);
                }
                Ok(_) => {}
                Err(_) => log::warn!("uniform gravity skipped missing {}", handle),
            }
        }
    }

    fn bodies(&self) -> &[BodyHandle] {
        &self.targets
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Generator pairing every registered body with every other one for mutual gravity
///
/// Pairs are visited in registration order, `(0, 1), (0, 2), ..., (1, 2), ...`.
#[derive(Debug, Clone)]
pub struct MutualGravity {
    /// The gravitational constant
    constant: f32,

    /// The bodies attracting each other
    members: Vec<BodyHandle>,
}

impl MutualGravity {
    pub fn new(constant: f32) -> Self {
        Self {
            constant,
            members: Vec::new(),
        }
    }

    pub fn get_constant(&self) -> f32 {
        self.constant
    }

    /// Adds a body to the attracting set
    pub fn add_body(&mut self, body: BodyHandle) {
        if !self.members.contains(&body) {
            self.members.push(body);
        }
    }

    pub fn remove_body(&mut self, body: BodyHandle) {
        self.members.retain(|&member| member != body);
    }
}

/// Applies pairwise gravity to every combination of `handles`, in order
pub(crate) fn apply_mutual_gravity(bodies: &mut BodyStorage<Body>, handles: &[BodyHandle], constant: f32) {
    for (i, &first) in handles.iter().enumerate() {
        for &second in &handles[i + 1..] {
            match bodies.get_pair_mut(first, second) {
                Ok((a, b)) => gravity_pair(a, b, constant),
                Err(e) => log::warn!("mutual gravity skipped {}/{}: {}", first, second, e),
            }
        }
    }
}

impl ForceGenerator for MutualGravity {
    fn generator_type(&self) -> &'static str {
        "MutualGravity"
    }

    fn apply_forces(&self, bodies: &mut BodyStorage<Body>) {
        let attracting: Vec<BodyHandle> = self
            .members
            .iter()
            .copied()
            .filter(|&handle| match bodies.get(handle) {
                Some(body) => body.has_flag(BodyFlags::AFFECTED_BY_GRAVITY),
                None => {
                    log::warn!("mutual gravity skipped missing {}", handle);
                    false
                }
            })
            .collect();

        apply_mutual_gravity(bodies, &attracting, self.constant);
    }

    fn bodies(&self) -> &[BodyHandle] {
        &self.members
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

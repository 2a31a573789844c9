use crate::bodies::Body;
use crate::core::{BodyHandle, BodyStorage};
use crate::forces::ForceGenerator;
use crate::math::Vector3;
use std::any::Any;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// An undamped spring joining two bodies
///
/// The spring holds handles, not bodies, and keeps no state between ticks.
/// Endpoints are offsets from each body's position; they do not rotate with
/// the body.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Spring {
    /// The two connected bodies
    bodies: [BodyHandle; 2],

    /// Attachment offset on the first body
    a_endpoint: Vector3,

    /// Attachment offset on the second body
    b_endpoint: Vector3,

    /// Force per unit of stretch
    spring_constant: f32,

    /// Rest length
    equilibrium_distance: f32,
}

impl Spring {
    /// Creates a spring between `body_a` and `body_b`
    pub fn new(
        body_a: BodyHandle,
        a_endpoint: Vector3,
        body_b: BodyHandle,
        b_endpoint: Vector3,
        spring_constant: f32,
        equilibrium_distance: f32,
    ) -> Self {
        Self {
            bodies: [body_a, body_b],
            a_endpoint,
            b_endpoint,
            spring_constant,
            equilibrium_distance,
        }
    }

    pub fn get_body_a(&self) -> BodyHandle {
        self.bodies[0]
    }

    pub fn get_body_b(&self) -> BodyHandle {
        self.bodies[1]
    }

    pub fn get_spring_constant(&self) -> f32 {
        self.spring_constant
    }

    pub fn set_spring_constant(&mut self, spring_constant: f32) {
        self.spring_constant = spring_constant;
    }

    pub fn get_equilibrium_distance(&self) -> f32 {
        self.equilibrium_distance
    }

    pub fn set_equilibrium_distance(&mut self, equilibrium_distance: f32) {
        self.equilibrium_distance = equilibrium_distance;
    }

    /// Force the spring exerts on the first body
    ///
    /// `(|d| - equilibrium)·k` along `d`, the vector from the first endpoint to
    /// the second. A stretched spring pulls the bodies together, a compressed
    /// one pushes them apart.
    pub fn force_on_a(&self, a: &Body, b: &Body) -> Vector3 {
        let displacement = (b.get_position() + self.b_endpoint) - (a.get_position() + self.a_endpoint);
        let stretch = displacement.length() - self.equilibrium_distance;

        let mut force = displacement.normalize();
        force.scale(stretch * self.spring_constant);
        force
    }

    /// Adds the spring force to both bodies at their endpoints
    pub fn apply(&self, a: &mut Body, b: &mut Body) {
        let force = self.force_on_a(a, b);
        a.add_force_and_torque(force, self.a_endpoint);
        b.add_force_and_torque(-force, self.b_endpoint);
    }
}

impl ForceGenerator for Spring {
    fn generator_type(&self) -> &'static str {
        "Spring"
    }

    fn apply_forces(&self, bodies: &mut BodyStorage<Body>) {
        match bodies.get_pair_mut(self.bodies[0], self.bodies[1]) {
            Ok((a, b)) => self.apply(a, b),
            Err(e) => log::warn!("spring skipped: {}", e),
        }
    }

    fn bodies(&self) -> &[BodyHandle] {
        &self.bodies
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

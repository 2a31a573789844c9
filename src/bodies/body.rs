use crate::bodies::{body_flags::BodyFlags, Material};
use crate::error::PhysicsError;
use crate::math::{Matrix4, Vector3};
use crate::shapes::Collider;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A strictly positive, finite mass
///
/// A [`Body`] can only be built from a `Mass`, which keeps the division in
/// [`Body::step`] defined.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(try_from = "f32", into = "f32"))]
pub struct Mass(f32);

impl Mass {
    /// Validates a mass, rejecting zero, negative and non-finite values
    pub fn new(value: f32) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "mass must be positive and finite, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Returns the mass value
    pub fn get(&self) -> f32 {
        self.0
    }

    /// Returns `1 / mass`
    pub fn inverse(&self) -> f32 {
        1.0 / self.0
    }
}

impl TryFrom<f32> for Mass {
    type Error = PhysicsError;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Mass> for f32 {
    fn from(mass: Mass) -> Self {
        mass.0
    }
}

/// A rigid body: something that moves and responds to forces
///
/// Forces and torques are accumulated between steps and consumed by
/// [`Body::step`]. Anything that keeps acting on the body has to be added
/// again every tick.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Body {
    /// The body's position in world space
    position: Vector3,

    /// Euler angles in radians, integrated linearly from the angular velocity
    rotation: Vector3,

    /// The body's linear velocity
    velocity: Vector3,

    /// The body's angular velocity
    angular_velocity: Vector3,

    /// The body's mass
    mass: Mass,

    /// Friction coefficient at rest
    static_friction: f32,

    /// Friction coefficient while moving
    kinetic_friction: f32,

    /// Force accumulated since the last step
    net_force: Vector3,

    /// Torque accumulated since the last step
    net_torque: Vector3,

    /// The body's flags
    flags: BodyFlags,

    /// Optional collider that follows the body
    collider: Option<Collider>,
}

impl Body {
    /// Creates a body at rest at `position`
    pub fn new(position: Vector3, mass: Mass) -> Self {
        let material = Material::default();

        Self {
            position,
            rotation: Vector3::zero(),
            velocity: Vector3::zero(),
            angular_velocity: Vector3::zero(),
            mass,
            static_friction: material.static_friction,
            kinetic_friction: material.kinetic_friction,
            net_force: Vector3::zero(),
            net_torque: Vector3::zero(),
            flags: BodyFlags::default(),
            collider: None,
        }
    }

    /// Sets the initial Euler rotation
    pub fn with_rotation(mut self, rotation: Vector3) -> Self {
        self.rotation = rotation;
        self.sync_collider();
        self
    }

    /// Sets the initial linear velocity
    pub fn with_velocity(mut self, velocity: Vector3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the initial angular velocity
    pub fn with_angular_velocity(mut self, angular_velocity: Vector3) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Sets the static and kinetic friction coefficients
    pub fn with_friction(mut self, static_friction: f32, kinetic_friction: f32) -> Self {
        self.static_friction = static_friction;
        self.kinetic_friction = kinetic_friction;
        self
    }

    /// Takes the friction coefficients from a material preset
    pub fn with_material(self, material: Material) -> Self {
        self.with_friction(material.static_friction, material.kinetic_friction)
    }

    /// Attaches a collider, moving it onto the body
    pub fn with_collider(mut self, collider: impl Into<Collider>) -> Self {
        self.collider = Some(collider.into());
        self.sync_collider();
        self
    }

    /// Replaces the body's flags
    pub fn with_flags(mut self, flags: BodyFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn get_position(&self) -> Vector3 {
        self.position
    }

    /// Teleports the body; the collider follows
    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
        self.sync_collider();
    }

    pub fn get_rotation(&self) -> Vector3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Vector3) {
        self.rotation = rotation;
        self.sync_collider();
    }

    pub fn get_velocity(&self) -> Vector3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector3) {
        self.velocity = velocity;
    }

    pub fn get_angular_velocity(&self) -> Vector3 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: Vector3) {
        self.angular_velocity = angular_velocity;
    }

    pub fn get_mass(&self) -> Mass {
        self.mass
    }

    pub fn set_mass(&mut self, mass: Mass) {
        self.mass = mass;
    }

    pub fn get_static_friction(&self) -> f32 {
        self.static_friction
    }

    pub fn get_kinetic_friction(&self) -> f32 {
        self.kinetic_friction
    }

    /// Force accumulated since the last step
    pub fn get_net_force(&self) -> Vector3 {
        self.net_force
    }

    /// Torque accumulated since the last step
    pub fn get_net_torque(&self) -> Vector3 {
        self.net_torque
    }

    pub fn get_flags(&self) -> BodyFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: BodyFlags) {
        self.flags = flags;
    }

    pub fn has_flag(&self, flag: BodyFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn get_collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    /// Replaces (or removes) the collider
    pub fn set_collider(&mut self, collider: Option<Collider>) {
        self.collider = collider;
        self.sync_collider();
    }

    /// Adds a force acting through the body's position
    pub fn add_force(&mut self, force: Vector3) {
        self.net_force.add_scaled(force, 1.0);
    }

    /// Adds a torque
    pub fn add_torque(&mut self, torque: Vector3) {
        self.net_torque.add_scaled(torque, 1.0);
    }

    /// Adds a force applied at `applied_at`, an offset from the body's position,
    /// along with the torque `applied_at × force`
    pub fn add_force_and_torque(&mut self, force: Vector3, applied_at: Vector3) {
        self.add_force(force);
        self.add_torque(applied_at.cross(&force));
    }

    /// Adds a linear drag force `-c·v` and angular drag torque `-c·ω`
    pub fn add_drag(&mut self, coefficient: f32) {
        let mut drag_force = self.velocity;
        drag_force.scale(-coefficient);
        self.add_force(drag_force);

        let mut drag_torque = self.angular_velocity;
        drag_torque.scale(-coefficient);
        self.add_torque(drag_torque);
    }

    /// Advances the body by one tick and clears both accumulators
    ///
    /// Semi-implicit Euler with a unit timestep: the velocity is updated first
    /// and the position moves by the new velocity. The angular update divides
    /// by the scalar mass; there is no inertia tensor.
    pub fn step(&mut self) {
        let inverse_mass = self.mass.inverse();

        self.velocity.add_scaled(self.net_force, inverse_mass);
        self.net_force.clear();
        self.position.add_scaled(self.velocity, 1.0);

        self.angular_velocity.add_scaled(self.net_torque, inverse_mass);
        self.net_torque.clear();
        self.rotation.add_scaled(self.angular_velocity, 1.0);
    }

    /// Moves the attached collider onto the body's current position and rotation
    pub fn sync_collider(&mut self) {
        let (position, rotation) = (self.position, self.rotation);
        if let Some(collider) = self.collider.as_mut() {
            collider.recenter(position, rotation);
        }
    }

    /// Model matrix for rendering: translation, then the Euler rotation
    pub fn transform_matrix(&self) -> Matrix4 {
        Matrix4::from_translation(self.position)
            * Matrix4::from_euler(self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

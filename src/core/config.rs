use crate::core::GravityType;
use crate::forces::NormalConvention;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the physics simulation
///
/// Every tick is one unit of time; there is no timestep to configure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// The type of gravity in the simulation
    pub gravity: GravityType,

    /// Whether bodies with colliders are tested against each other
    pub collisions_enabled: bool,

    /// How the world orients the normal it hands to the normal-force solver
    pub normal_convention: NormalConvention,
}

impl SimulationConfig {
    /// Sets the gravity
    pub fn with_gravity(mut self, gravity: GravityType) -> Self {
        self.gravity = gravity;
        self
    }

    /// Turns collision detection and response on or off
    pub fn with_collisions(mut self, enabled: bool) -> Self {
        self.collisions_enabled = enabled;
        self
    }

    /// Sets the normal convention
    pub fn with_normal_convention(mut self, convention: NormalConvention) -> Self {
        self.normal_convention = convention;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: GravityType::default(),
            collisions_enabled: true,
            normal_convention: NormalConvention::default(),
        }
    }
}

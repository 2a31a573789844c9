#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Friction properties of a body's surface
///
/// Coefficients are conventionally in `[0, 1]`. At a contact the coefficients
/// of both surfaces are multiplied together.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Material {
    /// Friction coefficient while the body is at rest
    pub static_friction: f32,

    /// Friction coefficient while the body is sliding
    pub kinetic_friction: f32,
}

impl Material {
    /// Creates a new material with the specified coefficients
    pub fn new(static_friction: f32, kinetic_friction: f32) -> Self {
        Self {
            static_friction,
            kinetic_friction,
        }
    }

    /// A surface with no friction at all
    pub fn frictionless() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Creates a material for ice (very low friction)
    pub fn ice() -> Self {
        Self::new(0.1, 0.03)
    }

    /// Creates a material for rubber (high friction)
    pub fn rubber() -> Self {
        Self::new(0.9, 0.8)
    }

    /// Creates a material for wood
    pub fn wood() -> Self {
        Self::new(0.5, 0.3)
    }

    /// Creates a material for metal
    pub fn metal() -> Self {
        Self::new(0.6, 0.4)
    }

    /// Creates a material for concrete (high friction)
    pub fn concrete() -> Self {
        Self::new(0.8, 0.6)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(0.5, 0.3)
    }
}

pub mod world;
pub mod config;
pub mod storage;
pub mod events;

pub use self::world::PhysicsWorld;
pub use self::config::SimulationConfig;
pub use self::storage::{BodyStorage, Storage};
pub use self::events::{EventQueue, CollisionEvent, BodyEvent, BodyEventType};

use crate::math::Vector3;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Index of a body slot in a world; stays valid until that body is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BodyHandle(pub(crate) u32);

impl BodyHandle {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "body#{}", self.0)
    }
}

/// World-wide gravity, applied before any force generator runs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum GravityType {
    /// No gravity
    None,

    /// Constant acceleration, applied as `m·g` to every body
    Uniform(Vector3),

    /// Every pair of bodies attracts each other with `G·m_a·m_b / d²`
    Mutual {
        /// The gravitational constant `G`
        constant: f32,
    },
}

impl Default for GravityType {
    fn default() -> Self {
        Self::Mutual { constant: 1.0 }
    }
}

pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;
pub mod forces;

// Everything a driver needs to build and step a world
pub use crate::core::{BodyHandle, GravityType, PhysicsWorld, SimulationConfig};
pub use crate::bodies::{Body, Mass, Material};
pub use crate::shapes::{Aabb, Collider, Cube, Sphere};
pub use crate::forces::{NormalConvention, Spring};
pub use crate::math::{Quaternion, Vector3, Vector4};

/// Errors returned at the API boundary; per-tick physics never fails
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Resource exhausted: {0}")]
        ResourceExhausted(String),
    }
}

/// `Result` with [`error::PhysicsError`]
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Crate version, from Cargo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

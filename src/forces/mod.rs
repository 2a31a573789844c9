mod force_generator;
mod gravity;
mod contact;
mod spring;
mod drag;

pub use self::force_generator::{ForceGenerator, ForceRegistry};
pub use self::gravity::{gravity_pair, uniform_gravity, UniformGravity, MutualGravity};
pub use self::contact::{normal_force, friction_force, collision_forces, NormalConvention};
pub use self::spring::Spring;
pub use self::drag::DragForce;

pub(crate) use self::gravity::apply_mutual_gravity;

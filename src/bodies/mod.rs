mod body;
mod material;

pub use self::body::{Body, Mass};
pub use self::material::Material;

/// Flags for controlling body behavior
pub mod body_flags {
    use bitflags::bitflags;

    #[cfg(feature = "serialize")]
    use serde::{Serialize, Deserialize};

    bitflags! {
        /// Flags for controlling how the world treats a body
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
        pub struct BodyFlags: u32 {
            /// Body receives the world's uniform or mutual gravity
            const AFFECTED_BY_GRAVITY = 0x01;

            /// Body takes part in collision detection and response
            const COLLIDES = 0x02;

            /// Body generates collision events
            const GENERATE_COLLISION_EVENTS = 0x04;
        }
    }

    impl Default for BodyFlags {
        fn default() -> Self {
            BodyFlags::AFFECTED_BY_GRAVITY | BodyFlags::COLLIDES | BodyFlags::GENERATE_COLLISION_EVENTS
        }
    }
}

mod collision_pair;
mod contact;

pub use self::collision_pair::{CollisionPair, all_pairs};
pub use self::contact::{Contact, detect_contact};

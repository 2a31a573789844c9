use crate::core::BodyHandle;

/// Two bodies whose colliders are tested against each other in one tick
///
/// `body_a` is the earlier body in storage order; contact normals and the
/// recorded normal force are expressed from its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
}

/// Every unordered pair of `handles`, in the order the handles are given
///
/// No spatial partitioning: n bodies give n·(n-1)/2 pairs.
pub fn all_pairs(handles: &[BodyHandle]) -> Vec<CollisionPair> {
    let mut pairs = Vec::with_capacity(handles.len() * handles.len().saturating_sub(1) / 2);
    for (i, &body_a) in handles.iter().enumerate() {
        pairs.extend(handles[i + 1..].iter().map(|&body_b| CollisionPair { body_a, body_b }));
    }
    pairs
}

use crate::collision::Contact;
use crate::core::BodyHandle;
use crate::math::Vector3;

/// A contact the world resolved during a tick
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,

    /// Where and along which normal the bodies touched
    pub contact: Contact,

    /// The normal force applied to `body_a`; `body_b` received its negation
    pub normal_force: Vector3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEventType {
    Added,
    Removed,
}

/// A body entering or leaving the world
#[derive(Debug, Clone, PartialEq)]
pub struct BodyEvent {
    pub event_type: BodyEventType,
    pub body: BodyHandle,
}

/// Events raised since the start of the last tick
///
/// [`PhysicsWorld::step`](crate::core::PhysicsWorld::step) empties the queue
/// before it runs, so collision events always describe the most recent tick.
/// Body events raised between ticks are visible until the next one.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    collisions: Vec<CollisionEvent>,
    body_events: Vec<BodyEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_collision(&mut self, event: CollisionEvent) {
        self.collisions.push(event);
    }

    pub(crate) fn push_body_event(&mut self, body: BodyHandle, event_type: BodyEventType) {
        self.body_events.push(BodyEvent { event_type, body });
    }

    /// Collision events in the order the pairs were resolved
    pub fn collisions(&self) -> &[CollisionEvent] {
        &self.collisions
    }

    pub fn body_events(&self) -> &[BodyEvent] {
        &self.body_events
    }

    /// Takes the collision events out of the queue
    pub fn drain_collisions(&mut self) -> impl Iterator<Item = CollisionEvent> + '_ {
        self.collisions.drain(..)
    }

    /// Takes the body events out of the queue
    pub fn drain_body_events(&mut self) -> impl Iterator<Item = BodyEvent> + '_ {
        self.body_events.drain(..)
    }

    pub fn has_collision_events(&self) -> bool {
        !self.collisions.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.collisions.is_empty() && self.body_events.is_empty()
    }

    pub fn clear(&mut self) {
        self.collisions.clear();
        self.body_events.clear();
    }

    /// Collision events with `body` on either side
    pub fn collisions_involving(&self, body: BodyHandle) -> impl Iterator<Item = &CollisionEvent> + '_ {
        self.collisions
            .iter()
            .filter(move |event| event.body_a == body || event.body_b == body)
    }

    pub fn body_events_of_type(&self, event_type: BodyEventType) -> impl Iterator<Item = &BodyEvent> + '_ {
        self.body_events
            .iter()
            .filter(move |event| event.event_type == event_type)
    }
}

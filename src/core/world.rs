use crate::bodies::{body_flags::BodyFlags, Body};
use crate::collision::{all_pairs, detect_contact, CollisionPair};
use crate::core::events::BodyEventType;
use crate::core::storage::Storage;
use crate::core::{BodyHandle, BodyStorage, CollisionEvent, EventQueue, GravityType, SimulationConfig};
use crate::error::PhysicsError;
use crate::forces::{self, ForceGenerator, ForceRegistry, NormalConvention, Spring};
use crate::Result;

/// Owns the bodies and force generators and advances them one tick at a time
#[derive(Debug)]
pub struct PhysicsWorld {
    /// All bodies in the world
    bodies: BodyStorage<Body>,

    /// Springs, drag and any other registered generators
    generators: ForceRegistry,

    /// Gravity, collision toggle and contact convention
    config: SimulationConfig,

    /// Collisions and body changes since the last tick began
    events: EventQueue,

    /// Number of completed ticks
    tick: u64,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    /// An empty world under mutual gravity with `G = 1`
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// An empty world under `config`
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            bodies: BodyStorage::new(),
            generators: ForceRegistry::new(),
            config,
            events: EventQueue::new(),
            tick: 0,
        }
    }

    /// Returns the number of completed ticks
    pub fn get_tick(&self) -> u64 {
        self.tick
    }

    pub fn set_gravity(&mut self, gravity: GravityType) {
        self.config.gravity = gravity;
    }

    pub fn get_gravity(&self) -> GravityType {
        self.config.gravity
    }

    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Changes take effect from the next tick
    pub fn get_config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    /// Adds a body to the world and returns its handle
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let handle = self.bodies.add(body);
        log::debug!("added {}", handle);

        self.events.push_body_event(handle, BodyEventType::Added);

        handle
    }

    /// Removes a body along with every generator that references it
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<Body> {
        let body = self
            .bodies
            .remove(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))?;

        let dropped = self.generators.drop_generators_for(handle);
        log::debug!("removed {} and {} generator(s) referencing it", handle, dropped);

        self.events.push_body_event(handle, BodyEventType::Removed);

        Ok(body)
    }

    /// Gets a reference to a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&Body> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body> {
        self.bodies.get_body_mut(handle)
    }

    /// Iterates over all bodies in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.bodies.iter()
    }

    /// Registers a spring, checking that both ends exist and differ
    pub fn add_spring(&mut self, spring: Spring) -> Result<usize> {
        let (a, b) = (spring.get_body_a(), spring.get_body_b());
        if a == b {
            return Err(PhysicsError::InvalidParameter(format!("spring connects {} to itself", a)));
        }
        self.bodies.get_body(a)?;
        self.bodies.get_body(b)?;

        log::debug!(
            "spring {} <-> {} (k = {}, rest = {})",
            a,
            b,
            spring.get_spring_constant(),
            spring.get_equilibrium_distance()
        );
        Ok(self.generators.register(Box::new(spring)))
    }

    /// Registers any force generator and returns its index
    pub fn add_generator(&mut self, generator: Box<dyn ForceGenerator>) -> usize {
        log::debug!("registered {} generator", generator.generator_type());
        self.generators.register(generator)
    }

    /// Gets a generator by the index [`PhysicsWorld::add_generator`] returned
    pub fn get_generator(&self, index: usize) -> Option<&dyn ForceGenerator> {
        self.generators.get(index)
    }

    /// Removes a generator
    pub fn remove_generator(&mut self, index: usize) -> Option<Box<dyn ForceGenerator>> {
        self.generators.unregister(index)
    }

    /// Runs one tick
    ///
    /// 1. World gravity, then every registered generator, adds its forces.
    /// 2. Every pair of colliding bodies receives normal and friction forces.
    /// 3. Every body is integrated, which clears its accumulators.
    /// 4. Colliders are moved onto their bodies.
    ///
    /// All forces are in place before the first body moves.
    pub fn step(&mut self) {
        self.events.clear();
        log::trace!("tick {} with {} bodies", self.tick, self.bodies.len());

        self.apply_gravity();
        self.generators.apply_all(&mut self.bodies);

        if self.config.collisions_enabled {
            self.resolve_collisions();
        }

        for (_, body) in self.bodies.iter_mut() {
            body.step();
        }

        for (_, body) in self.bodies.iter_mut() {
            body.sync_collider();
        }

        self.tick += 1;
    }

    /// Applies the configured world gravity to every body that takes it
    fn apply_gravity(&mut self) {
        match self.config.gravity {
            GravityType::None => {}
            GravityType::Uniform(acceleration) => {
                for (_, body) in self.bodies.iter_mut() {
                    if body.has_flag(BodyFlags::AFFECTED_BY_GRAVITY) {
                        forces::uniform_gravity(body, acceleration);
                    }
                }
            }
            GravityType::Mutual { constant } => {
                let attracting: Vec<BodyHandle> = self
                    .bodies
                    .iter()
                    .filter(|(_, body)| body.has_flag(BodyFlags::AFFECTED_BY_GRAVITY))
                    .map(|(handle, _)| handle)
                    .collect();
                forces::apply_mutual_gravity(&mut self.bodies, &attracting, constant);
            }
        }
    }

    /// Detects contacts over every pair of colliding bodies and applies the response
    fn resolve_collisions(&mut self) {
        let colliding: Vec<BodyHandle> = self
            .bodies
            .iter()
            .filter(|(_, body)| body.has_flag(BodyFlags::COLLIDES) && body.get_collider().is_some())
            .map(|(handle, _)| handle)
            .collect();

        for pair in all_pairs(&colliding) {
            if let Err(e) = self.resolve_pair(pair) {
                log::warn!("collision {}/{} skipped: {}", pair.body_a, pair.body_b, e);
            }
        }
    }

    fn resolve_pair(&mut self, pair: CollisionPair) -> Result<()> {
        let convention = self.config.normal_convention;
        let (a, b) = self.bodies.get_pair_mut(pair.body_a, pair.body_b)?;

        let contact = match (a.get_collider(), b.get_collider()) {
            (Some(first), Some(second)) => detect_contact(first, second),
            _ => None,
        };
        let contact = match contact {
            Some(contact) => contact,
            None => return Ok(()),
        };

        // Orient the contact normal for each body the way the convention expects
        let toward_b = contact.normal;
        let (normal_for_a, normal_for_b) = match convention {
            NormalConvention::TowardContact => (toward_b, -toward_b),
            NormalConvention::AlongForce => (-toward_b, toward_b),
        };
        // Deliberately counts both bodies' approach, not only `a`'s; with `a`'s
        // alone a moving `b` striking a resting `a` would get no normal force
        let normal_force = forces::normal_force(a, normal_for_a, convention)
            - forces::normal_force(b, normal_for_b, convention);

        forces::collision_forces(a, b, normal_force, contact.point);
        log::debug!(
            "contact {} / {} at {} normal {} force {}",
            pair.body_a,
            pair.body_b,
            contact.point,
            contact.normal,
            normal_force
        );

        let wants_event = a.has_flag(BodyFlags::GENERATE_COLLISION_EVENTS)
            || b.has_flag(BodyFlags::GENERATE_COLLISION_EVENTS);
        if wants_event {
            self.events.push_collision(CollisionEvent {
                body_a: pair.body_a,
                body_b: pair.body_b,
                contact,
                normal_force,
            });
        }

        Ok(())
    }

    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// For draining events between ticks
    pub fn get_events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Clears the world of all bodies and generators
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.generators.clear();
        self.events.clear();
        self.tick = 0;
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the number of registered generators
    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }
}

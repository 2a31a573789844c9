use crate::bodies::Body;
use crate::core::{BodyHandle, BodyStorage};
use std::any::Any;
use std::fmt::Debug;

/// Anything that adds forces to bodies once per tick
///
/// Generators run after world gravity and before collision response, and
/// everything they add is consumed by the same tick's integration.
pub trait ForceGenerator: Send + Sync + Debug + 'static {
    fn generator_type(&self) -> &'static str;

    /// Adds this tick's forces; handles that no longer resolve are skipped
    fn apply_forces(&self, bodies: &mut BodyStorage<Body>);

    /// The bodies this generator acts on
    fn bodies(&self) -> &[BodyHandle];

    fn references(&self, body: BodyHandle) -> bool {
        self.bodies().contains(&body)
    }

    /// For downcasting back to the concrete generator
    fn as_any(&self) -> &dyn Any;
}

/// The generators of a world, run in registration order
#[derive(Debug, Default)]
pub struct ForceRegistry {
    generators: Vec<Box<dyn ForceGenerator>>,
}

impl ForceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a generator and returns its index
    ///
    /// Indices shift down when an earlier generator is removed.
    pub fn register(&mut self, generator: Box<dyn ForceGenerator>) -> usize {
        self.generators.push(generator);
        self.generators.len() - 1
    }

    pub fn unregister(&mut self, index: usize) -> Option<Box<dyn ForceGenerator>> {
        (index < self.generators.len()).then(|| self.generators.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&dyn ForceGenerator> {
        self.generators.get(index).map(|generator| generator.as_ref())
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn apply_all(&self, bodies: &mut BodyStorage<Body>) {
        for generator in &self.generators {
            generator.apply_forces(bodies);
        }
    }

    pub fn clear(&mut self) {
        self.generators.clear();
    }

    /// Drops every generator that references `body` and returns how many went
    pub fn drop_generators_for(&mut self, body: BodyHandle) -> usize {
        let before = self.generators.len();
        self.generators.retain(|generator| !generator.references(body));
        before - self.generators.len()
    }
}

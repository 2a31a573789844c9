use crate::bodies::Body;
use crate::core::{BodyHandle, BodyStorage};
use crate::forces::ForceGenerator;
use std::any::Any;

/// Linear drag, `-c·v` on the velocity and `-c·ω` on the spin of each listed body
#[derive(Debug, Clone)]
pub struct DragForce {
    coefficient: f32,
    targets: Vec<BodyHandle>,
    enabled: bool,
}

impl DragForce {
    /// Negative coefficients would pump energy in and are clamped to zero
    pub fn new(coefficient: f32) -> Self {
        Self {
            coefficient: coefficient.max(0.0),
            targets: Vec::new(),
            enabled: true,
        }
    }

    /// Builder form of [`DragForce::add_body`]
    pub fn with_body(mut self, body: BodyHandle) -> Self {
        self.add_body(body);
        self
    }

    pub fn add_body(&mut self, body: BodyHandle) {
        if !self.targets.contains(&body) {
            self.targets.push(body);
        }
    }

    pub fn remove_body(&mut self, body: BodyHandle) {
        self.targets.retain(|&target| target != body);
    }

    pub fn get_coefficient(&self) -> f32 {
        self.coefficient
    }

    pub fn set_coefficient(&mut self, coefficient: f32) {
        self.coefficient = coefficient.max(0.0);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl ForceGenerator for DragForce {
    fn generator_type(&self) -> &'static str {
        "Drag"
    }

    fn apply_forces(&self, bodies: &mut BodyStorage<Body>) {
        if !self.enabled {
            return;
        }

        for &handle in &self.targets {
            match bodies.get_body_mut(handle) {
                Ok(body) => body.add_drag(self.coefficient),
                Err(_) => log::warn!("drag skipped missing {}", handle),
            }
        }
    }

    fn bodies(&self) -> &[BodyHandle] {
        &self.targets
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

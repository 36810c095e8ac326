use crate::forces::ForceRegistry;
use crate::particle::Particle;

/// The simulation context: particle storage plus the force registry that
/// acts on it. Explicitly constructed and owned by the host, so several
/// independent simulations can coexist.
#[derive(Default)]
pub struct World {
    pub particles: Vec<Particle>,
    pub registry: ForceRegistry,
}

impl World {
    pub fn new() -> Self {
        World {
            particles: Vec::new(),
            registry: ForceRegistry::new(),
        }
    }

    /// Add a particle and return its index, the handle force registrations
    /// refer to.
    pub fn add_particle(&mut self, particle: Particle) -> usize {
        self.particles.push(particle);
        self.particles.len() - 1
    }
}

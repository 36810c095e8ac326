//! Force generators and the registry that drives them.
//!
//! A force generator computes one force law and adds its contribution to a
//! particle's accumulator; the [`ForceRegistry`] re-invokes every
//! registered (generator, particle) pair once per step. Integration is a
//! separate concern: generators only ever call [`Particle::add_force`],
//! and the integrator consumes and clears the accumulator afterwards.
//!
//! Particles are addressed by index into the host's particle slice, so a
//! generator that needs a second particle (a particle-to-particle spring)
//! just carries the other index.

use crate::constants::WATER_DENSITY;
use crate::error::PhysicsError;
use crate::particle::Particle;
use crate::vector::Vec3;

/// Compute and add a force contribution for one step.
///
/// `target` is the index of the particle this registration is associated
/// with. Implementations add to the target's force accumulator zero or
/// more times and must not integrate or clear it.
pub trait ForceGenerator {
    fn update_force(
        &self,
        particles: &mut [Particle],
        target: usize,
        duration: f32,
    ) -> Result<(), PhysicsError>;
}

fn lookup(particles: &[Particle], index: usize) -> Result<&Particle, PhysicsError> {
    let count = particles.len();
    particles
        .get(index)
        .ok_or(PhysicsError::ParticleOutOfBounds { index, count })
}

fn lookup_mut(particles: &mut [Particle], index: usize) -> Result<&mut Particle, PhysicsError> {
    let count = particles.len();
    particles
        .get_mut(index)
        .ok_or(PhysicsError::ParticleOutOfBounds { index, count })
}

/// One (generator, particle) association.
struct Registration {
    generator: Box<dyn ForceGenerator>,
    particle: usize,
}

/// An ordered, append-only collection of (generator, particle)
/// associations. Owned by the simulation context; nothing here is global.
///
/// There is no removal operation: registrations persist for the rest of
/// the run.
#[derive(Default)]
pub struct ForceRegistry {
    registrations: Vec<Registration>,
}

impl ForceRegistry {
    pub fn new() -> Self {
        ForceRegistry {
            registrations: Vec::new(),
        }
    }

    /// Associate a generator with a particle index. Duplicates are not
    /// detected; registering the same pair twice doubles its force.
    pub fn add(&mut self, generator: Box<dyn ForceGenerator>, particle: usize) {
        self.registrations.push(Registration {
            generator,
            particle,
        });
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Invoke every generator against its particle, in registration order.
    ///
    /// Must run once per step, before any particle is integrated; the
    /// registry does not clear accumulators (that is the integrator's
    /// job).
    pub fn update_forces(
        &self,
        particles: &mut [Particle],
        duration: f32,
    ) -> Result<(), PhysicsError> {
        for registration in &self.registrations {
            registration
                .generator
                .update_force(particles, registration.particle, duration)?;
        }
        Ok(())
    }
}

/// A constant gravitational field. Adds `gravity * mass`, so equal-mass
/// particles fall identically regardless of the forces otherwise on them.
pub struct Gravity {
    gravity: Vec3,
}

impl Gravity {
    pub fn new(gravity: Vec3) -> Self {
        Gravity { gravity }
    }
}

impl ForceGenerator for Gravity {
    fn update_force(
        &self,
        particles: &mut [Particle],
        target: usize,
        _duration: f32,
    ) -> Result<(), PhysicsError> {
        let particle = lookup_mut(particles, target)?;
        if !particle.has_finite_mass() {
            return Ok(());
        }
        let mass = particle.mass();
        particle.add_force(self.gravity * mass);
        Ok(())
    }
}

/// Velocity drag with a linear and a quadratic term:
/// `-(k1*speed + k2*speed^2) * normalize(velocity)`.
pub struct Drag {
    k1: f32,
    k2: f32,
}

impl Drag {
    pub fn new(k1: f32, k2: f32) -> Self {
        Drag { k1, k2 }
    }
}

impl ForceGenerator for Drag {
    fn update_force(
        &self,
        particles: &mut [Particle],
        target: usize,
        _duration: f32,
    ) -> Result<(), PhysicsError> {
        let particle = lookup_mut(particles, target)?;
        let speed = particle.velocity.magnitude();
        // A particle at rest has no drag direction; contribute nothing.
        if speed == 0.0 {
            return Ok(());
        }
        let coefficient = self.k1 * speed + self.k2 * speed * speed;
        let direction = particle.velocity.normalize()?;
        particle.add_force(direction * -coefficient);
        Ok(())
    }
}

/// A Hookean spring between two particles.
///
/// Asymmetric: force is added to the target particle only. A mutual
/// spring needs two registrations, one per particle, each naming the
/// other as its far end.
pub struct Spring {
    other: usize,
    spring_constant: f32,
    rest_length: f32,
}

impl Spring {
    pub fn new(other: usize, spring_constant: f32, rest_length: f32) -> Self {
        Spring {
            other,
            spring_constant,
            rest_length,
        }
    }
}

impl ForceGenerator for Spring {
    fn update_force(
        &self,
        particles: &mut [Particle],
        target: usize,
        _duration: f32,
    ) -> Result<(), PhysicsError> {
        let far_end = lookup(particles, self.other)?.position;
        let particle = lookup_mut(particles, target)?;
        let delta = particle.position - far_end;
        let length = delta.magnitude();
        // Coincident endpoints give the force no direction.
        if length == 0.0 {
            return Ok(());
        }
        let magnitude = -self.spring_constant * (length - self.rest_length);
        particle.add_force(delta.normalize()? * magnitude);
        Ok(())
    }
}

/// A Hookean spring between a particle and a fixed world-space point.
pub struct AnchoredSpring {
    anchor: Vec3,
    spring_constant: f32,
    rest_length: f32,
}

impl AnchoredSpring {
    pub fn new(anchor: Vec3, spring_constant: f32, rest_length: f32) -> Self {
        AnchoredSpring {
            anchor,
            spring_constant,
            rest_length,
        }
    }
}

impl ForceGenerator for AnchoredSpring {
    fn update_force(
        &self,
        particles: &mut [Particle],
        target: usize,
        _duration: f32,
    ) -> Result<(), PhysicsError> {
        let particle = lookup_mut(particles, target)?;
        let delta = particle.position - self.anchor;
        let length = delta.magnitude();
        if length == 0.0 {
            return Ok(());
        }
        let magnitude = -self.spring_constant * (length - self.rest_length);
        particle.add_force(delta.normalize()? * magnitude);
        Ok(())
    }
}

/// A two-branch buoyancy model driven by the particle's height
/// (`position.y`).
///
/// At or above `water_height + max_depth` the force is the constant
/// `liquid_density * volume`; below that the partial term
/// `liquid_density * volume * ((y - max_depth - water_height) / 2) *
/// max_depth` applies. There is no separate "fully clear of the liquid"
/// branch contributing zero force; the model is kept as-is.
pub struct Buoyancy {
    max_depth: f32,
    volume: f32,
    water_height: f32,
    liquid_density: f32,
}

impl Buoyancy {
    /// Buoyancy in water (density 1000 kg/m^3).
    pub fn new(max_depth: f32, volume: f32, water_height: f32) -> Self {
        Buoyancy {
            max_depth,
            volume,
            water_height,
            liquid_density: WATER_DENSITY,
        }
    }

    pub fn with_density(mut self, liquid_density: f32) -> Self {
        self.liquid_density = liquid_density;
        self
    }
}

impl ForceGenerator for Buoyancy {
    fn update_force(
        &self,
        particles: &mut [Particle],
        target: usize,
        _duration: f32,
    ) -> Result<(), PhysicsError> {
        let particle = lookup_mut(particles, target)?;
        let depth = particle.position.y;

        let mut force = Vec3::ZERO;
        if depth >= self.water_height + self.max_depth {
            force.y = self.liquid_density * self.volume;
        } else {
            force.y = self.liquid_density
                * self.volume
                * ((depth - self.max_depth - self.water_height) / 2.0)
                * self.max_depth;
        }
        particle.add_force(force);
        Ok(())
    }
}

/// A stiff spring solved in closed form per step.
///
/// A stiff spring integrated explicitly blows up at frame-rate step
/// sizes; this generator instead evaluates the underdamped harmonic
/// solution at `t = duration` and back-derives the force that would get
/// the particle there. Only the underdamped case (`4k > d^2`) is covered:
/// critically damped and overdamped configurations contribute no force.
pub struct FakeSpring {
    anchor: Vec3,
    spring_constant: f32,
    damping: f32,
}

impl FakeSpring {
    pub fn new(anchor: Vec3, spring_constant: f32, damping: f32) -> Self {
        FakeSpring {
            anchor,
            spring_constant,
            damping,
        }
    }
}

impl ForceGenerator for FakeSpring {
    fn update_force(
        &self,
        particles: &mut [Particle],
        target: usize,
        duration: f32,
    ) -> Result<(), PhysicsError> {
        if duration <= 0.0 {
            return Err(PhysicsError::InvalidDuration(duration));
        }
        let particle = lookup_mut(particles, target)?;
        if !particle.has_finite_mass() {
            return Ok(());
        }

        let delta = particle.position - self.anchor;

        // gamma is half the damped angular frequency; real only in the
        // underdamped case.
        let discriminant = 4.0 * self.spring_constant - self.damping * self.damping;
        if discriminant <= 0.0 {
            return Ok(());
        }
        let gamma = 0.5 * discriminant.sqrt();

        let c = delta * (self.damping / (2.0 * gamma)) + particle.velocity * (1.0 / gamma);
        let target_position = (delta * (gamma * duration).cos() + c * (gamma * duration).sin())
            * (-0.5 * duration * self.damping).exp();

        let acceleration = (target_position - delta) * (1.0 / (duration * duration))
            - particle.velocity * duration;
        let mass = particle.mass();
        particle.add_force(acceleration * mass);
        Ok(())
    }
}

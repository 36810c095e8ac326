use crate::constants::DEFAULT_DAMPING;
use crate::error::PhysicsError;
use crate::vector::Vec3;

/// A point mass in the simulation.
///
/// Mass is stored as its reciprocal: `inverse_mass == 0.0` encodes an
/// infinite-mass (immovable) particle such as an anchor or the ground.
/// This keeps the integrator free of special cases; an infinite mass
/// simply contributes zero acceleration for any accumulated force.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// World-space location.
    pub position: Vec3,
    pub velocity: Vec3,
    /// Constant per-particle acceleration, applied every step on top of
    /// the force-derived acceleration (e.g. a per-particle gravity).
    pub acceleration: Vec3,
    /// Sum of all forces added since the last integration. Cleared by the
    /// integrator after it has been consumed.
    pub force_accum: Vec3,
    /// Per-step velocity attenuation factor in (0, 1]. Applied as
    /// `damping^duration` so attenuation per unit time does not depend on
    /// the step size.
    pub damping: f32,
    /// Reciprocal of mass; zero means infinite mass. Never negative.
    pub inverse_mass: f32,
}

impl Particle {
    /// A particle at `position` with zero velocity, zero acceleration,
    /// default damping, and infinite mass.
    pub fn new(position: Vec3) -> Self {
        Particle {
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            force_accum: Vec3::ZERO,
            damping: DEFAULT_DAMPING,
            inverse_mass: 0.0,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec3) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Give the particle a finite mass.
    pub fn with_mass(mut self, mass: f32) -> Result<Self, PhysicsError> {
        self.set_mass(mass)?;
        Ok(self)
    }

    /// Store `1 / mass`. Fails with [`PhysicsError::InvalidMass`] when
    /// `mass <= 0`; immovable particles keep `inverse_mass == 0` instead.
    pub fn set_mass(&mut self, mass: f32) -> Result<(), PhysicsError> {
        if mass <= 0.0 {
            return Err(PhysicsError::InvalidMass(mass));
        }
        self.inverse_mass = 1.0 / mass;
        Ok(())
    }

    /// The particle's mass, or `f32::INFINITY` for an immovable particle.
    /// Check [`Particle::has_finite_mass`] before doing arithmetic with
    /// the returned value.
    pub fn mass(&self) -> f32 {
        if self.inverse_mass == 0.0 {
            f32::INFINITY
        } else {
            1.0 / self.inverse_mass
        }
    }

    pub fn has_finite_mass(&self) -> bool {
        self.inverse_mass > 0.0
    }

    /// Add a force for the current step. Contributions sum linearly; the
    /// accumulator is consumed and cleared by the integrator.
    pub fn add_force(&mut self, force: Vec3) {
        self.force_accum += force;
    }

    pub fn clear_accumulator(&mut self) {
        self.force_accum = Vec3::ZERO;
    }
}

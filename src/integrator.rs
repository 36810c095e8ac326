use crate::engine::World;
use crate::error::PhysicsError;
use crate::particle::Particle;

/// Advance one particle by one step of semi-implicit Euler.
///
/// Position updates from the velocity the particle entered the step with;
/// velocity then updates from this step's acceleration. That ordering is
/// what makes the scheme stable at frame-rate step sizes where pure
/// explicit Euler gains energy.
///
/// Infinite-mass particles are never advanced, whatever force has been
/// accumulated on them.
pub fn integrate(particle: &mut Particle, duration: f32) -> Result<(), PhysicsError> {
    if duration <= 0.0 {
        return Err(PhysicsError::InvalidDuration(duration));
    }
    if !particle.has_finite_mass() {
        return Ok(());
    }

    particle.position += particle.velocity * duration;

    let resulting_acceleration =
        particle.acceleration + particle.force_accum * particle.inverse_mass;
    particle.velocity += resulting_acceleration * duration;

    // damping^duration keeps attenuation per unit time independent of the
    // step size.
    particle.velocity *= particle.damping.powf(duration);

    particle.clear_accumulator();
    Ok(())
}

/// Step the whole world forward by `duration`: run every force
/// registration, then integrate every particle.
///
/// All force contributions for the step are accumulated before any
/// particle moves; integrating a particle while another's forces for the
/// same step are still pending would let a spring read a half-advanced
/// position.
pub fn step(world: &mut World, duration: f32) -> Result<(), PhysicsError> {
    world
        .registry
        .update_forces(&mut world.particles, duration)?;
    for particle in &mut world.particles {
        integrate(particle, duration)?;
    }
    Ok(())
}

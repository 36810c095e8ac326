//! Unit tests for the semi-implicit Euler integrator

use pointmass::tests::test_helpers::{approx_eq_f32, approx_eq_vec3, undamped_particle};
use pointmass::{integrate, Particle, PhysicsError, Vec3};

#[test]
fn test_infinite_mass_particle_never_moves() {
    let mut particle = Particle::new(Vec3::new(1.0, 2.0, 3.0));
    particle.add_force(Vec3::new(0.0, -100.0, 0.0));

    integrate(&mut particle, 1.0).unwrap();

    assert_eq!(particle.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(particle.velocity, Vec3::ZERO);
    assert_eq!(particle.acceleration, Vec3::ZERO);
}

#[test]
fn test_constant_velocity_drift() {
    // mass = 2, damping = 1, no acceleration, no force: pure drift.
    let mut particle =
        undamped_particle(Vec3::ZERO, 2.0).with_velocity(Vec3::new(1.0, 0.0, 0.0));

    integrate(&mut particle, 1.0).unwrap();

    assert_eq!(particle.position, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(particle.velocity, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(particle.force_accum, Vec3::ZERO);
}

#[test]
fn test_position_uses_pre_step_velocity() {
    // Semi-implicit Euler: this step's force changes the velocity but not
    // this step's position update.
    let mut particle = undamped_particle(Vec3::ZERO, 2.0);
    particle.add_force(Vec3::new(4.0, 0.0, 0.0));

    integrate(&mut particle, 1.0).unwrap();

    // Old velocity was zero, so position stays put...
    assert_eq!(particle.position, Vec3::ZERO);
    // ...while velocity picked up force * inverse_mass * dt = 4 * 0.5 * 1.
    assert_eq!(particle.velocity, Vec3::new(2.0, 0.0, 0.0));

    integrate(&mut particle, 1.0).unwrap();

    // The next step drifts with the new velocity.
    assert_eq!(particle.position, Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn test_constant_acceleration_applied() {
    let mut particle =
        undamped_particle(Vec3::ZERO, 1.0).with_acceleration(Vec3::new(0.0, -10.0, 0.0));

    integrate(&mut particle, 0.5).unwrap();

    // velocity += (0, -10, 0) * 0.5
    assert!(approx_eq_vec3(
        particle.velocity,
        Vec3::new(0.0, -5.0, 0.0),
        1e-6
    ));
}

#[test]
fn test_accumulator_cleared_after_integration() {
    let mut particle = undamped_particle(Vec3::ZERO, 1.0);
    particle.add_force(Vec3::new(1.0, 1.0, 1.0));

    integrate(&mut particle, 0.1).unwrap();

    assert_eq!(particle.force_accum, Vec3::ZERO);
}

#[test]
fn test_non_positive_duration_fails() {
    let mut particle = undamped_particle(Vec3::ZERO, 1.0);

    assert_eq!(
        integrate(&mut particle, 0.0),
        Err(PhysicsError::InvalidDuration(0.0))
    );
    assert_eq!(
        integrate(&mut particle, -0.5),
        Err(PhysicsError::InvalidDuration(-0.5))
    );
}

#[test]
fn test_damping_is_frame_rate_independent() {
    // damping^duration: one 1.0s step and four 0.25s steps must attenuate
    // the same total amount.
    let make = || {
        Particle::new(Vec3::ZERO)
            .with_velocity(Vec3::new(8.0, 0.0, 0.0))
            .with_damping(0.5)
            .with_mass(1.0)
            .unwrap()
    };

    let mut coarse = make();
    integrate(&mut coarse, 1.0).unwrap();

    let mut fine = make();
    for _ in 0..4 {
        integrate(&mut fine, 0.25).unwrap();
    }

    // Both end at speed 8 * 0.5 = 4
    assert!(approx_eq_f32(coarse.velocity.x, 4.0, 1e-4));
    assert!(approx_eq_f32(fine.velocity.x, coarse.velocity.x, 1e-4));
}

#[test]
fn test_damping_below_one_bleeds_velocity() {
    let mut particle = Particle::new(Vec3::ZERO)
        .with_velocity(Vec3::new(1.0, 0.0, 0.0))
        .with_mass(1.0)
        .unwrap();

    // Default damping is 0.999; after a 1s step the speed drops slightly.
    integrate(&mut particle, 1.0).unwrap();

    assert!(particle.velocity.x < 1.0);
    assert!(particle.velocity.x > 0.99);
}

//! Unit tests for the buoyancy force generator

use pointmass::tests::test_helpers::{approx_eq_f32, undamped_particle};
use pointmass::{Buoyancy, ForceGenerator, Vec3};

#[test]
fn test_full_buoyancy_branch() {
    // max_depth = 1, volume = 10, water_height = 0, density = 1000.
    // y = 5 >= water_height + max_depth = 1: force = density * volume
    let mut particles = vec![undamped_particle(Vec3::new(0.0, 5.0, 0.0), 1.0)];
    let buoyancy = Buoyancy::new(1.0, 10.0, 0.0);

    buoyancy.update_force(&mut particles, 0, 1.0).unwrap();

    assert_eq!(particles[0].force_accum, Vec3::new(0.0, 10000.0, 0.0));
}

#[test]
fn test_partial_branch() {
    // y = 0 < 1: force = 1000 * 10 * ((0 - 1 - 0) / 2) * 1 = -5000
    let mut particles = vec![undamped_particle(Vec3::ZERO, 1.0)];
    let buoyancy = Buoyancy::new(1.0, 10.0, 0.0);

    buoyancy.update_force(&mut particles, 0, 1.0).unwrap();

    assert!(approx_eq_f32(particles[0].force_accum.y, -5000.0, 1e-2));
}

#[test]
fn test_branch_boundary() {
    // Exactly at water_height + max_depth the constant branch applies.
    let mut particles = vec![undamped_particle(Vec3::new(0.0, 3.0, 0.0), 1.0)];
    let buoyancy = Buoyancy::new(1.0, 2.0, 2.0);

    buoyancy.update_force(&mut particles, 0, 1.0).unwrap();

    assert!(approx_eq_f32(particles[0].force_accum.y, 2000.0, 1e-3));
}

#[test]
fn test_force_is_purely_vertical() {
    let mut particles =
        vec![undamped_particle(Vec3::new(7.0, 0.5, -3.0), 1.0)];
    let buoyancy = Buoyancy::new(1.0, 10.0, 0.0);

    buoyancy.update_force(&mut particles, 0, 1.0).unwrap();

    assert_eq!(particles[0].force_accum.x, 0.0);
    assert_eq!(particles[0].force_accum.z, 0.0);
}

#[test]
fn test_custom_liquid_density() {
    // Mercury, roughly: 13600 kg/m^3. Same geometry as the full branch
    // above: force = 13600 * 10 = 136000.
    let mut particles = vec![undamped_particle(Vec3::new(0.0, 5.0, 0.0), 1.0)];
    let buoyancy = Buoyancy::new(1.0, 10.0, 0.0).with_density(13600.0);

    buoyancy.update_force(&mut particles, 0, 1.0).unwrap();

    assert!(approx_eq_f32(particles[0].force_accum.y, 136000.0, 1e-1));
}

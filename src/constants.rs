//! Default physical constants for the kernel.

use crate::vector::Vec3;

/// Default per-step velocity damping factor. Slightly below one to bleed
/// off numerical energy gain without visibly slowing the simulation.
pub const DEFAULT_DAMPING: f32 = 0.999;

/// Standard earth gravity (Y-up).
pub const EARTH_GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// Density of water in kg/m^3, the default liquid for buoyancy.
pub const WATER_DENSITY: f32 = 1000.0;

pub mod constants;
pub mod engine;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod particle;
pub mod vector;

pub use constants::{DEFAULT_DAMPING, EARTH_GRAVITY, WATER_DENSITY};
pub use engine::World;
pub use error::PhysicsError;
pub use forces::{
    AnchoredSpring, Buoyancy, Drag, FakeSpring, ForceGenerator, ForceRegistry, Gravity, Spring,
};
pub use integrator::{integrate, step};
pub use particle::Particle;
pub use vector::Vec3;

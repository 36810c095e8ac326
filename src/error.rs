use thiserror::Error;

/// Errors raised by the kernel. All of them signal a logic bug in
/// simulation setup; none is transient or retryable.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    /// `normalize` was called on a vector with zero magnitude.
    #[error("cannot normalize a vector with zero magnitude")]
    DegenerateVector,

    /// Mass must be positive. Use the default inverse mass of zero for
    /// immovable particles instead of passing zero here.
    #[error("mass must be positive, got {0}")]
    InvalidMass(f32),

    /// Step durations must be positive.
    #[error("step duration must be positive, got {0}")]
    InvalidDuration(f32),

    /// A force registration referenced a particle index outside the
    /// particle slice it was updated against.
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },
}

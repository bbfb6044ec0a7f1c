//! Error type shared by every fallible constructor in the crate.
//!
//! Construction boundaries (polygons, bodies, shape builders, force creators)
//! validate their input and return `Result<T, PhysicsError>`. Once a value is
//! built, the simulation step itself never fails.

use thiserror::Error;

use crate::world::BodyId;

/// Errors raised when a caller hands the engine invalid input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// A polygon needs at least three vertices to enclose an area.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices that was supplied.
        count: usize,
    },

    /// A shape dimension (radius, width, angle, ...) was zero or negative.
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension {
        /// Which dimension was rejected.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Mass was negative or NaN. Infinite mass is allowed.
    #[error("mass must be non-negative, got {mass}")]
    InvalidMass { mass: f64 },

    /// A force or response constant is out of its allowed range.
    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The handle does not refer to a body owned by this scene.
    #[error("body {0:?} is not part of the scene")]
    UnknownBody(BodyId),

    /// A pairwise force creator was bound to the same body twice.
    #[error("pairwise force bound twice to body {0:?}")]
    SelfInteraction(BodyId),

    /// A damaging collision needs the removed body to carry projectile damage.
    #[error("body {0:?} is not tagged as a projectile")]
    NotAProjectile(BodyId),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PhysicsError>;

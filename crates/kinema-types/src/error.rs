//! Error types for the Kinema core.
//!
//! Fallible host-facing operations return `KinemaResult<T>`. Nothing
//! inside the stepping loop itself is fallible — numerical
//! degeneracies are absorbed so a physics tick can never abort the
//! host's frame loop.

use thiserror::Error;

/// Unified error type for the Kinema core.
#[derive(Debug, Error)]
pub enum KinemaError {
    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A body id does not name a live body.
    #[error("Unknown body: {0:?}")]
    UnknownBody(crate::BodyId),

    /// A spring link request is malformed (e.g. a self-link).
    #[error("Invalid spring: {0}")]
    InvalidSpring(String),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, KinemaError>`.
pub type KinemaResult<T> = Result<T, KinemaError>;

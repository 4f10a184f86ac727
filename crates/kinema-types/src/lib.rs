//! # kinema-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the Kinema 2D rigid-body simulation core.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Kinema crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{KinemaError, KinemaResult};
pub use ids::BodyId;
pub use scalar::Scalar;

//! Scalar type alias for the simulation.
//!
//! The core is headless and CPU-only, so there is no GPU pressure
//! toward f32. Double precision keeps drift from long-running
//! accumulated integration negligible at host frame rates.

/// The floating-point type used throughout the simulation.
///
/// Set to `f64`. The host's sprite coordinates are logical screen
/// units, which f64 represents exactly across any realistic stage.
pub type Scalar = f64;

//! Physical constants and simulation defaults.
//!
//! Coordinates follow the host's screen convention: +y points down,
//! so gravity is a positive y component.

use crate::Scalar;

/// Gravitational acceleration (simulation units/s², +y down).
pub const GRAVITY: Scalar = 9.8;

/// Default fixed step size (milliseconds). 4 ms ≈ 250 sub-steps/s,
/// comfortably above any host frame rate.
pub const DEFAULT_STEP_MILLIS: Scalar = 4.0;

/// Default conversion from step milliseconds to simulation time units.
pub const DEFAULT_STEP_SCALE: Scalar = 0.01;

/// Default upper bound on sub-steps per `step` call. Bounds catch-up
/// work after a long pause (backgrounded tab, debugger).
pub const DEFAULT_MAX_SUBSTEPS: u32 = 10;

/// Drag coefficient for the quadratic air-drag model (sphere-ish).
pub const DRAG_COEFFICIENT: Scalar = 0.47;

/// Air density (kg/m³ at 20 °C).
pub const AIR_DENSITY: Scalar = 1.2041;

/// Converts sprite width (screen units) to an approximate
/// cross-sectional area for the drag model.
pub const CROSS_SECTION_SCALE: Scalar = 0.001;

/// Velocity-proportional spring damping coefficient.
pub const SPRING_DAMPING: Scalar = 0.1;

/// Per-tick exponential decay factor for unconsumed impulses.
pub const IMPULSE_DECAY: Scalar = 0.95;

/// Magnitude below which a residual impulse snaps to zero.
pub const IMPULSE_EPSILON: Scalar = 1.0e-6;

/// Epsilon for floating-point comparisons and degeneracy guards.
pub const EPSILON: Scalar = 1.0e-9;

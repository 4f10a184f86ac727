//! Solver configuration.
//!
//! Every tunable lives here and is passed at construction — the
//! solver has no process-wide state and no ambient debug flags.

use serde::{Deserialize, Serialize};

use kinema_contact::RestitutionMix;
use kinema_math::Vec2;
use kinema_types::{constants, KinemaError, KinemaResult, Scalar};

/// Configuration for the rigid-body solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Gravity [gx, gy] in simulation units/s². +y points down in
    /// host screen coordinates.
    pub gravity: [Scalar; 2],

    /// Fixed sub-step size in milliseconds.
    pub fixed_step_millis: Scalar,

    /// Conversion from step milliseconds to simulation time units.
    pub step_scale: Scalar,

    /// Upper bound on sub-steps per `step` call. Bounds catch-up work
    /// after a pause (backgrounded tab, debugger).
    pub max_substeps: u32,

    /// Drag coefficient for the quadratic air-drag model.
    pub drag_coefficient: Scalar,

    /// Air density for the drag model.
    pub air_density: Scalar,

    /// Converts sprite width to an approximate cross-sectional area.
    pub cross_section_scale: Scalar,

    /// Velocity-proportional spring damping coefficient.
    pub spring_damping: Scalar,

    /// How a contact pair's restitution is combined.
    pub restitution_mix: RestitutionMix,

    /// Per-tick decay factor for unconsumed impulses (0–1).
    pub impulse_decay: Scalar,

    /// Magnitude below which a residual impulse snaps to zero.
    pub impulse_epsilon: Scalar,

    /// Emit per-sub-step trace logging.
    pub debug_enabled: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, constants::GRAVITY],
            fixed_step_millis: constants::DEFAULT_STEP_MILLIS,
            step_scale: constants::DEFAULT_STEP_SCALE,
            max_substeps: constants::DEFAULT_MAX_SUBSTEPS,
            drag_coefficient: constants::DRAG_COEFFICIENT,
            air_density: constants::AIR_DENSITY,
            cross_section_scale: constants::CROSS_SECTION_SCALE,
            spring_damping: constants::SPRING_DAMPING,
            restitution_mix: RestitutionMix::default(),
            impulse_decay: constants::IMPULSE_DECAY,
            impulse_epsilon: constants::IMPULSE_EPSILON,
            debug_enabled: false,
        }
    }
}

impl SolverConfig {
    /// Creates a config for debugging (per-sub-step tracing, small
    /// catch-up budget so a paused host stays inspectable).
    pub fn debug() -> Self {
        Self {
            max_substeps: 4,
            debug_enabled: true,
            ..Default::default()
        }
    }

    /// Creates a high-accuracy config (halved step size, larger
    /// catch-up budget).
    pub fn high_accuracy() -> Self {
        Self {
            fixed_step_millis: constants::DEFAULT_STEP_MILLIS * 0.5,
            max_substeps: constants::DEFAULT_MAX_SUBSTEPS * 2,
            ..Default::default()
        }
    }

    /// Gravity as a vector.
    #[inline]
    pub fn gravity_vec(&self) -> Vec2 {
        Vec2::new(self.gravity[0], self.gravity[1])
    }

    /// Simulation time advanced by one sub-step.
    #[inline]
    pub fn dt(&self) -> Scalar {
        self.fixed_step_millis * self.step_scale
    }

    /// Checks structural validity. Body-level values (mass,
    /// restitution) are clamped at construction instead and never
    /// reach this path.
    pub fn validate(&self) -> KinemaResult<()> {
        if !(self.fixed_step_millis.is_finite() && self.fixed_step_millis > 0.0) {
            return Err(KinemaError::InvalidConfig(
                "fixed_step_millis must be positive and finite".into(),
            ));
        }
        if !(self.step_scale.is_finite() && self.step_scale > 0.0) {
            return Err(KinemaError::InvalidConfig(
                "step_scale must be positive and finite".into(),
            ));
        }
        if self.max_substeps == 0 {
            return Err(KinemaError::InvalidConfig(
                "max_substeps must be at least 1".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.impulse_decay) {
            return Err(KinemaError::InvalidConfig(
                "impulse_decay must be in [0, 1)".into(),
            ));
        }
        if self.drag_coefficient < 0.0 || self.air_density < 0.0 {
            return Err(KinemaError::InvalidConfig(
                "drag parameters must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

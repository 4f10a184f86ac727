//! Inspection hooks for the stepping loop.
//!
//! Hooks are called by the solver at defined points so monitoring and
//! debugging logic can observe a run without the solver knowing about
//! any particular sink.
//!
//! # Lifecycle
//!
//! ```text
//! for each step call:
//!   hook.on_step_begin(...)
//!   for each sub-step:
//!     hook.on_substep(...)
//!   hook.on_step_end(...)
//! ```

use kinema_contact::CollisionStepResult;

use crate::solver::StepReport;

/// Trait for stepping inspection hooks.
///
/// All methods default to no-ops; implement only the points you need.
/// Hooks should treat the simulation as read-only.
pub trait InspectionHook: Send {
    /// Called once per `step` call, before any sub-step runs.
    fn on_step_begin(&mut self, step: u32, substeps: u32) {
        let _ = (step, substeps);
    }

    /// Called after each sub-step with its collision outcome.
    fn on_substep(&mut self, step: u32, substep: u32, collisions: &CollisionStepResult) {
        let _ = (step, substep, collisions);
    }

    /// Called once per `step` call, after impulse decay.
    fn on_step_end(&mut self, step: u32, report: &StepReport) {
        let _ = (step, report);
    }

    /// Returns the hook's name for logging.
    fn name(&self) -> &str;
}

/// Hook that observes nothing.
pub struct NullHook;

impl InspectionHook for NullHook {
    fn name(&self) -> &str {
        "null_hook"
    }
}

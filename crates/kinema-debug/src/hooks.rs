//! Telemetry bridging hook.
//!
//! Translates solver lifecycle callbacks into telemetry events.
//! Events are buffered here and drained by the host for dispatch
//! through an `EventBus`.

use kinema_contact::CollisionStepResult;
use kinema_solver::{InspectionHook, StepReport};
use kinema_telemetry::{EventKind, SimulationEvent};

/// Hook that records the stepping lifecycle as telemetry events.
pub struct TelemetryHook {
    events: Vec<SimulationEvent>,
}

impl TelemetryHook {
    /// Creates a new telemetry hook.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Drains collected events for dispatch.
    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for TelemetryHook {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectionHook for TelemetryHook {
    fn on_step_begin(&mut self, step: u32, substeps: u32) {
        self.events
            .push(SimulationEvent::new(step, EventKind::StepBegin { substeps }));
    }

    fn on_substep(&mut self, step: u32, _substep: u32, collisions: &CollisionStepResult) {
        self.events.push(SimulationEvent::new(
            step,
            EventKind::ContactDetection {
                candidate_pairs: collisions.candidate_pairs,
                contact_count: collisions.contacts_detected,
                max_penetration: collisions.max_penetration,
            },
        ));
    }

    fn on_step_end(&mut self, step: u32, report: &StepReport) {
        self.events.push(SimulationEvent::new(
            step,
            EventKind::Energy {
                kinetic: report.kinetic_energy,
            },
        ));
        self.events.push(SimulationEvent::new(
            step,
            EventKind::StepEnd {
                wall_time: report.wall_time,
            },
        ));
    }

    fn name(&self) -> &str {
        "telemetry_hook"
    }
}

//! Simulation event types.
//!
//! Structured events emitted around the stepping loop. Events are
//! lightweight value types that carry just enough data to be useful
//! for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the stepping loop.
///
/// Events are tagged with the step index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step call number (0-indexed).
    pub step: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// A step call started.
    StepBegin {
        /// Sub-steps scheduled for this call.
        substeps: u32,
    },

    /// Contact detection completed for one sub-step.
    ContactDetection {
        /// Broad-phase candidate pairs.
        candidate_pairs: u32,
        /// Narrow-phase contacts.
        contact_count: u32,
        /// Deepest penetration (simulation units).
        max_penetration: f64,
    },

    /// Energy snapshot after a step call.
    Energy {
        /// Kinetic energy (½·Σ m·|v|²).
        kinetic: f64,
    },

    /// A step call completed.
    StepEnd {
        /// Wall-clock time for the entire call (seconds).
        wall_time: f64,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given step.
    pub fn new(step: u32, kind: EventKind) -> Self {
        Self { step, kind }
    }
}

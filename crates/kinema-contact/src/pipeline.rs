//! Unified collision pipeline: broad → narrow → response.
//!
//! The solver runs the pipeline once per sub-step, after forces are
//! accumulated and before velocities are integrated.

use kinema_body::BodySet;
use kinema_types::Scalar;

use crate::broad::{AabbBroadPhase, BroadPhase};
use crate::narrow::{CircleNarrowPhase, NarrowPhase};
use crate::response::{ContactResponse, ContactResult, RestitutionMix, RestitutionResponse};

/// Orchestrates the three collision phases.
pub struct CollisionPipeline {
    /// Broad phase candidate pruning.
    pub broad: Box<dyn BroadPhase + Send + Sync>,
    /// Narrow phase exact testing.
    pub narrow: Box<dyn NarrowPhase + Send + Sync>,
    /// Velocity-level contact response.
    pub response: Box<dyn ContactResponse + Send + Sync>,
}

impl CollisionPipeline {
    /// Creates a pipeline from explicit phase implementations.
    pub fn new(
        broad: Box<dyn BroadPhase + Send + Sync>,
        narrow: Box<dyn NarrowPhase + Send + Sync>,
        response: Box<dyn ContactResponse + Send + Sync>,
    ) -> Self {
        Self {
            broad,
            narrow,
            response,
        }
    }

    /// Creates the standard pipeline with the given restitution rule.
    pub fn standard(mix: RestitutionMix) -> Self {
        Self::new(
            Box::new(AabbBroadPhase),
            Box::new(CircleNarrowPhase),
            Box::new(RestitutionResponse::new(mix)),
        )
    }

    /// Run broad → narrow → response once.
    pub fn step(&mut self, bodies: &mut BodySet) -> CollisionStepResult {
        let candidates = self.broad.candidate_pairs(bodies);
        let contacts = self.narrow.detect(&candidates, bodies);

        let max_penetration = contacts
            .iter()
            .map(|c| c.penetration_depth)
            .fold(0.0, Scalar::max);

        let response = self.response.resolve(&contacts, bodies);

        CollisionStepResult {
            candidate_pairs: candidates.len() as u32,
            contacts_detected: contacts.len() as u32,
            max_penetration,
            response,
        }
    }
}

impl Default for CollisionPipeline {
    fn default() -> Self {
        Self::standard(RestitutionMix::default())
    }
}

/// Result of a full collision pipeline pass.
#[derive(Debug, Clone, Default)]
pub struct CollisionStepResult {
    /// Number of broad-phase candidate pairs.
    pub candidate_pairs: u32,
    /// Number of narrow-phase contacts detected.
    pub contacts_detected: u32,
    /// Deepest detected penetration.
    pub max_penetration: Scalar,
    /// Contact response outcome.
    pub response: ContactResult,
}

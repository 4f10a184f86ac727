//! Narrow phase collision detection.
//!
//! Refines broad phase candidates into exact contact data
//! (penetration depth, contact point, normals).

use kinema_body::BodySet;
use kinema_math::Vec2;
use kinema_types::{constants::EPSILON, BodyId};

use crate::broad::CandidatePair;
use crate::contact::Contact;

/// Trait for narrow phase collision detection.
///
/// # Implementations
/// - [`CircleNarrowPhase`] — bounding-circle depth test
/// - [`NullNarrowPhase`] — no-op for collision-free stepping
pub trait NarrowPhase: Send {
    /// Test each candidate pair for actual overlap.
    ///
    /// Returns at most one contact per candidate pair.
    fn detect(&self, candidates: &[CandidatePair], bodies: &BodySet) -> Vec<Contact>;

    /// Returns the narrow phase strategy name.
    fn name(&self) -> &str;
}

/// Bounding-circle narrow phase.
///
/// Each body is approximated by a circle of its bounding radius; a
/// pair is in contact when the center distance does not exceed the
/// combined radii. Penetration depth is the shortfall.
#[derive(Debug, Default)]
pub struct CircleNarrowPhase;

impl CircleNarrowPhase {
    /// Circle test for one pair. Public so callers can probe a single
    /// pair without building a candidate list.
    pub fn contact(bodies: &BodySet, a: BodyId, b: BodyId) -> Option<Contact> {
        let (body_a, body_b) = (bodies.get(a)?, bodies.get(b)?);

        let center_a = body_a.position();
        let center_b = body_b.position();
        let combined = body_a.bounding_radius() + body_b.bounding_radius();

        let offset = center_b - center_a;
        let distance = offset.length();
        if distance > combined {
            return None;
        }

        let depth = combined - distance;
        let (normal_a, normal_b) = if distance < EPSILON {
            // Coincident centers have no separation axis; fall back to
            // the vertical so the pair still separates deterministically.
            (Vec2::NEG_Y, Vec2::Y)
        } else {
            let toward_b = offset / distance;
            (-toward_b, toward_b)
        };

        Some(Contact {
            body_a: a,
            body_b: b,
            contact_point: center_a + normal_b * depth,
            normal_a,
            normal_b,
            penetration_depth: depth,
        })
    }
}

impl NarrowPhase for CircleNarrowPhase {
    fn detect(&self, candidates: &[CandidatePair], bodies: &BodySet) -> Vec<Contact> {
        candidates
            .iter()
            .filter_map(|pair| Self::contact(bodies, pair.a, pair.b))
            .collect()
    }

    fn name(&self) -> &str {
        "circle_narrow_phase"
    }
}

/// No-op narrow phase for stepping without collision handling.
pub struct NullNarrowPhase;

impl NarrowPhase for NullNarrowPhase {
    fn detect(&self, _candidates: &[CandidatePair], _bodies: &BodySet) -> Vec<Contact> {
        Vec::new()
    }

    fn name(&self) -> &str {
        "null_narrow_phase"
    }
}

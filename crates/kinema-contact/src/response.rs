//! Contact response.
//!
//! Resolves detected contacts by adjusting body velocities. The
//! response is an intentionally simplified bounce, not a
//! momentum-conserving impulse solve: each massive body's new velocity
//! is its own speed redirected along its outward contact normal and
//! scaled by the pair's restitution. Mass ratio and friction play no
//! part in it.

use serde::{Deserialize, Serialize};

use kinema_body::BodySet;
use kinema_types::Scalar;

use crate::contact::Contact;

/// How the pair restitution `e` is derived from the two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RestitutionMix {
    /// `e = min(e_a, e_b)` — the less bouncy body wins.
    #[default]
    Min,
    /// `e = (e_a + e_b) / 2`.
    Mean,
}

impl RestitutionMix {
    /// Combines the two bodies' restitution coefficients.
    pub fn combine(self, a: Scalar, b: Scalar) -> Scalar {
        match self {
            RestitutionMix::Min => a.min(b),
            RestitutionMix::Mean => (a + b) * 0.5,
        }
    }
}

/// Result of a contact response pass.
#[derive(Debug, Clone, Default)]
pub struct ContactResult {
    /// Number of contacts that adjusted at least one velocity.
    pub resolved_count: u32,
    /// Maximum penetration depth remaining after resolution.
    pub max_residual_penetration: Scalar,
    /// Total speed change applied across all bodies.
    pub total_speed_change: Scalar,
}

/// Trait for contact response strategies.
///
/// # Implementations
/// - [`RestitutionResponse`] — restitution-scaled bounce
/// - [`NullContactResponse`] — detect-only pipelines
pub trait ContactResponse: Send {
    /// Resolve detected contacts by mutating body velocities.
    fn resolve(&self, contacts: &[Contact], bodies: &mut BodySet) -> ContactResult;

    /// Returns the response strategy name.
    fn name(&self) -> &str;
}

/// Restitution-scaled bounce response.
///
/// Both velocities are snapshotted before either is written, so the
/// outcome is symmetric in the pair and independent of contact order
/// within the pass. Static bodies keep their contacts and normals but
/// are never mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestitutionResponse {
    /// Pair restitution combination rule.
    pub mix: RestitutionMix,
}

impl RestitutionResponse {
    /// Creates a response with the given restitution rule.
    pub fn new(mix: RestitutionMix) -> Self {
        Self { mix }
    }
}

impl ContactResponse for RestitutionResponse {
    fn resolve(&self, contacts: &[Contact], bodies: &mut BodySet) -> ContactResult {
        let mut result = ContactResult::default();

        for contact in contacts {
            let Some((body_a, body_b)) = bodies.pair_mut(contact.body_a, contact.body_b)
            else {
                continue;
            };

            let e = self.mix.combine(body_a.restitution(), body_b.restitution());
            let speed_a = body_a.velocity.length();
            let speed_b = body_b.velocity.length();

            let mut touched = false;
            if !body_a.is_static() {
                let next = contact.normal_a * (speed_a * e);
                result.total_speed_change += (next - body_a.velocity).length();
                body_a.velocity = next;
                touched = true;
            }
            if !body_b.is_static() {
                let next = contact.normal_b * (speed_b * e);
                result.total_speed_change += (next - body_b.velocity).length();
                body_b.velocity = next;
                touched = true;
            }

            if touched {
                result.resolved_count += 1;
            }
            result.max_residual_penetration =
                result.max_residual_penetration.max(contact.penetration_depth);
        }

        result
    }

    fn name(&self) -> &str {
        "restitution_response"
    }
}

/// No-op response for detect-only pipelines.
pub struct NullContactResponse;

impl ContactResponse for NullContactResponse {
    fn resolve(&self, _contacts: &[Contact], _bodies: &mut BodySet) -> ContactResult {
        ContactResult::default()
    }

    fn name(&self) -> &str {
        "null_contact_response"
    }
}

//! Contact manifold data.
//!
//! A `Contact` is ephemeral: produced by one detection pass and
//! consumed immediately by resolution, never stored across ticks.

use serde::{Deserialize, Serialize};

use kinema_math::Vec2;
use kinema_types::{BodyId, Scalar};

/// A detected overlap between two bodies.
///
/// Normals are unit vectors along the line between the two centers:
/// `normal_a` points away from B (the direction A bounces), `normal_b`
/// is its negation. One contact per body pair per detection pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// First body of the pair.
    pub body_a: BodyId,
    /// Second body of the pair.
    pub body_b: BodyId,
    /// Estimated contact location.
    pub contact_point: Vec2,
    /// Outward bounce direction for body A.
    pub normal_a: Vec2,
    /// Outward bounce direction for body B.
    pub normal_b: Vec2,
    /// Overlap depth along the center line. Never negative.
    pub penetration_depth: Scalar,
}

impl Contact {
    /// Returns true if the bodies actually interpenetrate (as opposed
    /// to merely touching).
    pub fn is_penetrating(&self) -> bool {
        self.penetration_depth > 0.0
    }
}

//! Body state snapshots for replay and debugging.
//!
//! A snapshot captures every live body's position and velocity at a
//! point in time, enabling diff-based debugging between ticks.

use serde::{Deserialize, Serialize};

use kinema_body::BodySet;
use kinema_types::{KinemaError, KinemaResult};

/// A flat capture of body kinematic state.
///
/// Serialized with `bincode` for compact binary output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySnapshot {
    /// Step index when this snapshot was taken.
    pub step: u32,
    /// Body positions (flat: [x0, y0, x1, y1, ...], slot order).
    pub positions: Vec<f64>,
    /// Body velocities (flat: [vx0, vy0, ...], slot order).
    pub velocities: Vec<f64>,
    /// Number of bodies captured.
    pub body_count: usize,
}

impl BodySnapshot {
    /// Captures the current state of every live body.
    pub fn capture(step: u32, bodies: &BodySet) -> Self {
        let mut positions = Vec::with_capacity(bodies.len() * 2);
        let mut velocities = Vec::with_capacity(bodies.len() * 2);

        for (_, body) in bodies.iter() {
            let p = body.position();
            positions.push(p.x);
            positions.push(p.y);
            velocities.push(body.velocity.x);
            velocities.push(body.velocity.y);
        }

        Self {
            step,
            body_count: positions.len() / 2,
            positions,
            velocities,
        }
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> KinemaResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| KinemaError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> KinemaResult<Self> {
        bincode::deserialize(data).map_err(|e| KinemaError::Serialization(e.to_string()))
    }
}

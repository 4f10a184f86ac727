//! Per-sub-step force models.
//!
//! Each massive body's accumulator is rebuilt from scratch every
//! sub-step: weight, quadratic air drag, net spring force, and any
//! pending impulse. Static bodies accumulate nothing.

use kinema_body::{BodySet, RigidBody};
use kinema_math::Vec2;
use kinema_types::constants::EPSILON;

use crate::config::SolverConfig;

/// Weight force `F = m·g`.
#[inline]
pub fn weight_force(body: &RigidBody, gravity: Vec2) -> Vec2 {
    gravity * body.mass()
}

/// Quadratic air drag `F = -v̂ · ½ρ|v|²·C_d·A`, with the
/// cross-sectional area approximated from the sprite width.
///
/// A resting body (or one with no footprint) feels no drag; the
/// zero-velocity direction is never normalized.
pub fn drag_force(body: &RigidBody, config: &SolverConfig) -> Vec2 {
    let speed = body.velocity.length();
    if speed < EPSILON {
        return Vec2::ZERO;
    }
    let area = body.width() * config.cross_section_scale;
    let magnitude =
        0.5 * config.air_density * speed * speed * config.drag_coefficient * area;
    body.velocity * (-magnitude / speed)
}

/// Rebuilds the force accumulator of every massive body.
///
/// Consumes pending impulses: an impulse queued on a massive body is
/// folded into this sub-step's force and zeroed.
pub fn accumulate(bodies: &mut BodySet, config: &SolverConfig) {
    let gravity = config.gravity_vec();
    for id in bodies.ids() {
        let spring_net = bodies.net_spring_force(id, config.spring_damping);
        let Some(body) = bodies.get_mut(id) else {
            continue;
        };
        if body.is_static() {
            continue;
        }
        let mut force = weight_force(body, gravity);
        force += drag_force(body, config);
        force += spring_net;
        force += body.consume_impulse();
        body.force = force;
    }
}

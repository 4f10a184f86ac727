//! One simulated point mass.
//!
//! A body owns its velocity, acceleration, force accumulator, and
//! pending impulse. Its position lives in the host sprite. Mass 0
//! marks a static body: it participates in collisions as a partner
//! but is never moved by the solver.

use std::collections::HashMap;

use kinema_math::{Aabb, Vec2};
use kinema_types::{constants::EPSILON, BodyId, Scalar};

use crate::spring::Spring;
use crate::sprite::Sprite;

/// A rigid body in the simulation.
pub struct RigidBody {
    /// Host sprite owning this body's position and footprint.
    sprite: Box<dyn Sprite>,
    /// Mass. 0 marks a static body. Never negative.
    mass: Scalar,
    /// Restitution (bounciness). Never negative.
    restitution: Scalar,
    /// Velocity, mutated only by the solver and reset paths.
    pub velocity: Vec2,
    /// Acceleration carried between sub-steps for the averaged
    /// velocity-Verlet update.
    pub acceleration: Vec2,
    /// Per-sub-step force accumulator.
    pub force: Vec2,
    /// One-shot external impulse, consumed into the next force pass.
    pub pending_impulse: Vec2,
    /// Spring links keyed by partner id.
    pub(crate) springs: HashMap<BodyId, Spring>,
}

impl RigidBody {
    /// Creates a body bound to a host sprite.
    ///
    /// Negative mass or restitution is clamped to zero rather than
    /// rejected — an invalid value from the host degrades to a static
    /// or fully inelastic body instead of failing the attach.
    pub fn new(sprite: Box<dyn Sprite>, mass: Scalar, restitution: Scalar) -> Self {
        Self {
            sprite,
            mass: mass.max(0.0),
            restitution: restitution.max(0.0),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            force: Vec2::ZERO,
            pending_impulse: Vec2::ZERO,
            springs: HashMap::new(),
        }
    }

    /// Mass of the body.
    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    /// Restitution coefficient.
    #[inline]
    pub fn restitution(&self) -> Scalar {
        self.restitution
    }

    /// Returns true if this body is static (mass 0).
    #[inline]
    pub fn is_static(&self) -> bool {
        self.mass == 0.0
    }

    /// Current position, read from the host sprite.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.sprite.center()
    }

    /// Repositions the host sprite.
    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.sprite.set_center(position);
    }

    /// Width of the rendered footprint.
    #[inline]
    pub fn width(&self) -> Scalar {
        self.sprite.width()
    }

    /// Height of the rendered footprint.
    #[inline]
    pub fn height(&self) -> Scalar {
        self.sprite.height()
    }

    /// Half of the larger footprint dimension, for the circle
    /// narrow phase. A sprite without extent yields 0.
    #[inline]
    pub fn bounding_radius(&self) -> Scalar {
        self.width().max(self.height()) * 0.5
    }

    /// Axis-aligned bounds of the footprint at the current position.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.position(), self.width(), self.height())
    }

    /// Bounds overlap test against another body.
    pub fn overlaps_bounds(&self, other: &RigidBody) -> bool {
        self.bounds().intersects(&other.bounds())
    }

    /// Hookean spring force toward `rest_length` along the line to
    /// `other_position`, with velocity-proportional damping.
    ///
    /// Coincident endpoints have no defined direction; the force is
    /// zero rather than NaN.
    pub fn spring_force(
        &self,
        other_position: Vec2,
        stiffness: Scalar,
        rest_length: Scalar,
        damping: Scalar,
    ) -> Vec2 {
        let offset = self.position() - other_position;
        let distance = offset.length();
        if distance < EPSILON {
            return Vec2::ZERO;
        }
        let direction = offset / distance;
        let restoring = direction * (-stiffness * (distance - rest_length));
        restoring - self.velocity * damping
    }

    /// Queues a one-shot impulse for the next force pass.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.pending_impulse += impulse;
    }

    /// Returns the pending impulse and zeroes it.
    pub fn consume_impulse(&mut self) -> Vec2 {
        std::mem::replace(&mut self.pending_impulse, Vec2::ZERO)
    }

    /// Decays any residual impulse, snapping to zero below `epsilon`.
    pub fn decay_impulse(&mut self, factor: Scalar, epsilon: Scalar) {
        self.pending_impulse *= factor;
        if self.pending_impulse.length() < epsilon {
            self.pending_impulse = Vec2::ZERO;
        }
    }

    /// Verlet-style position predictor:
    /// `p += v·dt + a·½dt²`. Static bodies never move.
    pub fn integrate_position(&mut self, dt: Scalar) {
        if self.is_static() {
            return;
        }
        let delta = self.velocity * dt + self.acceleration * (0.5 * dt * dt);
        let next = self.position() + delta;
        self.set_position(next);
    }

    /// Averaged-acceleration velocity update:
    /// `a_new = f/m`, `a_avg = (a + a_new)/2`, `v += a_avg·dt`.
    /// The averaged value is carried as the body's acceleration for
    /// the next sub-step. Static bodies are untouched regardless of
    /// accumulated force.
    pub fn integrate_velocity(&mut self, dt: Scalar) {
        if self.is_static() {
            return;
        }
        let new_acceleration = self.force / self.mass;
        let avg_acceleration = (self.acceleration + new_acceleration) * 0.5;
        self.velocity += avg_acceleration * dt;
        self.acceleration = avg_acceleration;
    }

    /// Zeroes all owned simulation state. Spring links are preserved:
    /// a host drag-and-drop relocation should not sever attachments.
    pub fn reset(&mut self) {
        self.force = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
        self.pending_impulse = Vec2::ZERO;
    }

    /// Removes every spring link this body holds.
    pub fn clear_springs(&mut self) {
        self.springs.clear();
    }

    /// Number of spring links this body holds.
    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    /// The spring link to `other`, if any.
    pub fn spring_to(&self, other: BodyId) -> Option<Spring> {
        self.springs.get(&other).copied()
    }
}

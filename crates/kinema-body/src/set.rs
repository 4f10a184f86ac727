//! Id-indexed body storage and lifecycle.
//!
//! Slots are reused through a free list; a `BodyId` is the slot
//! index. Spring links refer to partners by id, so detaching a body
//! must purge the reverse links too — `detach` guarantees that no
//! live body keeps a spring to a dead id.

use kinema_math::Vec2;
use kinema_types::{BodyId, KinemaError, KinemaResult, Scalar};

use crate::body::RigidBody;
use crate::spring::Spring;

/// The set of bodies currently attached to the simulation.
#[derive(Default)]
pub struct BodySet {
    slots: Vec<Option<RigidBody>>,
    free: Vec<usize>,
}

impl BodySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a body and returns its id.
    pub fn attach(&mut self, body: RigidBody) -> BodyId {
        if let Some(index) = self.free.pop() {
            self.slots[index] = Some(body);
            BodyId(index as u32)
        } else {
            self.slots.push(Some(body));
            BodyId((self.slots.len() - 1) as u32)
        }
    }

    /// Detaches a body, purging spring links other bodies hold to it.
    pub fn detach(&mut self, id: BodyId) -> KinemaResult<()> {
        let index = id.index();
        if !self.contains(id) {
            return Err(KinemaError::UnknownBody(id));
        }
        self.slots[index] = None;
        self.free.push(index);
        for body in self.slots.iter_mut().flatten() {
            body.springs.remove(&id);
        }
        Ok(())
    }

    /// Returns true if `id` names a live body.
    pub fn contains(&self, id: BodyId) -> bool {
        matches!(self.slots.get(id.index()), Some(Some(_)))
    }

    /// Number of live bodies.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Returns true if no bodies are attached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shared access to a body.
    pub fn get(&self, id: BodyId) -> Option<&RigidBody> {
        self.slots.get(id.index()).and_then(|slot| slot.as_ref())
    }

    /// Mutable access to a body.
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        self.slots.get_mut(id.index()).and_then(|slot| slot.as_mut())
    }

    /// Mutable access to two distinct bodies at once.
    pub fn pair_mut(
        &mut self,
        a: BodyId,
        b: BodyId,
    ) -> Option<(&mut RigidBody, &mut RigidBody)> {
        let (ia, ib) = (a.index(), b.index());
        if ia == ib || ia >= self.slots.len() || ib >= self.slots.len() {
            return None;
        }
        let (lo, hi) = if ia < ib { (ia, ib) } else { (ib, ia) };
        let (left, right) = self.slots.split_at_mut(hi);
        let lo_body = left[lo].as_mut()?;
        let hi_body = right[0].as_mut()?;
        if ia < ib {
            Some((lo_body, hi_body))
        } else {
            Some((hi_body, lo_body))
        }
    }

    /// Iterates live bodies with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &RigidBody)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|b| (BodyId(i as u32), b)))
    }

    /// Iterates live bodies mutably with their ids.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyId, &mut RigidBody)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|b| (BodyId(i as u32), b)))
    }

    /// Ids of all live bodies, in slot order.
    pub fn ids(&self) -> Vec<BodyId> {
        self.iter().map(|(id, _)| id).collect()
    }

    /// Links `a` to `b` with a spring, replacing any existing link
    /// between the pair. Self-links are rejected.
    pub fn add_spring(
        &mut self,
        a: BodyId,
        b: BodyId,
        stiffness: Scalar,
        rest_length: Scalar,
    ) -> KinemaResult<()> {
        if a == b {
            return Err(KinemaError::InvalidSpring(format!(
                "body {:?} cannot be linked to itself",
                a
            )));
        }
        if !self.contains(b) {
            return Err(KinemaError::UnknownBody(b));
        }
        let body = self.get_mut(a).ok_or(KinemaError::UnknownBody(a))?;
        body.springs.insert(b, Spring::new(stiffness, rest_length));
        Ok(())
    }

    /// Removes the spring from `a` to `b`. Missing links are a no-op.
    pub fn remove_spring(&mut self, a: BodyId, b: BodyId) -> KinemaResult<()> {
        let body = self.get_mut(a).ok_or(KinemaError::UnknownBody(a))?;
        body.springs.remove(&b);
        Ok(())
    }

    /// Sum of spring forces acting on `a` over all of its links.
    ///
    /// Links to ids that no longer name a live body are skipped;
    /// `detach` purges them, so this is a second line of defense.
    pub fn net_spring_force(&self, a: BodyId, damping: Scalar) -> Vec2 {
        let Some(body) = self.get(a) else {
            return Vec2::ZERO;
        };
        let mut net = Vec2::ZERO;
        for (&other_id, spring) in &body.springs {
            let Some(other) = self.get(other_id) else {
                continue;
            };
            net += body.spring_force(
                other.position(),
                spring.stiffness,
                spring.rest_length,
                damping,
            );
        }
        net
    }

    /// Host signal that a body's position was externally forced
    /// (e.g. user drag). Zeroes its simulation state, keeps springs.
    pub fn notify_repositioned(&mut self, id: BodyId) -> KinemaResult<()> {
        self.get_mut(id)
            .map(RigidBody::reset)
            .ok_or(KinemaError::UnknownBody(id))
    }

    /// Total kinetic energy `½·Σ m·|v|²` over massive bodies.
    pub fn kinetic_energy(&self) -> Scalar {
        self.iter()
            .map(|(_, b)| 0.5 * b.mass() * b.velocity.length_squared())
            .sum()
    }
}

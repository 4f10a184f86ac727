//! Broad phase collision detection.
//!
//! Quickly identifies *candidate* collision pairs with a cheap
//! axis-aligned bounds test. The narrow phase then refines candidates
//! into actual contacts.

use kinema_body::BodySet;
use kinema_types::BodyId;

/// Candidate pair from the broad phase.
#[derive(Debug, Clone, Copy)]
pub struct CandidatePair {
    /// First body of the pair.
    pub a: BodyId,
    /// Second body of the pair.
    pub b: BodyId,
}

/// Trait for broad phase collision detection.
///
/// Implementations cull pairs that cannot possibly collide before the
/// exact narrow-phase test runs.
///
/// # Implementations
/// - [`AabbBroadPhase`] — exhaustive pairwise bounds sweep
/// - [`NullBroadPhase`] — no-op for collision-free stepping
pub trait BroadPhase: Send {
    /// Query candidate collision pairs for the current body positions.
    fn candidate_pairs(&self, bodies: &BodySet) -> Vec<CandidatePair>;

    /// Returns the broad phase strategy name.
    fn name(&self) -> &str;
}

/// Exhaustive pairwise bounds sweep.
///
/// Every unordered pair is tested once; pairs where both bodies are
/// static are skipped (two immovable bodies have nothing to resolve).
/// Quadratic in body count, which matches the handfuls of sprites a
/// visual-programming stage carries.
#[derive(Debug, Default)]
pub struct AabbBroadPhase;

impl BroadPhase for AabbBroadPhase {
    fn candidate_pairs(&self, bodies: &BodySet) -> Vec<CandidatePair> {
        let ids = bodies.ids();
        let mut pairs = Vec::new();

        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                let (Some(body_a), Some(body_b)) = (bodies.get(a), bodies.get(b)) else {
                    continue;
                };
                if body_a.is_static() && body_b.is_static() {
                    continue;
                }
                if body_a.overlaps_bounds(body_b) {
                    pairs.push(CandidatePair { a, b });
                }
            }
        }
        pairs
    }

    fn name(&self) -> &str {
        "aabb_broad_phase"
    }
}

/// No-op broad phase for stepping without collision handling.
pub struct NullBroadPhase;

impl BroadPhase for NullBroadPhase {
    fn candidate_pairs(&self, _bodies: &BodySet) -> Vec<CandidatePair> {
        Vec::new()
    }

    fn name(&self) -> &str {
        "null_broad_phase"
    }
}

//! Host sprite capability.
//!
//! The visual object is the source of truth for a body's position.
//! The core only ever talks to it through this trait, so tests and
//! headless hosts can substitute an in-memory stub.

use kinema_math::Vec2;
use kinema_types::Scalar;

/// Position and extent provider for one simulated body.
///
/// `width`/`height` describe the rendered footprint and feed the
/// bounding-box broad phase, the circle narrow phase, and the drag
/// model's cross-section estimate. A sprite with no meaningful extent
/// may return 0 for both; the body then behaves as a point with a
/// zero-sized bound.
pub trait Sprite: Send {
    /// Current on-screen center.
    fn center(&self) -> Vec2;

    /// Repositions the sprite.
    fn set_center(&mut self, center: Vec2);

    /// Width of the rendered footprint.
    fn width(&self) -> Scalar {
        0.0
    }

    /// Height of the rendered footprint.
    fn height(&self) -> Scalar {
        0.0
    }
}

/// A sprite that exists only in memory.
///
/// Used by tests and by hosts that drive the simulation without a
/// scene graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InMemorySprite {
    center: Vec2,
    width: Scalar,
    height: Scalar,
}

impl InMemorySprite {
    /// Creates a sprite with an explicit footprint.
    pub fn new(center: Vec2, width: Scalar, height: Scalar) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Creates a zero-sized (point) sprite.
    pub fn at(center: Vec2) -> Self {
        Self::new(center, 0.0, 0.0)
    }
}

impl Sprite for InMemorySprite {
    fn center(&self) -> Vec2 {
        self.center
    }

    fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    fn width(&self) -> Scalar {
        self.width
    }

    fn height(&self) -> Scalar {
        self.height
    }
}

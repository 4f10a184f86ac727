//! Axis-aligned bounding box.
//!
//! Bounds are derived from a sprite's center and footprint each query;
//! nothing caches them, so there is no invalidation protocol.

use kinema_types::Scalar;

use crate::Vec2;

/// 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec2,
    /// Maximum corner.
    pub max: Vec2,
}

impl Aabb {
    /// Creates a box from explicit corners.
    #[inline]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Creates a box from a center point and full width/height.
    #[inline]
    pub fn from_center_size(center: Vec2, width: Scalar, height: Scalar) -> Self {
        let half = Vec2::new(width * 0.5, height * 0.5);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Full width of the box.
    #[inline]
    pub fn width(&self) -> Scalar {
        self.max.x - self.min.x
    }

    /// Full height of the box.
    #[inline]
    pub fn height(&self) -> Scalar {
        self.max.y - self.min.y
    }

    /// Non-strict overlap test: boxes sharing only an edge intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }
}

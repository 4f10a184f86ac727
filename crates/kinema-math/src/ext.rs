//! Extensions to `glam::DVec2`.
//!
//! glam covers magnitude, normalization, and arithmetic; this adds
//! both 90° rotations (glam only ships the counter-clockwise one).

use crate::Vec2;

/// Perpendicular rotations for 2D vectors.
pub trait Vec2Ext {
    /// Rotates 90° counter-clockwise: (x, y) → (-y, x).
    fn perp_ccw(self) -> Vec2;

    /// Rotates 90° clockwise: (x, y) → (y, -x).
    fn perp_cw(self) -> Vec2;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn perp_ccw(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    #[inline]
    fn perp_cw(self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }
}

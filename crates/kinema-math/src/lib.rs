//! # kinema-math
//!
//! 2D math primitives for the Kinema simulation core.
//!
//! Provides:
//! - Re-export of `glam::DVec2` as the canonical `Vec2`
//! - `Vec2Ext` — perpendicular rotations glam's f64 vectors lack a
//!   second direction for
//! - `Aabb` — axis-aligned bounding box for broad-phase overlap tests
//!
//! Zero-magnitude normalization is handled with glam's
//! `normalize_or_zero`: degenerate input yields the zero vector, never
//! NaN, so a physics tick cannot poison downstream state.

pub mod aabb;
pub mod ext;

pub use aabb::Aabb;
pub use ext::Vec2Ext;

// Re-export glam's f64 vector as the canonical math type for Kinema.
pub use glam::DVec2 as Vec2;

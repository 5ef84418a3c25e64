/*!
Core collision types and math aliases shared by the collision submodules.

This module intentionally contains no algorithms. It defines the data types
exchanged between:
- the geometry query interface (scenes answering ray casts)
- the ray origin calculator (corner points and spacing)
- the resolver passes (horizontal, vertical, slope climb/descend)
- the host, which supplies bounds and applies the corrected displacement

Conventions
- World space is Y-up; +X is "right".
- Angles stored on contact state are in degrees; trigonometry converts locally.
- The displacement is a `Vec3` for host-engine compatibility; `z` is carried
  through every pass untouched.
*/

use nalgebra as na;

/// Common math aliases for clarity and consistency.
pub type Vec2 = na::Vector2<f32>;
pub type Vec3 = na::Vector3<f32>;
pub type Point2 = na::Point2<f32>;
pub type UnitVec2 = na::Unit<na::Vector2<f32>>;

/// Axis-aligned bounding box of the moving body, in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds {
    /// Create new bounds, expecting `min <= max` per axis.
    #[inline]
    pub fn new(min: Point2, max: Point2) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y);
        Self { min, max }
    }

    #[inline]
    pub fn from_center_half_extents(center: Point2, half_extents: Vec2) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Point2 {
        na::center(&self.min, &self.max)
    }

    /// Shrink inward by `margin` on every side, i.e. `2 * margin` per axis.
    ///
    /// A box smaller than the margin collapses to inverted bounds; callers own
    /// that configuration error.
    #[inline]
    pub fn shrink(&self, margin: f32) -> Self {
        let delta = Vec2::new(margin, margin);
        Self {
            min: self.min + delta,
            max: self.max - delta,
        }
    }

    /// Move the bounds by `delta`.
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
        self.max += delta;
    }

    /// Test two boxes for intersection (touching counts).
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Nearest blocking surface returned by a ray query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point (world units).
    pub distance: f32,
    /// World-space surface normal at the hit, facing the ray origin.
    pub normal: Vec2,
}

/// A single ray cast by the resolver, kept for host-side debug drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugRay {
    pub origin: Point2,
    pub direction: Vec2,
    pub length: f32,
    pub hit: Option<RayHit>,
}

/// Sign with zero mapped to +1, the convention the passes use for direction.
#[inline]
pub(crate) fn sign(v: f32) -> f32 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

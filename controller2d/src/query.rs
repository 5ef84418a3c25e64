//! Capabilities the resolver consumes from its host.
//!
//! The resolver never owns geometry. It asks a [`RaycastQuery`] for the nearest
//! blocking surface along a ray and a [`BoundsSource`] for the body's current box.
//! Scenes are read-only during a frame, so one scene can serve every body's
//! controller; controllers themselves are single-owner.

use std::{rc::Rc, sync::Arc};

use crate::{
    collision::types::{Bounds, Point2, RayHit, UnitVec2},
    mask::CollisionMask,
};

/// Scene query: nearest blocking hit along a ray, or none.
///
/// Implementations must
/// - only report hits with `distance <= max_distance`,
/// - skip shapes whose layers do not intersect `mask`,
/// - return the normal of the hit surface facing back toward the ray origin.
pub trait RaycastQuery {
    fn cast_ray(
        &self,
        origin: Point2,
        dir: UnitVec2,
        max_distance: f32,
        mask: CollisionMask,
    ) -> Option<RayHit>;
}

impl<Q: RaycastQuery + ?Sized> RaycastQuery for &Q {
    #[inline]
    fn cast_ray(
        &self,
        origin: Point2,
        dir: UnitVec2,
        max_distance: f32,
        mask: CollisionMask,
    ) -> Option<RayHit> {
        (**self).cast_ray(origin, dir, max_distance, mask)
    }
}

impl<Q: RaycastQuery + ?Sized> RaycastQuery for Box<Q> {
    #[inline]
    fn cast_ray(
        &self,
        origin: Point2,
        dir: UnitVec2,
        max_distance: f32,
        mask: CollisionMask,
    ) -> Option<RayHit> {
        (**self).cast_ray(origin, dir, max_distance, mask)
    }
}

impl<Q: RaycastQuery + ?Sized> RaycastQuery for Rc<Q> {
    #[inline]
    fn cast_ray(
        &self,
        origin: Point2,
        dir: UnitVec2,
        max_distance: f32,
        mask: CollisionMask,
    ) -> Option<RayHit> {
        (**self).cast_ray(origin, dir, max_distance, mask)
    }
}

impl<Q: RaycastQuery + ?Sized> RaycastQuery for Arc<Q> {
    #[inline]
    fn cast_ray(
        &self,
        origin: Point2,
        dir: UnitVec2,
        max_distance: f32,
        mask: CollisionMask,
    ) -> Option<RayHit> {
        (**self).cast_ray(origin, dir, max_distance, mask)
    }
}

/// Supplies the moving body's current axis-aligned box.
pub trait BoundsSource {
    fn current_bounds(&self) -> Bounds;
}

impl BoundsSource for Bounds {
    #[inline]
    fn current_bounds(&self) -> Bounds {
        *self
    }
}

impl<B: BoundsSource + ?Sized> BoundsSource for &B {
    #[inline]
    fn current_bounds(&self) -> Bounds {
        (**self).current_bounds()
    }
}

//! Scripted scene for unit tests: hits come from a closure over the ray.

use std::cell::RefCell;

use super::types::{Point2, RayHit, UnitVec2, Vec2};
use crate::{mask::CollisionMask, query::RaycastQuery};

pub(crate) struct ScriptedQuery<F> {
    script: F,
    masks: RefCell<Vec<CollisionMask>>,
}

impl<F> ScriptedQuery<F>
where
    F: Fn(Point2, Vec2, f32) -> Option<RayHit>,
{
    pub fn new(script: F) -> Self {
        Self {
            script,
            masks: RefCell::new(Vec::new()),
        }
    }

    /// Mask of every query so far, in call order.
    pub fn masks(&self) -> Vec<CollisionMask> {
        self.masks.borrow().clone()
    }
}

impl<F> RaycastQuery for ScriptedQuery<F>
where
    F: Fn(Point2, Vec2, f32) -> Option<RayHit>,
{
    fn cast_ray(
        &self,
        origin: Point2,
        dir: UnitVec2,
        max_distance: f32,
        mask: CollisionMask,
    ) -> Option<RayHit> {
        self.masks.borrow_mut().push(mask);
        (self.script)(origin, dir.into_inner(), max_distance)
            .filter(|hit| hit.distance <= max_distance)
    }
}

pub(crate) fn hit(distance: f32, normal: Vec2) -> RayHit {
    RayHit { distance, normal }
}

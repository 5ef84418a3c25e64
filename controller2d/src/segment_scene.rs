//! Static scene made of line segments, queried by exact ray/segment intersection.
//!
//! Segments are two-sided: the reported normal always faces the ray origin.
//! Rays running parallel to a segment never hit it, so a floor segment does not
//! block rays sliding along it.

use crate::{
    collision::{
        settings::DIST_EPS,
        types::{Point2, RayHit, UnitVec2, Vec2},
    },
    mask::CollisionMask,
    query::RaycastQuery,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point2,
    pub b: Point2,
    pub layers: CollisionMask,
}

impl Segment {
    /// Distance along the ray and surface normal of the crossing, if any.
    pub fn intersect(&self, origin: Point2, dir: Vec2, max_distance: f32) -> Option<RayHit> {
        let edge = self.b - self.a;
        let denom = perp_dot(dir, edge);
        if denom.abs() <= DIST_EPS {
            return None;
        }

        let to_a = self.a - origin;
        let t = perp_dot(to_a, edge) / denom;
        let s = perp_dot(to_a, dir) / denom;
        if t < 0.0 || t > max_distance || !(0.0..=1.0).contains(&s) {
            return None;
        }

        let mut normal = Vec2::new(-edge.y, edge.x).normalize();
        if normal.dot(&dir) > 0.0 {
            normal = -normal;
        }
        Some(RayHit {
            distance: t,
            normal,
        })
    }
}

/// 2D cross product `a.x * b.y - a.y * b.x`.
#[inline]
fn perp_dot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Immutable-after-build list of segments.
#[derive(Clone, Debug, Default)]
pub struct SegmentScene {
    segments: Vec<Segment>,
}

impl SegmentScene {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push_segment(&mut self, a: Point2, b: Point2, layers: CollisionMask) -> &mut Self {
        self.segments.push(Segment { a, b, layers });
        self
    }

    /// Four edges of an axis-aligned box.
    pub fn push_box(&mut self, min: Point2, max: Point2, layers: CollisionMask) -> &mut Self {
        let top_left = Point2::new(min.x, max.y);
        let bottom_right = Point2::new(max.x, min.y);
        self.push_segment(min, bottom_right, layers)
            .push_segment(bottom_right, max, layers)
            .push_segment(max, top_left, layers)
            .push_segment(top_left, min, layers)
    }

    /// Right-triangle ramp standing on `foot.y`, rising from `foot` to `top`.
    ///
    /// The vertical back edge and the base are added too, so the ramp is closed.
    pub fn push_ramp(&mut self, foot: Point2, top: Point2, layers: CollisionMask) -> &mut Self {
        let corner = Point2::new(top.x, foot.y);
        self.push_segment(foot, top, layers)
            .push_segment(top, corner, layers)
            .push_segment(corner, foot, layers)
    }
}

impl RaycastQuery for SegmentScene {
    fn cast_ray(
        &self,
        origin: Point2,
        dir: UnitVec2,
        max_distance: f32,
        mask: CollisionMask,
    ) -> Option<RayHit> {
        let dir = dir.into_inner();
        self.segments
            .iter()
            .filter(|s| s.layers.intersects(mask))
            .filter_map(|s| s.intersect(origin, dir, max_distance))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

use log::trace;

use super::{
    contact::ContactState,
    origins::{RayOrigins, RaySpacing},
    settings::ANGLE_EPS_DEG,
    slope::{slope_angle, slope_tangent},
    types::{DebugRay, Point2, RayHit, UnitVec2, Vec2, Vec3, sign},
};
use crate::{config::ControllerConfig, query::RaycastQuery};

/// State borrowed for the duration of one resolve call.
///
/// `config` ray counts are already clamped by the controller.
///
/// Each pass takes the displacement by value and returns the corrected one, so
/// the resolver reads as a pipeline of `Vec3 -> Vec3` stages. Contact flags are
/// the only side channel.
pub(super) struct Pass<'a, Q: ?Sized> {
    pub query: &'a Q,
    pub config: &'a ControllerConfig,
    pub origins: RayOrigins,
    pub spacing: RaySpacing,
    pub contacts: &'a mut ContactState,
    pub debug: Option<&'a mut Vec<DebugRay>>,
}

impl<'a, Q: RaycastQuery + ?Sized> Pass<'a, Q> {
    /// Cast one axis-aligned ray of `length` from `origin`.
    pub fn cast(&mut self, origin: Point2, direction: Vec2, length: f32) -> Option<RayHit> {
        let dir = UnitVec2::new_normalize(direction);
        let hit = self
            .query
            .cast_ray(origin, dir, length, self.config.collision_mask);
        trace!(
            "ray ({:.4}, {:.4}) -> ({:.0}, {:.0}) len {:.4}: {:?}",
            origin.x, origin.y, direction.x, direction.y, length, hit
        );
        if let Some(rays) = self.debug.as_deref_mut() {
            rays.push(DebugRay {
                origin,
                direction,
                length,
                hit,
            });
        }
        hit
    }

    /// Sideways rays from the leading edge, bottom to top.
    ///
    /// `before_descend` is the displacement as requested, before the descend pass
    /// bent it downward; a climbable slope ahead cancels the descend.
    pub fn horizontal_collisions(&mut self, mut v: Vec3, before_descend: Vec3) -> Vec3 {
        let skin = self.config.skin_width;
        let max_climb = self.config.max_climb_angle;
        let direction_x = sign(v.x);
        let mut ray_length = v.x.abs() + skin;

        for i in 0..self.config.horizontal_ray_count {
            let origin = self.origins.bottom_leading(direction_x)
                + Vec2::y() * (self.spacing.horizontal * i as f32);
            let Some(hit) = self.cast(origin, Vec2::x() * direction_x, ray_length) else {
                continue;
            };
            let angle = slope_angle(hit.normal);

            if i == 0 && angle <= max_climb {
                if self.contacts.descending_slope {
                    self.contacts.descending_slope = false;
                    v = before_descend;
                    ray_length = v.x.abs() + skin;
                }
                // Walk flat up to the slope first, so the climb only spends distance
                // actually travelled along it.
                let mut distance_to_slope_start = 0.0;
                if !angles_equal(angle, self.contacts.slope_angle_old) {
                    distance_to_slope_start = hit.distance - skin;
                    v.x -= distance_to_slope_start * direction_x;
                }
                v = self.climb_slope(v, angle);
                v.x += distance_to_slope_start * direction_x;
            }

            if !self.contacts.climbing_slope || angle > max_climb {
                v.x = (hit.distance - skin) * direction_x;
                ray_length = hit.distance;
                if self.contacts.climbing_slope {
                    v.y = slope_tangent(self.contacts.slope_angle) * v.x.abs();
                }
                self.contacts.set_horizontal(direction_x);
            }
        }

        v
    }

    /// Up/down rays from the leading edge, left to right, shifted by the already
    /// resolved horizontal motion.
    pub fn vertical_collisions(&mut self, mut v: Vec3) -> Vec3 {
        let skin = self.config.skin_width;
        let direction_y = sign(v.y);
        let mut ray_length = v.y.abs() + skin;

        for i in 0..self.config.vertical_ray_count {
            let origin = self.origins.vertical_leading(direction_y)
                + Vec2::x() * (self.spacing.vertical * i as f32 + v.x);
            let Some(hit) = self.cast(origin, Vec2::y() * direction_y, ray_length) else {
                continue;
            };

            v.y = (hit.distance - skin) * direction_y;
            ray_length = hit.distance;
            if self.contacts.climbing_slope {
                let tangent = slope_tangent(self.contacts.slope_angle);
                if tangent > f32::EPSILON {
                    v.x = v.y / tangent * sign(v.x);
                }
            }
            self.contacts.set_vertical(direction_y);
        }

        if self.contacts.climbing_slope {
            v = self.reanchor_slope(v);
        }

        v
    }

    /// Re-probe the slope at the resolved height; a steepness change under the
    /// body within this call clamps x to the new surface.
    fn reanchor_slope(&mut self, mut v: Vec3) -> Vec3 {
        let skin = self.config.skin_width;
        let direction_x = sign(v.x);
        let ray_length = v.x.abs() + skin;
        let origin = self.origins.bottom_leading(direction_x) + Vec2::y() * v.y;

        if let Some(hit) = self.cast(origin, Vec2::x() * direction_x, ray_length) {
            let angle = slope_angle(hit.normal);
            if !angles_equal(angle, self.contacts.slope_angle) {
                v.x = (hit.distance - skin) * direction_x;
                self.contacts.slope_angle = angle;
            }
        }

        v
    }
}

#[inline]
pub(super) fn angles_equal(a: f32, b: f32) -> bool {
    (a - b).abs() <= ANGLE_EPS_DEG
}

/*!
Slope climb and descend.

Both directions project the requested horizontal distance onto the slope:
a move of `d` along a slope of angle `a` becomes `cos(a) * d` across and
`sin(a) * d` up (climb) or down (descend).
*/

use super::{
    passes::Pass,
    settings::{ANGLE_EPS_DEG, NORMAL_EPS_SQ},
    types::{Vec2, Vec3, sign},
};
use crate::query::RaycastQuery;

/// Angle in degrees between a surface normal and up.
///
/// A missing normal, reported when a ray starts inside solid geometry, reads as
/// a vertical wall.
#[inline]
pub fn slope_angle(normal: Vec2) -> f32 {
    if normal.norm_squared() < NORMAL_EPS_SQ {
        return 90.0;
    }
    normal.angle(&Vec2::y()).to_degrees()
}

#[inline]
pub(crate) fn slope_tangent(angle_deg: f32) -> f32 {
    angle_deg.to_radians().tan()
}

/// Redirect horizontal motion up a slope of `angle_deg`.
///
/// Returns `None` when the requested rise already exceeds what the slope
/// would give (e.g. a jump), leaving the caller's motion untouched.
pub fn climb(v: Vec3, angle_deg: f32) -> Option<Vec3> {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let move_distance = v.x.abs();
    let climb_velocity_y = sin * move_distance;
    if v.y > climb_velocity_y {
        return None;
    }
    Some(Vec3::new(cos * move_distance * sign(v.x), climb_velocity_y, v.z))
}

/// Redirect horizontal motion down a slope of `angle_deg`, on top of any
/// downward motion already requested.
pub fn descend(v: Vec3, angle_deg: f32) -> Vec3 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let move_distance = v.x.abs();
    Vec3::new(
        cos * move_distance * sign(v.x),
        v.y - sin * move_distance,
        v.z,
    )
}

impl<'a, Q: RaycastQuery + ?Sized> Pass<'a, Q> {
    pub fn climb_slope(&mut self, v: Vec3, angle_deg: f32) -> Vec3 {
        match climb(v, angle_deg) {
            Some(climbed) => {
                self.contacts.below = true;
                self.contacts.climbing_slope = true;
                self.contacts.slope_angle = angle_deg;
                climbed
            }
            None => v,
        }
    }

    /// Probe below the trailing bottom corner for a walkable slope falling away
    /// in the direction of travel and hug it.
    ///
    /// Only runs for downward motion with some horizontal component. The probe
    /// reaches exactly as far as the steepest descendable slope could drop over
    /// this call's horizontal distance.
    pub fn descend_slope(&mut self, v: Vec3) -> Vec3 {
        if v.x == 0.0 {
            return v;
        }
        let skin = self.config.skin_width;
        let max_descend = self.config.max_descend_angle;
        let direction_x = sign(v.x);
        let move_distance = v.x.abs();
        let probe_length = skin + slope_tangent(max_descend) * move_distance;
        let origin = self.origins.bottom_trailing(direction_x);

        let Some(hit) = self.cast(origin, -Vec2::y(), probe_length) else {
            return v;
        };
        let angle = slope_angle(hit.normal);
        if angle <= ANGLE_EPS_DEG || angle > max_descend {
            return v;
        }
        // The surface must fall away ahead of us, not rise.
        if sign(hit.normal.x) != direction_x {
            return v;
        }
        // Too high above the slope: let gravity do it.
        if hit.distance - skin > slope_tangent(angle) * move_distance {
            return v;
        }

        self.contacts.slope_angle = angle;
        self.contacts.descending_slope = true;
        self.contacts.below = true;
        descend(v, angle)
    }
}

use super::{
    settings::{DIST_EPS, MIN_RAY_COUNT},
    types::{Bounds, Point2, Vec2},
};

/// Corner points of the skin-shrunk body box. Rays are cast from these.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RayOrigins {
    pub top_left: Point2,
    pub top_right: Point2,
    pub bottom_left: Point2,
    pub bottom_right: Point2,
}

impl RayOrigins {
    pub fn from_bounds(bounds: &Bounds, skin_width: f32) -> Self {
        let b = bounds.shrink(skin_width);
        Self {
            top_left: Point2::new(b.min.x, b.max.y),
            top_right: Point2::new(b.max.x, b.max.y),
            bottom_left: Point2::new(b.min.x, b.min.y),
            bottom_right: Point2::new(b.max.x, b.min.y),
        }
    }

    /// Bottom corner on the side the body is moving toward.
    #[inline]
    pub fn bottom_leading(&self, direction_x: f32) -> Point2 {
        if direction_x < 0.0 {
            self.bottom_left
        } else {
            self.bottom_right
        }
    }

    /// Bottom corner on the side the body is moving away from.
    #[inline]
    pub fn bottom_trailing(&self, direction_x: f32) -> Point2 {
        if direction_x < 0.0 {
            self.bottom_right
        } else {
            self.bottom_left
        }
    }

    /// Left corner on the edge the body is moving toward vertically.
    #[inline]
    pub fn vertical_leading(&self, direction_y: f32) -> Point2 {
        if direction_y < 0.0 {
            self.bottom_left
        } else {
            self.top_left
        }
    }
}

/// Distance between neighbouring rays on each axis.
///
/// `horizontal` spaces the sideways rays along the box height, `vertical` spaces
/// the up/down rays along the box width.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RaySpacing {
    pub horizontal: f32,
    pub vertical: f32,
    /// Shrunk box size the spacing was derived from.
    pub size: Vec2,
}

impl RaySpacing {
    /// Ray counts below [`MIN_RAY_COUNT`] are clamped up.
    pub fn from_bounds(
        bounds: &Bounds,
        skin_width: f32,
        horizontal_ray_count: usize,
        vertical_ray_count: usize,
    ) -> Self {
        let size = bounds.shrink(skin_width).size();
        let h = clamp_ray_count(horizontal_ray_count);
        let v = clamp_ray_count(vertical_ray_count);
        Self {
            horizontal: size.y / (h - 1) as f32,
            vertical: size.x / (v - 1) as f32,
            size,
        }
    }

    /// True if this spacing was computed for a box of (nearly) this shrunk size.
    #[inline]
    pub fn matches(&self, shrunk_size: Vec2) -> bool {
        (self.size - shrunk_size).abs().max() <= DIST_EPS
    }
}

#[inline]
pub const fn clamp_ray_count(count: usize) -> usize {
    if count < MIN_RAY_COUNT {
        MIN_RAY_COUNT
    } else {
        count
    }
}

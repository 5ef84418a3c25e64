use log::debug;

use super::{
    contact::ContactState,
    origins::{RayOrigins, RaySpacing, clamp_ray_count},
    passes::Pass,
    types::{Bounds, DebugRay, Vec2, Vec3},
};
use crate::{
    config::{ConfigError, ControllerConfig},
    query::{BoundsSource, RaycastQuery},
};

/// Raycast-grid movement resolver for one axis-aligned box body.
///
/// One controller per body. It owns the body's contact state, the cached ray
/// spacing and the debug ray buffer, none of which are safe to share between
/// bodies; the scene it queries can be shared freely.
///
/// Per call:
/// - Refresh ray origins from the body's current bounds (spacing only when the
///   box size changed).
/// - Reset contacts, carrying the previous slope angle forward.
/// - Falling: try to hug a descending slope.
/// - Moving sideways: horizontal pass (walls, slope entry and climb).
/// - Moving vertically: vertical pass (floors, ceilings, slope re-anchor).
#[derive(Clone, Debug)]
pub struct Controller2D {
    config: ControllerConfig,
    spacing: Option<RaySpacing>,
    contacts: ContactState,
    debug_rays: Vec<DebugRay>,
}

impl Default for Controller2D {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl Controller2D {
    pub fn new(mut config: ControllerConfig) -> Self {
        let horizontal = clamp_ray_count(config.horizontal_ray_count);
        let vertical = clamp_ray_count(config.vertical_ray_count);
        if horizontal != config.horizontal_ray_count || vertical != config.vertical_ray_count {
            debug!(
                "ray counts clamped from ({}, {}) to ({}, {})",
                config.horizontal_ray_count, config.vertical_ray_count, horizontal, vertical
            );
        }
        config.horizontal_ray_count = horizontal;
        config.vertical_ray_count = vertical;

        Self {
            config,
            spacing: None,
            contacts: ContactState::default(),
            debug_rays: Vec::new(),
        }
    }

    /// Validate `config` before building the controller.
    pub fn try_new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Contacts found by the last resolve call.
    #[inline]
    pub fn contacts(&self) -> &ContactState {
        &self.contacts
    }

    /// Spacing used by the last resolve call, if any call happened yet.
    #[inline]
    pub fn ray_spacing(&self) -> Option<RaySpacing> {
        self.spacing
    }

    /// Rays cast by the last resolve call. Empty unless `record_debug_rays` is set.
    #[inline]
    pub fn debug_rays(&self) -> &[DebugRay] {
        &self.debug_rays
    }

    /// Resolve `desired` against `query` and return the motion that is safe to apply.
    ///
    /// `z` passes through unchanged.
    pub fn resolve_move<Q, B>(&mut self, query: &Q, body: &B, desired: Vec3) -> Vec3
    where
        Q: RaycastQuery + ?Sized,
        B: BoundsSource + ?Sized,
    {
        let bounds = body.current_bounds();
        let origins = RayOrigins::from_bounds(&bounds, self.config.skin_width);
        let spacing = self.refresh_spacing(&bounds);

        self.contacts.reset();
        self.debug_rays.clear();

        let mut pass = Pass {
            query,
            config: &self.config,
            origins,
            spacing,
            contacts: &mut self.contacts,
            debug: self
                .config
                .record_debug_rays
                .then_some(&mut self.debug_rays),
        };

        let requested = desired;
        let mut v = desired;
        if v.y < 0.0 {
            v = pass.descend_slope(v);
        }
        if v.x != 0.0 {
            v = pass.horizontal_collisions(v, requested);
        }
        if v.y != 0.0 {
            v = pass.vertical_collisions(v);
        }

        debug!(
            "resolved ({:.4}, {:.4}) -> ({:.4}, {:.4}); contacts {:?}",
            requested.x, requested.y, v.x, v.y, self.contacts
        );
        v
    }

    /// [`Self::resolve_move`] for hosts without a third axis.
    pub fn resolve_move_2d<Q, B>(&mut self, query: &Q, body: &B, desired: Vec2) -> Vec2
    where
        Q: RaycastQuery + ?Sized,
        B: BoundsSource + ?Sized,
    {
        self.resolve_move(query, body, Vec3::new(desired.x, desired.y, 0.0))
            .xy()
    }

    /// Resolve `desired` and apply the result to `body`.
    pub fn move_body<Q>(&mut self, query: &Q, body: &mut Bounds, desired: Vec3) -> Vec3
    where
        Q: RaycastQuery + ?Sized,
    {
        let v = self.resolve_move(query, &*body, desired);
        body.translate(v.xy());
        v
    }

    fn refresh_spacing(&mut self, bounds: &Bounds) -> RaySpacing {
        let skin = self.config.skin_width;
        let shrunk_size = bounds.shrink(skin).size();
        match self.spacing {
            Some(spacing) if spacing.matches(shrunk_size) => spacing,
            _ => {
                let spacing = RaySpacing::from_bounds(
                    bounds,
                    skin,
                    self.config.horizontal_ray_count,
                    self.config.vertical_ray_count,
                );
                debug!(
                    "ray spacing recomputed for size ({:.4}, {:.4}): {:.4} / {:.4}",
                    shrunk_size.x, shrunk_size.y, spacing.horizontal, spacing.vertical
                );
                self.spacing = Some(spacing);
                spacing
            }
        }
    }
}

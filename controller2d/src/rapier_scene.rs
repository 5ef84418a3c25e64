//! Rapier-based query scene for immutable/static world geometry.
//!
//! Builds an in-memory Rapier 2D scene from a set of static collider definitions
//! and answers the resolver's ray queries through Rapier's query pipeline.
//!
//! Design goals
//! - Deterministic: given the same inputs (sorted by `id`), build identical in-memory sets.
//! - Query-focused: only scene queries are run; nothing is simulated.
//! - Immutable world: this builder assumes statics do not move after construction.

// Re-export Rapier so downstream crates can use Rapier types without needing to
// depend on `rapier2d` directly.
pub use rapier2d;

use rapier2d::{
    na::{Isometry2, Point2 as RPoint2, Vector2 as RVector2},
    prelude::*,
};

use crate::{
    collision::types::{Point2, RayHit, UnitVec2, Vec2},
    mask::{CollisionMask, MaskBits},
    query::RaycastQuery,
};

/// Canonical, schema-agnostic definition of an immutable world collider.
///
/// Conventions
/// - Units are world units; Y is up.
/// - Rotation is a counter-clockwise angle in radians.
/// - Shape coordinates are local to the pose.
#[derive(Clone, Debug)]
pub struct StaticDef {
    /// Stable unique identifier used to ensure deterministic insertion order.
    pub id: u32,
    /// World-space translation.
    pub translation: Vec2,
    /// World-space rotation (radians).
    pub rotation: f32,
    /// Collider shape parameters.
    pub shape: StaticShapeDef,
    /// Layers this collider lives on.
    pub layers: CollisionMask,
}

impl StaticDef {
    /// Unrotated definition on every layer.
    pub fn new(id: u32, translation: Vec2, shape: StaticShapeDef) -> Self {
        Self {
            id,
            translation,
            rotation: 0.0,
            shape,
            layers: CollisionMask::ALL,
        }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_layers(mut self, layers: CollisionMask) -> Self {
        self.layers = layers;
        self
    }
}

/// Supported static collider shapes.
///
/// Keep this intentionally small and deterministic. Extend as needed.
#[derive(Clone, Debug)]
pub enum StaticShapeDef {
    /// Box with given half-extents.
    Cuboid { half_extents: Vec2 },
    /// Single line segment.
    Segment { a: Point2, b: Point2 },
    /// Solid triangle, e.g. a ramp.
    Triangle { a: Point2, b: Point2, c: Point2 },
    /// Open chain of segments through `vertices`.
    Polyline { vertices: Vec<Point2> },
}

/// In-memory Rapier structures needed for scene queries against a static world.
///
/// This stores:
/// - `RigidBodySet`/`ColliderSet` containing the static world geometry.
/// - `NarrowPhase` and `BroadPhaseBvh` used to create a borrowed `QueryPipeline`.
///
/// Built once, then shared read-only by every controller querying it.
pub struct RapierScene {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub broad_phase: BroadPhaseBvh,
    pub narrow_phase: NarrowPhase,
}

impl RapierScene {
    /// Build a query scene from a list of static collider definitions.
    ///
    /// Determinism
    /// - The input is sorted by `id` before insertion.
    /// - Any NaN/invalid values should be filtered/validated by the caller.
    pub fn build(mut defs: Vec<StaticDef>) -> Self {
        // Ensure deterministic insertion order.
        defs.sort_by_key(|d| d.id);

        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        // Insert each static as a fixed rigid-body + attached collider.
        for def in defs.into_iter() {
            let iso = Isometry2::new(RVector2::new(def.translation.x, def.translation.y), def.rotation);

            let rb = RigidBodyBuilder::fixed().pose(iso).build();
            let rb_handle = bodies.insert(rb);

            let collider = collider_from_def(&def);
            colliders.insert_with_parent(collider, rb_handle, &mut bodies);
        }

        // Initialize broad/narrow phases so queries can run.
        //
        // Collision detection only (no dynamics): this updates the broad-phase BVH
        // and the narrow-phase contact graph.
        let mut broad_phase = BroadPhaseBvh::new();
        let mut narrow_phase = NarrowPhase::new();
        let mut collision_pipeline = CollisionPipeline::new();

        let hooks = ();
        let events = ();

        collision_pipeline.step(
            0.0,
            &mut broad_phase,
            &mut narrow_phase,
            &mut bodies,
            &mut colliders,
            &hooks,
            &events,
        );

        log::debug!("rapier scene built with {} colliders", colliders.len());

        Self {
            bodies,
            colliders,
            broad_phase,
            narrow_phase,
        }
    }

    /// Create a borrowed `QueryPipeline` view suitable for scene queries.
    ///
    /// The returned pipeline borrows `self`, so it should be used within the scope
    /// of the borrow.
    pub fn query_pipeline<'a>(&'a self, filter: QueryFilter<'a>) -> QueryPipeline<'a> {
        self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        )
    }
}

impl RaycastQuery for RapierScene {
    fn cast_ray(
        &self,
        origin: Point2,
        dir: UnitVec2,
        max_distance: f32,
        mask: CollisionMask,
    ) -> Option<RayHit> {
        let on_layers =
            |_: ColliderHandle, collider: &Collider| mask.intersects(collider_layers(collider));
        let pipeline = self.query_pipeline(QueryFilter::default().predicate(&on_layers));

        let ray = Ray::new(
            RPoint2::new(origin.x, origin.y),
            RVector2::new(dir.x, dir.y),
        );
        let (_, hit) = pipeline.cast_ray_and_get_normal(&ray, max_distance, true)?;
        Some(RayHit {
            distance: hit.time_of_impact,
            normal: Vec2::new(hit.normal.x, hit.normal.y),
        })
    }
}

/// Layers are stored in the collider's `user_data`.
#[inline]
fn collider_layers(collider: &Collider) -> CollisionMask {
    CollisionMask::new(collider.user_data as MaskBits)
}

#[inline]
fn rpoint(p: Point2) -> RPoint2<f32> {
    RPoint2::new(p.x, p.y)
}

/// Build a Rapier collider from a `StaticDef`.
///
/// This uses the pose stored on the rigid-body as the collider parent transform.
/// So the collider is created with identity local transform.
fn collider_from_def(def: &StaticDef) -> Collider {
    let builder = match &def.shape {
        StaticShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y)
        }
        StaticShapeDef::Segment { a, b } => ColliderBuilder::segment(rpoint(*a), rpoint(*b)),
        StaticShapeDef::Triangle { a, b, c } => {
            ColliderBuilder::triangle(rpoint(*a), rpoint(*b), rpoint(*c))
        }
        StaticShapeDef::Polyline { vertices } => {
            ColliderBuilder::polyline(vertices.iter().copied().map(rpoint).collect(), None)
        }
    };
    builder.user_data(def.layers.bits as u128).build()
}

pub mod collision;
pub mod config;
pub mod mask;
pub mod query;
pub mod rapier_scene;
pub mod segment_scene;

pub use collision::{
    Bounds, ContactState, Controller2D, DebugRay, Point2, RayHit, RayOrigins, RaySpacing,
    UnitVec2, Vec2, Vec3, slope_angle,
};
pub use config::{ConfigError, ControllerConfig};
pub use mask::{CollisionLayer, CollisionMask, MaskBits};
pub use query::{BoundsSource, RaycastQuery};
pub use rapier_scene::{RapierScene, StaticDef, StaticShapeDef};
pub use segment_scene::{Segment, SegmentScene};

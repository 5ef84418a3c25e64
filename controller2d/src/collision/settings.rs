/*!
Raycast controller settings and tolerances.

These constants centralize the parameters used by the ray grid, the
horizontal/vertical passes and the slope logic. Keeping them together makes
tuning easier and keeps the defaults of [`crate::ControllerConfig`] in one place.

Notes
- Distances are in world units, angles in degrees.
- Favor practical world-space tolerances over machine epsilon for robust behavior.
*/

/// Inset kept between the ray origins and the body's real edges.
/// Rays start inside the box so a body resting against geometry still detects it.
pub const DEFAULT_SKIN_WIDTH: f32 = 0.015;

/// Default number of rays per axis.
pub const DEFAULT_RAY_COUNT: usize = 4;

/// A single ray cannot bracket both ends of an edge.
pub const MIN_RAY_COUNT: usize = 2;

/// Steepest surface (degrees from up) that horizontal motion will climb.
pub const DEFAULT_MAX_CLIMB_ANGLE: f32 = 80.0;

/// Steepest surface (degrees from up) that downward motion will hug.
pub const DEFAULT_MAX_DESCEND_ANGLE: f32 = 75.0;

/// Tolerance for "has the slope angle changed" comparisons (degrees).
pub const ANGLE_EPS_DEG: f32 = 1.0e-3;

/// Practical small distance for comparisons (world units).
pub const DIST_EPS: f32 = 1.0e-6;

/// Normals shorter than this (squared) are treated as missing.
pub const NORMAL_EPS_SQ: f32 = 1.0e-12;

/// Angles are kept strictly below vertical; at 90° the slope tangent is unbounded.
pub const MAX_ANGLE_LIMIT: f32 = 90.0;

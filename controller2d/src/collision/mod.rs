/*!
Collision root module.

This module re-exports submodules that implement the raycast-grid movement
resolver for axis-aligned 2D box bodies. The code is split for clarity:

- types:      shared data types (Bounds, RayHit, math aliases)
- settings:   controller defaults and tolerances
- origins:    skin-shrunk ray origins and per-axis ray spacing
- contact:    per-call contact report
- passes:     horizontal and vertical ray passes
- slope:      slope angle, climb and descend
- controller: the per-body resolver driving the passes
*/

pub mod contact;
pub mod controller;
pub mod origins;
mod passes;
pub mod settings;
pub mod slope;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types and functions.
pub use contact::ContactState;
pub use controller::Controller2D;
pub use origins::{RayOrigins, RaySpacing};
pub use slope::slope_angle;
pub use types::{Bounds, DebugRay, Point2, RayHit, UnitVec2, Vec2, Vec3};

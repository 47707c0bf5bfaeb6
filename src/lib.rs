//! viscone - vision cone meshes for top-down stealth games
//!
//! Given an emitter pose and a shape parameterization, this crate builds
//! a filled polygon mesh of the area the emitter can see, clipped against
//! line-of-sight obstacles:
//!
//! 1. Sample the shape's boundary at N parametric points
//! 2. Cast a visibility ray from the evaluation origin to each sample
//! 3. Pull occluded samples back to the nearest obstacle hit
//! 4. Triangulate the result into a fan around the anchor vertex
//!
//! Regeneration is change-driven: the per-frame [`VisionMeshGenerator::tick`]
//! compares pose and parameters against a cached snapshot and rebuilds the
//! buffers in place only when something moved or was edited.
//!
//! Obstacles are abstract: anything implementing [`VisibilityProbe`] can
//! clip the mesh. [`ObstacleScene`] is a self-contained wall-segment probe
//! for tests and demos.

mod config;
mod generator;
mod mesh;
mod overlay;
mod pose;
mod probe;
mod scene;
mod shapes;

pub use config::{ConfigError, EmitterConfig};
pub use generator::{GenerateError, GenerationMode, VisionMeshGenerator};
pub use mesh::{Topology, VisionMesh};
pub use overlay::{trace_rays, DebugRay, OverlayTrace};
pub use pose::Pose;
pub use probe::{NoObstacles, ObstacleMask, RayHit, VisibilityProbe};
pub use scene::{ObstacleScene, Wall};
pub use shapes::{
    ArrowParams, CircleParams, HalfEllipseParams, OffsetTriangleParams, RectangleParams,
    RhombusParams, ShapeParams,
};

//! Vision mesh generator - the shared engine
//!
//! Orchestrates the pipeline shared by all shape variants: sample the
//! boundary, cast a visibility ray to each sample, pull occluded samples
//! back to the nearest hit, and triangulate the result into a fan around
//! the anchor vertex. A cached parameter snapshot makes the per-frame
//! entry point cheap when nothing changed.

use nalgebra::{Point3, Vector3};
use thiserror::Error;

use crate::mesh::{Topology, VisionMesh};
use crate::pose::Pose;
use crate::probe::{ObstacleMask, VisibilityProbe};
use crate::shapes::ShapeParams;

/// Rays shorter than this skip the probe entirely
const MIN_RAY_DISTANCE: f32 = 1e-6;

/// Errors from mesh regeneration
///
/// None of these are fatal: the generator leaves its previous mesh
/// untouched and the host simply keeps rendering the last good one.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("degenerate geometry: a fan needs at least 3 vertices, got {vertices}")]
    DegenerateGeometry { vertices: usize },
}

/// When the per-frame tick is allowed to regenerate
///
/// Mirrors the editor-vs-play split: authoring tools want reactive
/// recomputation on every parameter edit, while live gameplay suppresses
/// the per-frame cost and regenerates only on explicit request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationMode {
    /// Recompute reactively whenever tracked parameters change
    Authoring,
    /// Suppress automatic recomputation
    Runtime,
}

/// Last-seen inputs, compared by value each tick
///
/// One snapshot struct instead of per-field "last" values, so adding a
/// shape parameter cannot leave a field out of the dirty check. Written
/// only after a successful regeneration.
#[derive(Clone, Debug)]
struct CachedParams {
    pose: Pose,
    shape: ShapeParams,
}

impl CachedParams {
    fn matches(&self, pose: &Pose, shape: &ShapeParams) -> bool {
        self.pose == *pose && shape.matches(&self.shape)
    }
}

/// Generates and owns the vision mesh for one emitter
///
/// The generator owns exactly one mesh resource; its buffers are cleared
/// and rewritten in place on regeneration, and the mesh is reallocated
/// only when the shape variant (and therefore the mesh name) changes.
pub struct VisionMeshGenerator {
    mesh: VisionMesh,
    cached: Option<CachedParams>,
    mask: ObstacleMask,
    /// Precomputed circle directions, keyed by the angle/precision that
    /// produced them
    circle_dirs: Vec<Vector3<f32>>,
    circle_key: Option<(u32, u32)>,
    /// Scratch boundary points, reused across regenerations
    samples: Vec<Point3<f32>>,
}

impl VisionMeshGenerator {
    /// Create a generator testing against every obstacle layer
    pub fn new() -> Self {
        Self::with_mask(ObstacleMask::ALL)
    }

    /// Create a generator with a specific obstacle mask
    pub fn with_mask(mask: ObstacleMask) -> Self {
        Self {
            mesh: VisionMesh::default(),
            cached: None,
            mask,
            circle_dirs: Vec::new(),
            circle_key: None,
            samples: Vec::new(),
        }
    }

    /// The generated mesh
    pub fn mesh(&self) -> &VisionMesh {
        &self.mesh
    }

    /// Obstacle layers this emitter tests against
    pub fn mask(&self) -> ObstacleMask {
        self.mask
    }

    /// Change the obstacle mask
    ///
    /// Invalidates the cache: the next authoring tick regenerates even if
    /// pose and shape are unchanged.
    pub fn set_mask(&mut self, mask: ObstacleMask) {
        if mask != self.mask {
            self.mask = mask;
            self.cached = None;
        }
    }

    /// Whether the inputs differ from the cached snapshot
    pub fn params_changed(&self, pose: &Pose, shape: &ShapeParams) -> bool {
        match &self.cached {
            Some(cached) => !cached.matches(pose, shape),
            None => true,
        }
    }

    /// Per-frame entry point
    ///
    /// In [`GenerationMode::Runtime`] this does nothing. In
    /// [`GenerationMode::Authoring`] it regenerates if and only if the
    /// pose or shape parameters changed since the last successful run,
    /// then caches them. Returns whether a regeneration ran.
    pub fn tick(
        &mut self,
        pose: &Pose,
        shape: &ShapeParams,
        probe: &dyn VisibilityProbe,
        mode: GenerationMode,
    ) -> Result<bool, GenerateError> {
        if mode == GenerationMode::Runtime {
            return Ok(false);
        }
        if !self.params_changed(pose, shape) {
            return Ok(false);
        }

        self.regenerate(pose, shape, probe)?;
        self.cached = Some(CachedParams {
            pose: *pose,
            shape: shape.clone(),
        });
        Ok(true)
    }

    /// Regenerate the mesh unconditionally
    ///
    /// Pure with respect to its inputs: the same pose, shape, and probe
    /// produce the same buffers. Does not touch the parameter cache;
    /// `tick` is the cached entry point.
    pub fn regenerate(
        &mut self,
        pose: &Pose,
        shape: &ShapeParams,
        probe: &dyn VisibilityProbe,
    ) -> Result<(), GenerateError> {
        let shape = shape.sanitized();

        // Boundary samples first: a degenerate sample count must not
        // disturb the previous mesh.
        self.collect_samples(&shape);
        let sample_count = self.samples.len();
        if sample_count + 1 < 3 {
            return Err(GenerateError::DegenerateGeometry {
                vertices: sample_count + 1,
            });
        }

        // The mesh identity follows the shape variant; a variant change
        // is the one case where the resource is reallocated.
        let name = shape.mesh_name();
        if self.mesh.name != name {
            log::debug!("shape variant changed, reallocating mesh '{name}'");
            self.mesh = VisionMesh::named(name);
        }
        self.mesh.clear();

        let anchor = shape.anchor();
        let anchor_uv = match &shape {
            ShapeParams::Circle(_) => [0.5, 0.5],
            _ => [0.0, 0.0],
        };
        self.mesh.push_vertex(anchor, anchor_uv);

        // Rays originate at the anchor (displaced for the strip shapes),
        // not necessarily at the emitter position.
        let origin = pose.to_world(anchor);

        for i in 0..sample_count {
            let local = self.samples[i];
            let world = pose.to_world(local);

            let offset = world - origin;
            let distance = offset.norm();

            let mut clipped = local;
            if distance > MIN_RAY_DISTANCE {
                let dir = offset / distance;
                if let Some(hit) = probe.raycast(origin, dir, distance, self.mask) {
                    clipped = pose.to_local(hit.point);
                }
            }

            let uv = match &shape {
                // Planar projection of the clipped point over the vision disc.
                ShapeParams::Circle(c) => [
                    clipped.x / (c.vision_range * 2.0) + 0.5,
                    clipped.z / (c.vision_range * 2.0) + 0.5,
                ],
                _ => {
                    let t = match shape.topology() {
                        Topology::ClosedFan => i as f32 / sample_count as f32,
                        Topology::OpenStrip => i as f32 / (sample_count - 1) as f32,
                    };
                    [t, 1.0]
                }
            };
            self.mesh.push_vertex(clipped, uv);
        }

        self.triangulate(shape.topology());
        Ok(())
    }

    /// Fill the scratch buffer with this shape's boundary points
    ///
    /// The circle goes through the cached direction set; everything else
    /// samples directly.
    fn collect_samples(&mut self, shape: &ShapeParams) {
        if let ShapeParams::Circle(c) = shape {
            let key = (c.vision_angle.to_bits(), c.precision);
            if self.circle_key != Some(key) {
                self.circle_dirs = c.directions();
                self.circle_key = Some(key);
            }
            self.samples.clear();
            for dir in &self.circle_dirs {
                self.samples.push(Point3::from(dir * c.vision_range));
            }
        } else {
            shape.boundary_points(&mut self.samples);
        }
    }

    /// Fan triangulation around vertex 0
    fn triangulate(&mut self, topology: Topology) {
        let count = self.mesh.vertex_count() as u32;
        match topology {
            Topology::ClosedFan => {
                for i in 1..count - 1 {
                    self.mesh.push_triangle(0, i + 1, i);
                }
                // Wrap the ring: last boundary vertex back to the first.
                self.mesh.push_triangle(0, 1, count - 1);
            }
            Topology::OpenStrip => {
                for i in 1..count - 1 {
                    self.mesh.push_triangle(0, i, i + 1);
                }
            }
        }
    }
}

impl Default for VisionMeshGenerator {
    fn default() -> Self {
        Self::new()
    }
}

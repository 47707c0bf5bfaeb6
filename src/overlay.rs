//! Diagnostic overlay - headless debug rays
//!
//! Produces the sample rays as data instead of drawing them: one entry
//! per boundary sample, running from the evaluation origin to either the
//! unobstructed boundary point or the obstacle hit. A host draws these as
//! colored lines (green clear, red occluded) with markers at the origin
//! and each hit. Purely visual; nothing consumes this output.

use nalgebra::Point3;

use crate::pose::Pose;
use crate::probe::{ObstacleMask, VisibilityProbe};
use crate::shapes::ShapeParams;

/// One sample ray of the overlay
#[derive(Clone, Copy, Debug)]
pub struct DebugRay {
    /// World-space ray start (the evaluation origin)
    pub start: Point3<f32>,
    /// World-space ray end: boundary point, or the hit that clipped it
    pub end: Point3<f32>,
    /// Whether an obstacle cut the ray short
    pub occluded: bool,
}

/// The full overlay for one emitter
#[derive(Clone, Debug)]
pub struct OverlayTrace {
    /// World-space evaluation origin; hosts drop a marker here
    pub origin: Point3<f32>,
    /// One ray per boundary sample, in sampling order
    pub rays: Vec<DebugRay>,
}

impl OverlayTrace {
    /// Number of occluded rays
    pub fn occluded_count(&self) -> usize {
        self.rays.iter().filter(|r| r.occluded).count()
    }
}

/// Trace the sample rays of a shape against a probe
///
/// Mirrors the generation loop exactly (same sanitization, same anchor,
/// same zero-distance skip), so the overlay always matches the mesh the
/// generator would produce for the same inputs.
pub fn trace_rays(
    pose: &Pose,
    shape: &ShapeParams,
    probe: &dyn VisibilityProbe,
    mask: ObstacleMask,
) -> OverlayTrace {
    let shape = shape.sanitized();

    let mut samples = Vec::new();
    shape.boundary_points(&mut samples);

    let origin = pose.to_world(shape.anchor());
    let mut rays = Vec::with_capacity(samples.len());

    for local in samples {
        let world = pose.to_world(local);
        let offset = world - origin;
        let distance = offset.norm();

        if distance <= 1e-6 {
            rays.push(DebugRay {
                start: origin,
                end: world,
                occluded: false,
            });
            continue;
        }

        let dir = offset / distance;
        match probe.raycast(origin, dir, distance, mask) {
            Some(hit) => rays.push(DebugRay {
                start: origin,
                end: hit.point,
                occluded: true,
            }),
            None => rays.push(DebugRay {
                start: origin,
                end: world,
                occluded: false,
            }),
        }
    }

    OverlayTrace { origin, rays }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::NoObstacles;
    use crate::scene::{ObstacleScene, Wall};
    use crate::shapes::{RectangleParams, ShapeParams};
    use approx::assert_relative_eq;

    #[test]
    fn test_unobstructed_rays_reach_boundary() {
        let shape = ShapeParams::Rectangle(RectangleParams {
            width: 2.0,
            height: 2.0,
            segments: 4,
        });
        let trace = trace_rays(&Pose::identity(), &shape, &NoObstacles, ObstacleMask::ALL);

        assert_eq!(trace.rays.len(), 4);
        assert_eq!(trace.occluded_count(), 0);
        for ray in &trace.rays {
            // Corners of the 2x2 square.
            assert_relative_eq!(ray.end.x.abs(), 1.0, epsilon = 1e-5);
            assert_relative_eq!(ray.end.z.abs(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_occluded_rays_stop_at_wall() {
        let shape = ShapeParams::Rectangle(RectangleParams {
            width: 2.0,
            height: 6.0,
            segments: 64,
        });
        let scene = ObstacleScene::with_walls(vec![Wall::new([-10.0, 2.0], [10.0, 2.0])]);

        let trace = trace_rays(&Pose::identity(), &shape, &scene, ObstacleMask::ALL);
        assert!(trace.occluded_count() > 0);

        for ray in trace.rays.iter().filter(|r| r.occluded) {
            assert_relative_eq!(ray.end.z, 2.0, epsilon = 1e-4);
        }
    }
}

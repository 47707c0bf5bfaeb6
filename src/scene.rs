//! Obstacle scene - a wall-segment visibility probe
//!
//! A minimal obstacle layer for tests and demos: vertical walls standing
//! on the XZ ground plane, each tagged with the layers it belongs to.
//! Rays are intersected in 2D (the ground plane) since both the walls and
//! the vision shapes are flat.

use nalgebra::{Point3, Vector3};

use crate::probe::{ObstacleMask, RayHit, VisibilityProbe};

/// A vertical wall segment on the ground plane
#[derive(Clone, Copy, Debug)]
pub struct Wall {
    /// Segment start (x, z)
    pub start: [f32; 2],
    /// Segment end (x, z)
    pub end: [f32; 2],
    /// Layers this wall belongs to
    pub layers: ObstacleMask,
}

impl Wall {
    /// Create a wall on the default (all-layers) mask
    pub fn new(start: [f32; 2], end: [f32; 2]) -> Self {
        Self {
            start,
            end,
            layers: ObstacleMask::ALL,
        }
    }

    /// Create a wall belonging to specific layers
    pub fn on_layers(start: [f32; 2], end: [f32; 2], layers: ObstacleMask) -> Self {
        Self { start, end, layers }
    }
}

/// A set of walls implementing [`VisibilityProbe`]
#[derive(Clone, Debug, Default)]
pub struct ObstacleScene {
    walls: Vec<Wall>,
}

impl ObstacleScene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self { walls: Vec::new() }
    }

    /// Create a scene from a list of walls
    pub fn with_walls(walls: Vec<Wall>) -> Self {
        Self { walls }
    }

    /// Add a wall
    pub fn add(&mut self, wall: Wall) -> &mut Self {
        self.walls.push(wall);
        self
    }

    /// Number of walls in the scene
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Whether the scene has no walls
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Intersect a 2D ray with a 2D segment, returning the ray distance
    ///
    /// Standard cross-product form: solves `origin + t*dir = start +
    /// u*(end-start)` and accepts `t >= 0`, `u` in [0, 1].
    fn ray_segment_intersection(
        origin: [f32; 2],
        dir: [f32; 2],
        start: [f32; 2],
        end: [f32; 2],
    ) -> Option<f32> {
        let seg = [end[0] - start[0], end[1] - start[1]];
        let cross = dir[0] * seg[1] - dir[1] * seg[0];

        if cross.abs() < 1e-6 {
            return None; // parallel
        }

        let to_start = [start[0] - origin[0], start[1] - origin[1]];
        let t = (to_start[0] * seg[1] - to_start[1] * seg[0]) / cross;
        let u = (to_start[0] * dir[1] - to_start[1] * dir[0]) / cross;

        if t >= 0.0 && (0.0..=1.0).contains(&u) {
            Some(t)
        } else {
            None
        }
    }
}

impl VisibilityProbe for ObstacleScene {
    fn raycast(
        &self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
        mask: ObstacleMask,
    ) -> Option<RayHit> {
        if mask.is_empty() {
            return None;
        }

        // Project onto the ground plane. The planar direction can vanish
        // for a straight-up ray; nothing to hit in that case.
        let dir2 = [direction.x, direction.z];
        let planar_len = (dir2[0] * dir2[0] + dir2[1] * dir2[1]).sqrt();
        if planar_len < 1e-6 {
            return None;
        }
        let dir2 = [dir2[0] / planar_len, dir2[1] / planar_len];
        let origin2 = [origin.x, origin.z];

        let mut nearest: Option<f32> = None;
        for wall in &self.walls {
            if !wall.layers.intersects(mask) {
                continue;
            }
            if let Some(t) = Self::ray_segment_intersection(origin2, dir2, wall.start, wall.end)
            {
                // Planar distance back to ray distance
                let distance = t / planar_len;
                if distance <= max_distance && nearest.map_or(true, |n| distance < n) {
                    nearest = Some(distance);
                }
            }
        }

        nearest.map(|distance| RayHit {
            distance,
            point: origin + direction * distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hit_straight_ahead() {
        let scene = ObstacleScene::with_walls(vec![Wall::new([-1.0, 2.0], [1.0, 2.0])]);

        let hit = scene
            .raycast(Point3::origin(), Vector3::z(), 10.0, ObstacleMask::ALL)
            .unwrap();

        assert_relative_eq!(hit.distance, 2.0, epsilon = 1e-5);
        assert_relative_eq!(hit.point.z, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_nearest_of_two() {
        let scene = ObstacleScene::with_walls(vec![
            Wall::new([-1.0, 5.0], [1.0, 5.0]),
            Wall::new([-1.0, 3.0], [1.0, 3.0]),
        ]);

        let hit = scene
            .raycast(Point3::origin(), Vector3::z(), 10.0, ObstacleMask::ALL)
            .unwrap();
        assert_relative_eq!(hit.distance, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_beyond_max_distance() {
        let scene = ObstacleScene::with_walls(vec![Wall::new([-1.0, 5.0], [1.0, 5.0])]);
        let hit = scene.raycast(Point3::origin(), Vector3::z(), 4.0, ObstacleMask::ALL);
        assert!(hit.is_none());
    }

    #[test]
    fn test_mask_filtering() {
        let scene = ObstacleScene::with_walls(vec![Wall::on_layers(
            [-1.0, 2.0],
            [1.0, 2.0],
            ObstacleMask::layer(5),
        )]);

        assert!(scene
            .raycast(Point3::origin(), Vector3::z(), 10.0, ObstacleMask::layer(5))
            .is_some());
        assert!(scene
            .raycast(Point3::origin(), Vector3::z(), 10.0, ObstacleMask::layer(1))
            .is_none());
        // Empty mask means nothing participates
        assert!(scene
            .raycast(Point3::origin(), Vector3::z(), 10.0, ObstacleMask::NONE)
            .is_none());
    }

    #[test]
    fn test_miss_to_the_side() {
        let scene = ObstacleScene::with_walls(vec![Wall::new([3.0, 2.0], [5.0, 2.0])]);
        let hit = scene.raycast(Point3::origin(), Vector3::z(), 10.0, ObstacleMask::ALL);
        assert!(hit.is_none());
    }
}
